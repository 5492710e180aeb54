//! Constant functor.
//!
//! `Const<C, A>` carries a value of type `C` and only pretends to carry an
//! `A`: mapping over it changes the phantom type and never calls the function.
//! The lens system uses it to read a focus without rebuilding the structure.

use std::fmt;
use std::marker::PhantomData;

use super::{Functor, TypeConstructor};

/// A functor that ignores the mapped function and keeps its original value.
///
/// # Examples
///
/// ```rust
/// use functools::typeclass::{Const, Functor};
///
/// let carried: Const<&str, i32> = Const::new("joker");
/// let mapped: Const<&str, String> = carried.fmap(|n: i32| n.to_string());
/// assert_eq!(mapped.into_value(), "joker");
/// ```
pub struct Const<C, A> {
    value: C,
    _marker: PhantomData<fn() -> A>,
}

impl<C, A> Const<C, A> {
    /// Creates a `Const` carrying `value`.
    #[inline]
    pub const fn new(value: C) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Returns the carried value.
    #[inline]
    pub fn into_value(self) -> C {
        self.value
    }

    /// Returns a reference to the carried value.
    #[inline]
    pub const fn value(&self) -> &C {
        &self.value
    }

    /// Changes the phantom type without touching the carried value.
    #[inline]
    pub fn retag<B>(self) -> Const<C, B> {
        Const::new(self.value)
    }
}

impl<C, A> TypeConstructor for Const<C, A> {
    type Inner = A;
    type WithType<B> = Const<C, B>;
}

impl<C: Clone, A> Functor for Const<C, A> {
    #[inline]
    fn fmap<B, F>(self, _function: F) -> Const<C, B>
    where
        F: FnOnce(A) -> B,
    {
        self.retag()
    }

    #[inline]
    fn fmap_ref<B, F>(&self, _function: F) -> Const<C, B>
    where
        F: FnOnce(&A) -> B,
    {
        Const::new(self.value.clone())
    }
}

impl<C: Clone, A> Clone for Const<C, A> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<C: Copy, A> Copy for Const<C, A> {}

impl<C: PartialEq, A> PartialEq for Const<C, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<C: Eq, A> Eq for Const<C, A> {}

impl<C: fmt::Debug, A> fmt::Debug for Const<C, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Const").field(&self.value).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn fmap_never_calls_the_function() {
        let calls = Cell::new(0);
        let carried: Const<i32, i32> = Const::new(7);
        let mapped = carried.fmap(|n| {
            calls.set(calls.get() + 1);
            n * 2
        });
        assert_eq!(mapped.into_value(), 7);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn fmap_ref_keeps_the_receiver() {
        let carried: Const<String, ()> = Const::new("dog".to_string());
        let mapped: Const<String, usize> = carried.fmap_ref(|_| 1);
        assert_eq!(mapped.value(), "dog");
        assert_eq!(carried.into_value(), "dog");
    }

    #[rstest]
    fn equality_ignores_the_phantom_type() {
        let first: Const<u8, String> = Const::new(1);
        let second: Const<u8, String> = Const::new(1);
        assert_eq!(first, second);
        assert_eq!(format!("{first:?}"), "Const(1)");
    }
}
