//! The functor choice behind a lens.
//!
//! A van Laarhoven lens is polymorphic over the functor its "to-functor"
//! transformer produces. Rust cannot quantify over a type constructor
//! directly, so the choice is made through a kind marker: a type whose
//! [`FunctorKind::Wrapped`] names the functor and whose
//! [`FunctorKind::fmap`] maps over it.
//!
//! Two markers are enough for every lens operation:
//!
//! - [`IdentityKind`] rebuilds the structure (`over`, `set`)
//! - [`ConstKind`] carries the focus out untouched (`view`)

use std::marker::PhantomData;

use crate::typeclass::{Const, Functor, Identity};

/// A functor selected by a marker type.
pub trait FunctorKind {
    /// The functor applied to `A`.
    type Wrapped<A>;

    /// Maps `function` over `wrapped`.
    fn fmap<A, B, F>(wrapped: Self::Wrapped<A>, function: F) -> Self::Wrapped<B>
    where
        F: FnOnce(A) -> B;
}

/// Selects [`Identity`]: mapping runs the function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {}

impl FunctorKind for IdentityKind {
    type Wrapped<A> = Identity<A>;

    #[inline]
    fn fmap<A, B, F>(wrapped: Identity<A>, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        wrapped.fmap(function)
    }
}

/// Selects [`Const<C, _>`](Const): mapping keeps the carried `C` and never
/// runs the function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstKind<C>(PhantomData<fn() -> C>);

impl<C> FunctorKind for ConstKind<C> {
    type Wrapped<A> = Const<C, A>;

    #[inline]
    fn fmap<A, B, F>(wrapped: Const<C, A>, _function: F) -> Const<C, B>
    where
        F: FnOnce(A) -> B,
    {
        wrapped.retag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_kind_runs_the_function() {
        let mapped = IdentityKind::fmap(Identity::new(2), |n| n * 21);
        assert_eq!(mapped.into_inner(), 42);
    }

    #[rstest]
    fn const_kind_keeps_the_carried_value() {
        let carried: Const<&str, i32> = Const::new("joker");
        let mapped = ConstKind::<&str>::fmap(carried, |n: i32| -> String { unreachable!("{n}") });
        assert_eq!(mapped.into_value(), "joker");
    }
}
