//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the payload of a container without changing its
//! shape: a `Nothing` stays `Nothing`, an `Err` stays `Err`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functools::control::Maybe;
//! use functools::typeclass::Functor;
//!
//! let transformed = Maybe::just(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::just("5".to_string()));
//!
//! let untouched: Maybe<String> = Maybe::<i32>::nothing().fmap(|n| n.to_string());
//! assert!(untouched.is_nothing());
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// - Identity: `fa.fmap(|x| x) == fa`
/// - Composition: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functools::control::Outcome;
    /// use functools::typeclass::Functor;
    ///
    /// let doubled: Outcome<i32, String> = Outcome::of(5).fmap(|n| n * 2);
    /// assert_eq!(doubled, Outcome::Ok(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the receiver available.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functools::control::Maybe;
    /// use functools::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::just(5).replace("replaced"), Maybe::just("replaced"));
    /// assert!(Maybe::<i32>::nothing().replace("replaced").is_nothing());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
