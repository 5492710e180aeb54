//! Applicative type class - applying functions within a context.
//!
//! `Applicative` extends `Functor` with `pure`, which lifts a plain value,
//! and `map2`/`apply`, which combine independent contexts.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
//! ```
//!
//! The containers in this crate also expose the flipped form `value.ap(functions)`,
//! in which the receiver carries the argument and the parameter carries the
//! function. Both forms satisfy the same laws.

use super::functor::Functor;

/// A type class for functors that can lift values and combine contexts.
///
/// # Examples
///
/// ```rust
/// use functools::control::Maybe;
/// use functools::typeclass::Applicative;
///
/// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(lifted, Maybe::just(42));
///
/// let sum = Maybe::just(3).map2(Maybe::just(4), |x, y| x + y);
/// assert_eq!(sum, Maybe::just(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side is on its negative branch the result is too, and the
    /// function is never called.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the function inside `self` to the value inside `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functools::control::Maybe;
    /// use functools::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::just(5)), Maybe::just(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}
