//! Alternative type class - choosing the first positive branch.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! empty.alt(x) == x
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! x.alt(empty) == x
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```
//!
//! ## Distributivity Law
//!
//! ```text
//! (fa.alt(fb)).fmap(f) == fa.fmap(f).alt(fb.fmap(f))
//! ```

use super::applicative::Applicative;

/// An applicative with an empty element and an associative choice.
///
/// # Examples
///
/// ```rust
/// use functools::control::Maybe;
/// use functools::typeclass::Alternative;
///
/// let empty: Maybe<i32> = <Maybe<()>>::empty();
/// assert!(empty.is_nothing());
///
/// let chosen = Alternative::alt(Maybe::nothing(), Maybe::just(42));
/// assert_eq!(chosen, Maybe::just(42));
/// ```
pub trait Alternative: Applicative {
    /// The identity element of `alt`.
    fn empty<A>() -> Self::WithType<A>;

    /// Returns `self` when it is positive, otherwise `alternative`.
    fn alt(self, alternative: Self) -> Self;

    /// Returns the first positive alternative, or `empty`.
    fn choice<I>(alternatives: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = Self>;
}
