//! Filterable type class - downgrading a positive branch by predicate.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.filter(|_| true) == fa
//! ```
//!
//! ## Distributivity Law
//!
//! ```text
//! fa.filter(|x| p(x) && q(x)) == fa.filter(p).filter(q)
//! ```
//!
//! ## Annihilation Law
//!
//! Filtering two different values with an always-false predicate yields
//! the same negative branch:
//!
//! ```text
//! fa.filter(|_| false) == fb.filter(|_| false)
//! ```

use super::functor::Functor;

/// A functor whose positive branch can be rejected by a predicate.
///
/// # Examples
///
/// ```rust
/// use functools::control::Maybe;
/// use functools::typeclass::Filterable;
///
/// assert_eq!(Filterable::filter(Maybe::just(4), |n: &i32| n % 2 == 0), Maybe::just(4));
/// assert!(Filterable::filter(Maybe::just(3), |n: &i32| n % 2 == 0).is_nothing());
/// ```
pub trait Filterable: Functor {
    /// Keeps the positive branch only when `predicate` holds for its value.
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&Self::Inner) -> bool;
}
