//! Bifunctor type class - mapping over two channels.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Channel Order for Outcome
//!
//! `Outcome<T, E>` is implemented as `Bifunctor<T, E>`: `first` maps the
//! success channel and `second` the error channel, so `bimap(on_ok, on_err)`
//! reads the same way as `Outcome::cata(on_ok, on_err)`.

/// A type class for types with two type parameters that can both be mapped.
///
/// # Examples
///
/// ```rust
/// use functools::control::Outcome;
/// use functools::typeclass::Bifunctor;
///
/// let failed: Outcome<i32, String> = Outcome::err("boom".to_string());
/// let mapped = Bifunctor::bimap(failed, |n: i32| n * 2, |s: String| s.len());
/// assert_eq!(mapped, Outcome::Err(4));
/// ```
pub trait Bifunctor<A, B> {
    /// The same constructor applied to two new types.
    type Target<C, D>;

    /// Maps both channels; only the function for the active channel runs.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first channel only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Maps the second channel only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }
}
