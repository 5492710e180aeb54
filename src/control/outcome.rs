//! Outcome type - success or failure with a carried reason.
//!
//! `Outcome<T, E>` is `Ok(T)` or `Err(E)`. Unlike [`Maybe`](super::Maybe),
//! construction never inspects the payload: `Outcome::new(None::<i32>)` and
//! `Outcome::new(())` are both `Ok`. Only [`Outcome::err`] produces a failure.
//!
//! `map`, `chain` and `ap` work on the `Ok` channel and pass `Err` through;
//! `catchmap` mirrors `map` on the `Err` channel.
//!
//! # Examples
//!
//! ```rust
//! use functools::control::Outcome;
//!
//! let parsed: Outcome<i32, String> = Outcome::new("42")
//!     .chain(|s| s.parse::<i32>().map_err(|e| e.to_string()).into());
//! assert_eq!(parsed.map(|n| n + 1), Outcome::Ok(43));
//!
//! let failed: Outcome<i32, &str> = Outcome::err("boom");
//! assert_eq!(failed.catchmap(str::len), Outcome::Err(4));
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Bifunctor, Functor, Monad, TypeConstructor};

/// A success value `Ok(T)` or a failure reason `Err(E)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The success channel.
    Ok(T),
    /// The failure channel.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps `value` as a success, whatever the value is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functools::control::Outcome;
    ///
    /// assert!(Outcome::<_, String>::new(None::<i32>).is_ok());
    /// assert!(Outcome::<_, String>::new(0).is_ok());
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self::Ok(value)
    }

    /// Alias of [`Outcome::new`].
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Ok(value)
    }

    /// Wraps `error` as a failure.
    #[inline]
    pub const fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Returns `true` for `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` for `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Borrows both channels.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the success value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Sequences an `Outcome`-returning function on the success value.
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies the function carried by `functor` to this success value.
    ///
    /// A failed receiver wins over a failed `functor`.
    #[inline]
    pub fn ap<U, F>(self, functor: Outcome<F, E>) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => functor.map(|function| function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the failure reason.
    #[inline]
    pub fn catchmap<E2, F>(self, function: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Applies `on_ok` or `on_err`, depending on the active channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functools::control::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::new(2);
    /// assert_eq!(ok.bimap(|n| n * 2, str::len), Outcome::Ok(4));
    /// ```
    #[inline]
    pub fn bimap<U, E2, F, G>(self, on_ok: F, on_err: G) -> Outcome<U, E2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(on_ok(value)),
            Self::Err(error) => Outcome::Err(on_err(error)),
        }
    }

    /// Exchanges the channels, keeping the payload.
    #[inline]
    pub fn swap(self) -> Outcome<E, T> {
        match self {
            Self::Ok(value) => Outcome::Err(value),
            Self::Err(error) => Outcome::Ok(error),
        }
    }

    /// Eliminates the `Outcome`, running exactly one of the two branches.
    #[inline]
    pub fn cata<R, F, G>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Converts into the standard library's `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.cata(Ok, Err)
    }
}

impl<T: Default, E> Default for Outcome<T, E> {
    fn default() -> Self {
        Self::Ok(T::default())
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error.clone()),
        }
    }
}

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Ok(first), Outcome::Ok(second)) => Outcome::Ok(function(first, second)),
            (Self::Err(error), _) | (_, Outcome::Err(error)) => Outcome::Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<B, E>) -> Outcome<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.chain(function)
    }
}

impl<T, E> Bifunctor<T, E> for Outcome<T, E> {
    type Target<C, D> = Outcome<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<C, D>
    where
        F: FnOnce(T) -> C,
        G: FnOnce(E) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }
}
