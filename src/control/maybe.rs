//! Maybe type - an optional value.
//!
//! `Maybe<A>` is either `Just(A)` or `Nothing`. Construction normalises
//! absence: `None`, `Value::Null` and an existing `Nothing` all become
//! `Nothing`, everything else becomes `Just`.
//!
//! The only way out of the abstraction is [`Maybe::cata`] (or the explicit
//! conversion to `Option`); every other operation returns a new `Maybe`.
//!
//! # Examples
//!
//! ```rust
//! use functools::control::Maybe;
//!
//! assert!(Maybe::new(None::<i32>).is_nothing());
//! assert!(Maybe::new(1).is_just());
//!
//! let greeting = Maybe::new("hello")
//!     .map(|s| format!("{s}, world"))
//!     .filter(|s| s.len() > 5)
//!     .cata(|s| s, || "hi".to_string());
//! assert_eq!(greeting, "hello, world");
//! ```

use std::fmt;

use super::pure::{Pure, with_plain_value_types};
use crate::typeclass::{
    Alternative, Applicative, Filterable, Functor, Monad, TypeConstructor,
};

/// An optional value: `Just(A)` or `Nothing`.
///
/// # Laws
///
/// `Maybe` satisfies the functor, applicative, monad, alternative and
/// filterable laws. See the `typeclass` module for their statements.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// No value.
    Nothing,
    /// A present value.
    Just(A),
}

/// Conversion into a normalised `Maybe`.
///
/// Absent inputs (`None`, `Nothing`, `Value::Null`) become `Nothing`; plain
/// values become `Just`. Wrap types without an implementation in [`Pure`].
///
/// [`IntoMaybe::into_maybe`] returns an existing `Maybe` unchanged; it backs
/// construction and `alt` fallbacks. [`IntoMaybe::into_mapped`] is the
/// re-wrapping used by [`Maybe::map`]: only absence collapses, so a `Just(v)`
/// result stays nested as `Just(Just(v))`.
pub trait IntoMaybe {
    /// The payload type of the resulting `Maybe`.
    type Value;

    /// The payload type when `self` is the result of a mapping function.
    type Mapped;

    /// Converts `self` into a `Maybe`.
    fn into_maybe(self) -> Maybe<Self::Value>;

    /// Wraps `self` as the result of a mapping function.
    fn into_mapped(self) -> Maybe<Self::Mapped>;
}

impl<A> IntoMaybe for Maybe<A> {
    type Value = A;
    type Mapped = Self;

    fn into_maybe(self) -> Self {
        self
    }

    fn into_mapped(self) -> Maybe<Self> {
        match self {
            Self::Just(value) => Maybe::Just(Self::Just(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> IntoMaybe for Option<A> {
    type Value = A;
    type Mapped = A;

    fn into_maybe(self) -> Maybe<A> {
        self.map_or(Maybe::Nothing, Maybe::Just)
    }

    fn into_mapped(self) -> Maybe<A> {
        self.into_maybe()
    }
}

impl<A> IntoMaybe for Pure<A> {
    type Value = A;
    type Mapped = A;

    fn into_maybe(self) -> Maybe<A> {
        Maybe::Just(self.0)
    }

    fn into_mapped(self) -> Maybe<A> {
        self.into_maybe()
    }
}

impl<T> IntoMaybe for Vec<T> {
    type Value = Self;
    type Mapped = Self;

    fn into_maybe(self) -> Maybe<Self> {
        Maybe::Just(self)
    }

    fn into_mapped(self) -> Maybe<Self> {
        Maybe::Just(self)
    }
}

impl<A, B> IntoMaybe for (A, B) {
    type Value = Self;
    type Mapped = Self;

    fn into_maybe(self) -> Maybe<Self> {
        Maybe::Just(self)
    }

    fn into_mapped(self) -> Maybe<Self> {
        Maybe::Just(self)
    }
}

impl<A, B, C> IntoMaybe for (A, B, C) {
    type Value = Self;
    type Mapped = Self;

    fn into_maybe(self) -> Maybe<Self> {
        Maybe::Just(self)
    }

    fn into_mapped(self) -> Maybe<Self> {
        Maybe::Just(self)
    }
}

macro_rules! impl_into_maybe_for_plain_values {
    ($($ty:ty),*) => {
        $(
            impl IntoMaybe for $ty {
                type Value = $ty;
                type Mapped = $ty;

                fn into_maybe(self) -> Maybe<$ty> {
                    Maybe::Just(self)
                }

                fn into_mapped(self) -> Maybe<$ty> {
                    Maybe::Just(self)
                }
            }
        )*
    };
}

with_plain_value_types!(impl_into_maybe_for_plain_values);

// =============================================================================
// Constructors and Discriminants
// =============================================================================

impl<A> Maybe<A> {
    /// Builds a `Maybe` from anything that normalises into one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functools::control::Maybe;
    ///
    /// assert!(Maybe::new(Some(3)).is_just());
    /// assert!(Maybe::new(Maybe::<i32>::nothing()).is_nothing());
    /// assert!(Maybe::new("").is_just());
    /// ```
    #[inline]
    pub fn new<V>(value: V) -> Self
    where
        V: IntoMaybe<Value = A>,
    {
        value.into_maybe()
    }

    /// Alias of [`Maybe::new`].
    #[inline]
    pub fn of<V>(value: V) -> Self
    where
        V: IntoMaybe<Value = A>,
    {
        Self::new(value)
    }

    /// Builds `Just(value)` without normalisation.
    #[inline]
    pub const fn just(value: A) -> Self {
        Self::Just(value)
    }

    /// Builds `Nothing`.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Returns `true` for `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

// =============================================================================
// Transformations
// =============================================================================

impl<A> Maybe<A> {
    /// Applies `function` to the payload and re-wraps its result.
    ///
    /// A function returning `None` (or `Nothing`) collapses the result to
    /// `Nothing`; a `Just` result is kept nested. Use [`Maybe::chain`] to
    /// unwrap one level. On `Nothing` the function is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functools::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(2).map(|n| n * 10), Maybe::just(20));
    ///
    /// let collapsed = Maybe::just(vec![1, 2]).map(|v| v.first().copied().filter(|n| *n > 5));
    /// assert!(collapsed.is_nothing());
    ///
    /// let nested = Maybe::just(1).map(Maybe::just);
    /// assert_eq!(nested, Maybe::just(Maybe::just(1)));
    /// ```
    #[inline]
    pub fn map<R, F>(self, function: F) -> Maybe<R::Mapped>
    where
        R: IntoMaybe,
        F: FnOnce(A) -> R,
    {
        match self {
            Self::Just(value) => function(value).into_mapped(),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a `Maybe`-returning function and returns its result as is.
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies the function carried by `functor` to this payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functools::control::Maybe;
    ///
    /// let exclaim = Maybe::just(|s: &str| format!("{s}!!"));
    /// assert_eq!(Maybe::just("hello").ap(exclaim), Maybe::just("hello!!".to_string()));
    /// ```
    #[inline]
    pub fn ap<B, F>(self, functor: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, functor) {
            (Self::Just(value), Maybe::Just(function)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }

    /// Downgrades `Just` to `Nothing` when `predicate` is false.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    /// Returns `self` when it is `Just`, otherwise the normalised fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functools::control::Maybe;
    ///
    /// assert_eq!(Maybe::nothing().alt(7), Maybe::just(7));
    /// assert_eq!(Maybe::just(1).alt(7), Maybe::just(1));
    /// assert!(Maybe::<i32>::nothing().alt(None).is_nothing());
    /// ```
    #[inline]
    #[must_use]
    pub fn alt<V>(self, fallback: V) -> Self
    where
        V: IntoMaybe<Value = A>,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => fallback.into_maybe(),
        }
    }

    /// Like [`Maybe::alt`], but the fallback is only computed on `Nothing`.
    #[inline]
    #[must_use]
    pub fn alt_chain<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => fallback(),
        }
    }

    /// Eliminates the `Maybe`, running exactly one of the two branches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functools::control::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.cata(|n| format!("got {n}"), || "none".to_string());
    /// assert_eq!(describe(Maybe::just(3)), "got 3");
    /// assert_eq!(describe(Maybe::nothing()), "none");
    /// ```
    #[inline]
    pub fn cata<R, J, N>(self, on_just: J, on_nothing: N) -> R
    where
        J: FnOnce(A) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        self.chain(|inner| inner)
    }
}

// =============================================================================
// Standard Traits
// =============================================================================

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(option: Option<A>) -> Self {
        option.into_maybe()
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

impl<A: fmt::Debug> fmt::Debug for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().fmap(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(first), Maybe::Just(second)) => Maybe::Just(function(first, second)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        other.ap(self)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.chain(function)
    }
}

impl<A> Alternative for Maybe<A> {
    #[inline]
    fn empty<B>() -> Maybe<B> {
        Maybe::Nothing
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        Self::alt(self, alternative)
    }

    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .find(Self::is_just)
            .unwrap_or(Self::Nothing)
    }
}

impl<A> Filterable for Maybe<A> {
    #[inline]
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        Self::filter(self, predicate)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Maybe<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Just(value) => serializer.serialize_some(value),
            Self::Nothing => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, A> serde::Deserialize<'de> for Maybe<A>
where
    A: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<A>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn absent_inputs_normalise_to_nothing() {
        assert!(Maybe::new(None::<i32>).is_nothing());
        assert!(Maybe::new(Maybe::<i32>::nothing()).is_nothing());
        assert!(Maybe::<String>::default().is_nothing());
    }

    #[rstest]
    fn present_inputs_are_wrapped_in_just() {
        assert!(Maybe::new(1).is_just());
        assert!(Maybe::new("").is_just());
        assert!(Maybe::new(Vec::<i32>::new()).is_just());
        assert!(Maybe::new(Pure(|n: i32| n)).is_just());
        assert!(Maybe::of(0.0).is_just());
    }

    #[rstest]
    fn map_collapses_absent_results() {
        let collapsed = Maybe::just(3).map(|_| None::<i32>);
        assert!(collapsed.is_nothing());

        let emptied = Maybe::just(3).map(|_| Maybe::<i32>::nothing());
        assert!(emptied.is_nothing());
    }

    #[rstest]
    fn map_keeps_present_maybe_results_nested() {
        let nested = Maybe::just(3).map(|n| Maybe::just(n + 1));
        assert_eq!(nested, Maybe::just(Maybe::just(4)));

        let doubly = Maybe::just(Maybe::just(1)).map(|inner| inner);
        assert_eq!(doubly, Maybe::just(Maybe::just(1)));
        assert_eq!(doubly.flatten(), Maybe::just(1));
    }

    #[rstest]
    fn new_and_alt_accept_an_existing_maybe_unchanged() {
        assert_eq!(Maybe::new(Maybe::just(2)), Maybe::just(2));
        assert_eq!(Maybe::nothing().alt(Maybe::just(5)), Maybe::just(5));
    }

    #[rstest]
    fn map_on_nothing_never_calls_the_function() {
        let result = Maybe::<i32>::nothing().map(|_| -> i32 { unreachable!() });
        assert!(result.is_nothing());
    }

    #[rstest]
    fn ap_with_a_missing_function_is_nothing() {
        let missing: Maybe<fn(i32) -> i32> = Maybe::nothing();
        assert!(Maybe::just(1).ap(missing).is_nothing());
        assert!(Maybe::<i32>::nothing().ap(Maybe::just(|n: i32| n + 1)).is_nothing());
    }

    #[rstest]
    #[case(Maybe::just(4), Maybe::just(4))]
    #[case(Maybe::just(3), Maybe::nothing())]
    #[case(Maybe::nothing(), Maybe::nothing())]
    fn filter_keeps_even_values(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(input.filter(|n| n % 2 == 0), expected);
    }

    #[rstest]
    fn alt_chain_is_lazy_on_just() {
        let kept = Maybe::just(1).alt_chain(|| unreachable!());
        assert_eq!(kept, Maybe::just(1));
        assert_eq!(Maybe::nothing().alt_chain(|| Maybe::just(2)), Maybe::just(2));
    }

    #[rstest]
    fn cata_extracts_with_fallback() {
        let get = |maybe: Maybe<&'static str>| maybe.cata(|s| s.to_string(), || "hi".to_string());
        assert_eq!(get(Maybe::new("hello")), "hello");
        assert_eq!(get(Maybe::nothing()), "hi");
    }

    #[rstest]
    fn flatten_removes_one_level() {
        assert_eq!(Maybe::just(Maybe::just(1)).flatten(), Maybe::just(1));
        assert!(Maybe::just(Maybe::<i32>::nothing()).flatten().is_nothing());
    }

    #[rstest]
    fn choice_returns_the_first_just() {
        let chosen = <Maybe<i32> as Alternative>::choice(vec![
            Maybe::nothing(),
            Maybe::just(2),
            Maybe::just(3),
        ]);
        assert_eq!(chosen, Maybe::just(2));
    }

    #[rstest]
    fn display_and_debug_name_the_variant() {
        assert_eq!(format!("{}", Maybe::just(5)), "Just(5)");
        assert_eq!(format!("{:?}", Maybe::<i32>::nothing()), "Nothing");
    }

    #[rstest]
    fn option_round_trip() {
        let maybe: Maybe<i32> = Some(4).into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(4));
    }
}
