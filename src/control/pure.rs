//! Explicit lifting of plain values.
//!
//! Several operations accept "either a container or a plain value" (the
//! fallback of `Maybe::alt`, the result of an `Effect::chain` step, the
//! fallback of `Future::alt`). Each of them goes through a conversion trait
//! that is implemented for the container itself, for [`Pure`], and for the
//! common plain value types listed by [`with_plain_value_types`].

/// A wrapper marking a value as plain, so it is used as-is rather than
/// being treated as a container to flatten.
///
/// The conversion traits are implemented for primitives, `String`, `Vec<T>`
/// and small tuples directly; any other type can be passed through `Pure`.
///
/// # Examples
///
/// ```rust
/// use functools::control::{Maybe, Pure};
///
/// #[derive(Debug, PartialEq)]
/// struct Pet { name: &'static str }
///
/// let found = Maybe::<Pet>::nothing().alt(Pure(Pet { name: "joker" }));
/// assert_eq!(found, Maybe::just(Pet { name: "joker" }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pure<A>(pub A);

impl<A> Pure<A> {
    /// Creates a new `Pure` wrapper around the given value.
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps and returns the inner value.
    pub fn into_inner(self) -> A {
        self.0
    }
}

/// Invokes `$callback!` with the list of plain value types that every
/// lifting trait implements directly.
macro_rules! with_plain_value_types {
    ($callback:ident) => {
        $callback!(
            i8,
            i16,
            i32,
            i64,
            i128,
            isize,
            u8,
            u16,
            u32,
            u64,
            u128,
            usize,
            f32,
            f64,
            bool,
            char,
            (),
            String,
            &'static str
        );
    };
}

pub(crate) use with_plain_value_types;
