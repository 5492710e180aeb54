//! The two combinators the rest of the crate is built with.
//!
//! - [`identity`]: the I combinator, the unit of composition and the
//!   argument of every functor identity law
//! - [`constant`]: the K combinator, which turns `over` into `set`

/// Returns the value unchanged.
///
/// # Examples
///
/// ```
/// use functools::compose::identity;
/// use functools::control::Maybe;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(Maybe::just("joker").map(identity), Maybe::just("joker"));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a copy of `value`.
///
/// # Examples
///
/// ```
/// use functools::compose::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-7)]
    #[case(i64::MAX)]
    fn identity_returns_its_argument(#[case] value: i64) {
        assert_eq!(identity(value), value);
    }

    #[rstest]
    fn constant_ignores_every_input() {
        let batman = constant::<_, i32>(String::from("batman"));
        assert_eq!(batman(1), "batman");
        assert_eq!(batman(2), "batman");
    }
}
