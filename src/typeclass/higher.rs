//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! `TypeConstructor` records the payload a container is currently applied to
//! and how to re-apply the same constructor to another payload, which is
//! all `Functor`, `Applicative` and `Monad` need to name their result types.
//!
//! # Example
//!
//! ```rust
//! use functools::control::Maybe;
//! use functools::typeclass::TypeConstructor;
//!
//! fn rewrap<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let rewrapped: Maybe<String> = rewrap(Maybe::just(42));
//! assert!(rewrapped.is_nothing());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// is `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Outcome<i32, E>`, `WithType<String>` is `Outcome<String, E>`; the
    /// error channel is part of the constructor and never changes.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Boxed<A>(A);

    impl<A> TypeConstructor for Boxed<A> {
        type Inner = A;
        type WithType<B> = Boxed<B>;
    }

    #[test]
    fn inner_type_is_the_payload() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Boxed<i32>>();
    }

    #[test]
    fn with_type_reapplies_the_constructor() {
        fn assert_rewrapped<T: TypeConstructor<WithType<usize> = Boxed<usize>>>() {}
        assert_rewrapped::<Boxed<&'static str>>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Boxed<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_bool::<Step2>();
    }
}
