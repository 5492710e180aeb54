//! Type class traits for the container types.
//!
//! Every container in this crate implements the same algebra, spelled as
//! traits so the laws can be stated once and checked generically:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Alternative`]: Choosing the first positive branch
//! - [`Filterable`]: Downgrading a positive branch by predicate
//! - [`Bifunctor`]: Mapping over success and failure channels
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types to name "the same
//! container with another payload", which is what the traits above return.
//!
//! ## Foundation Types
//!
//! - [`Identity`]: Identity functor, used by the lens system to rebuild structures
//! - [`Const`]: Constant functor, used by the lens system to read a focus
//!
//! # Examples
//!
//! ```rust
//! use functools::control::Maybe;
//! use functools::typeclass::{Applicative, Functor, Monad};
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(20);
//! let result = lifted.fmap(|n| n + 1).flat_map(|n| Maybe::just(n * 2));
//! assert_eq!(result, Maybe::just(42));
//! ```

mod alternative;
mod applicative;
mod bifunctor;
mod constant;
mod filterable;
mod functor;
mod higher;
mod identity;
mod monad;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use constant::Const;
pub use filterable::Filterable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
