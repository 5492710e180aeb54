//! # functools
//!
//! Law-abiding functional containers and composable lenses.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad`, `Alternative`,
//!   `Filterable` and `Bifunctor`, plus the `Identity` and `Const` functors
//! - **Containers**: [`Maybe`](control::Maybe) for optional values,
//!   [`Outcome`](control::Outcome) for success or failure,
//!   [`Effect`](effect::Effect) for deferred re-runnable computations and
//!   `Future` for asynchronous ones
//! - **Optics**: van Laarhoven lenses that compose by composing functions,
//!   over plain structs or over [`Value`](value::Value) paths
//!
//! Every operation returns a new value; nothing is mutated in place.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `compose`: `identity` and `constant`
//! - `control`: `Maybe` and `Outcome`
//! - `effect`: `Effect`
//! - `async`: `Future` (pulls `futures`)
//! - `optics`: Lenses and the `Value` model they address
//! - `derive`: `#[derive(Lenses)]`
//! - `serde`: `Serialize`/`Deserialize` for the data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use functools::prelude::*;
//!
//! let halved = Maybe::new(Some(42))
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n / 2)
//!     .cata(|n| n, || 0);
//! assert_eq!(halved, 21);
//!
//! let answer = Effect::new(|()| 1).chain(|n| Effect::new(move |()| n + 1));
//! assert_eq!(answer.run(()), 2);
//! assert_eq!(answer.run(()), 2);
//!
//! let alice = Value::object([("pets", Value::object([("dog", Value::from("joker"))]))]);
//! assert_eq!(view(&path(["pets", "dog"]), alice), Value::from("joker"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the type classes and the lens operations.
/// `Future` is left out so it never shadows [`std::future::Future`]; import
/// it from [`effect`] when needed.
///
/// # Usage
///
/// ```rust
/// use functools::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::{constant, identity};

    #[cfg(feature = "control")]
    pub use crate::control::{IntoMaybe, Maybe, Outcome, Pure};

    #[cfg(feature = "effect")]
    pub use crate::effect::{Effect, IntoEffect};

    #[cfg(feature = "optics")]
    pub use crate::optics::{
        FunctionLens, Lens, LensExt, PathLens, compose, modifier, over, path, prop, set, setter,
        view, viewer,
    };

    #[cfg(feature = "optics")]
    pub use crate::value::{Key, Path, Value};

    #[cfg(feature = "derive")]
    pub use functools_derive::Lenses;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "optics")]
pub mod value;

#[cfg(feature = "derive")]
pub use functools_derive::Lenses;
