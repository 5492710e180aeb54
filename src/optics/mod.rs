//! Composable lenses for reading and immutably updating nested data.
//!
//! Lenses here use the van Laarhoven encoding: a lens is one polymorphic
//! operation, [`Lens::lift`], parameterised by the functor its transformer
//! produces. [`view`] runs it with the constant functor, [`over`] and [`set`]
//! with the identity functor, and [`compose`] is plain composition of the
//! lifted transformers.
//!
//! - [`FunctionLens`]: a lens from a getter and a setter
//! - [`PathLens`], [`prop`], [`path`]: lenses over [`Value`](crate::value::Value) paths
//! - [`viewer`], [`modifier`], [`setter`] and [`LensExt`]: partially applied forms
//!
//! # Examples
//!
//! ```
//! use functools::optics::{compose, path, prop, set, view};
//! use functools::value::Value;
//!
//! let alice = Value::object([
//!     ("name", Value::from("Alice Jones")),
//!     ("pets", Value::object([("dog", Value::from("joker")), ("cat", Value::from("batman"))])),
//! ]);
//!
//! let dog = compose(prop("pets"), prop("dog"));
//! assert_eq!(view(&dog, alice.clone()), view(&path(["pets", "dog"]), alice.clone()));
//!
//! let updated = set(&dog, Value::from("rex"), alice.clone());
//! assert_eq!(updated["pets"]["dog"], Value::from("rex"));
//! assert_eq!(alice["pets"]["dog"], Value::from("joker"));
//! ```

mod functor;
mod lens;
mod path_lens;

pub use functor::{ConstKind, FunctorKind, IdentityKind};
pub use lens::{
    Composed, FunctionLens, Lens, LensExt, compose, modifier, over, set, setter, view, viewer,
};
pub use path_lens::{PathLens, path, prop};
