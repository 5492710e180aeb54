//! Synchronous containers.
//!
//! - [`Maybe`]: a value that may be absent
//! - [`Outcome`]: a success value or a failure reason
//! - [`Pure`]: marks a plain value for the lifting traits
//!
//! Both containers propagate their negative branch (`Nothing`, `Err`)
//! through `map`, `chain` and `ap` without calling the supplied function.
//! Leaving the abstraction is explicit, through `cata`.
//!
//! # Examples
//!
//! ```rust
//! use functools::control::{Maybe, Outcome};
//!
//! let age = Maybe::new(Some(41)).map(|n| n + 1);
//! let checked: Outcome<i32, &str> = age.cata(Outcome::new, || Outcome::err("no age"));
//! assert_eq!(checked, Outcome::Ok(42));
//! ```

mod maybe;
mod outcome;
mod pure;

pub use maybe::{IntoMaybe, Maybe};
pub use outcome::Outcome;
pub use pure::Pure;

pub(crate) use pure::with_plain_value_types;
