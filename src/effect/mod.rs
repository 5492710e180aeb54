//! Deferred computations.
//!
//! - [`Effect`]: a synchronous computation that runs only when asked, and
//!   re-runs from scratch every time
//! - [`Future`]: an asynchronous result whose failures are data
//!   (requires the `async` feature)
//!
//! # Examples
//!
//! ```rust
//! use functools::effect::Effect;
//!
//! let doubled = Effect::new(|n: i32| n).map(|n| n * 2);
//! assert_eq!(doubled.run(21), 42);
//! ```

mod computation;
#[cfg(feature = "async")]
mod future;

pub use computation::{Effect, IntoEffect};
#[cfg(feature = "async")]
pub use future::{Future, Handle, IntoAsync, Rejection, Settlement, Verdict};
