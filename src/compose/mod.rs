//! Point-free helpers.
//!
//! Only the combinators the containers and lenses depend on live here:
//! [`identity`] and [`constant`].

mod utils;

pub use utils::{constant, identity};
