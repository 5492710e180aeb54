//! Derive macro for functools lenses.
//!
//! [`Lenses`] generates one lens constructor per named field of a struct,
//! ready to be used with `functools::optics::{view, over, set, compose}`.
//!
//! # Example
//!
//! ```rust,ignore
//! use functools::optics::{compose, set, view};
//! use functools_derive::Lenses;
//!
//! #[derive(Clone, Lenses)]
//! struct Pets {
//!     dog: String,
//! }
//!
//! #[derive(Clone, Lenses)]
//! struct Person {
//!     name: String,
//!     pets: Pets,
//! }
//!
//! // Generated methods:
//! // - Person::name_lens() -> impl Lens<Person, String> + Clone
//! // - Person::pets_lens() -> impl Lens<Person, Pets> + Clone
//! // - Pets::dog_lens() -> impl Lens<Pets, String> + Clone
//!
//! let dog = compose(Person::pets_lens(), Pets::dog_lens());
//! let alice = Person { name: "Alice Jones".into(), pets: Pets { dog: "joker".into() } };
//! assert_eq!(view(&dog, alice.clone()), "joker");
//! assert_eq!(set(&dog, "rex".into(), alice).pets.dog, "rex");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derive macro generating a lens for every field of a struct.
///
/// For each field `foo` of type `T` the macro adds
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl ::functools::optics::Lens<StructName, T> + Clone { ... }
/// }
/// ```
///
/// The getter clones the field, so `T` must implement `Clone`. The setter
/// moves the new value into the structure and returns it.
///
/// # Requirements
///
/// - The struct must have named fields
/// - Generic structs are supported; a field's lens is available when its
///   type is `Clone`
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
