//! Derive macros for lazyfn.
//!
//! # Available Derive Macros
//!
//! - [`Aggregate`]: Turns a struct into a wrapper enumerable
//!
//! # Example
//!
//! ```rust,ignore
//! use lazyfn::{Aggregate, map, to_array};
//!
//! #[derive(Aggregate)]
//! struct Inventory {
//!     #[aggregate]
//!     items: Vec<u32>,
//!     warehouse: String,
//! }
//!
//! let inventory = Inventory { items: vec![3, 4], warehouse: "north".to_string() };
//! let doubled = to_array(map(inventory, |count| count * 2))?;
//! assert_eq!(doubled.into_values(), vec![6, 8]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod aggregate;

use proc_macro::TokenStream;

/// Derive macro making a struct a wrapper enumerable.
///
/// The wrapped field is the struct's only field, or the one marked
/// `#[aggregate]`. Its type must implement `lazyfn::IntoEnumerable`.
///
/// # Generated Code
///
/// For a struct `Wrapper` whose wrapped field has type `T`, generates:
///
/// ```rust,ignore
/// impl<'__lazyfn> lazyfn::Aggregate<'__lazyfn> for Wrapper
/// where
///     T: lazyfn::IntoEnumerable<'__lazyfn>,
///     Self: '__lazyfn,
/// {
///     type Value = <T as lazyfn::IntoEnumerable<'__lazyfn>>::Value;
///     fn into_inner(self: Box<Self>) -> lazyfn::Enumerable<'__lazyfn, Self::Value> { ... }
/// }
///
/// impl<'__lazyfn> lazyfn::IntoEnumerable<'__lazyfn> for Wrapper
/// where
///     T: lazyfn::IntoEnumerable<'__lazyfn>,
///     Self: '__lazyfn,
/// {
///     type Value = <T as lazyfn::IntoEnumerable<'__lazyfn>>::Value;
///     fn into_enumerable(self) -> lazyfn::Enumerable<'__lazyfn, Self::Value> { ... }
/// }
/// ```
///
/// The `IntoEnumerable` impl wraps the struct itself, so normalization sees
/// a wrapper and unwraps it on demand.
///
/// # Errors (compile time)
///
/// - Enums, unions and unit structs
/// - Structs with several fields and none marked `#[aggregate]`
/// - Structs with more than one field marked `#[aggregate]`
#[proc_macro_derive(Aggregate, attributes(aggregate))]
pub fn derive_aggregate(input: TokenStream) -> TokenStream {
    aggregate::derive_aggregate_impl(input)
}
