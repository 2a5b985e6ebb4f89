//! Procedural macros for arbor.
//!
//! - `#[derive(ToValue)]` - Generate a conversion hook for a struct or enum

extern crate proc_macro;

use proc_macro::TokenStream;

mod common;
mod to_value;

/// Derive a `ToValue` hook and tag the type `UserDefined`.
///
/// # Example
///
/// ```
/// use arbor::{Storage, ToValue, value_from};
/// use bumpalo::Bump;
///
/// #[derive(ToValue)]
/// struct Release {
///     name: String,
///     #[arbor(rename = "v")]
///     version: (u32, u32),
///     #[arbor(skip)]
///     internal_id: u64,
///     channel: Channel,
/// }
///
/// #[derive(ToValue)]
/// enum Channel {
///     Stable,
///     Nightly { date: String },
/// }
///
/// let release = Release {
///     name: "arbor".into(),
///     version: (0, 1),
///     internal_id: 42,
///     channel: Channel::Stable,
/// };
///
/// let arena = Bump::new();
/// let v = value_from(&release, Storage::new(&arena)).unwrap();
/// assert_eq!(v.to_string(), r#"{"name":"arbor","v":[0,1],"channel":"Stable"}"#);
/// ```
///
/// # Shapes
///
/// | Item                         | Value                         |
/// |------------------------------|-------------------------------|
/// | struct with named fields     | object keyed by field name    |
/// | struct with one unnamed field| the field's value             |
/// | other tuple structs          | array                         |
/// | unit struct                  | null                          |
/// | enum unit variant            | string holding the variant name |
/// | other enum variants          | `{ "Variant": payload }`      |
///
/// # Attributes
///
/// - `#[arbor(rename = "key")]` on a named field or a variant: use `key`
///   instead of the Rust name.
/// - `#[arbor(skip)]` on a named field: leave the field out.
/// - `#[arbor(crate = "path")]` on the type: where to find the conversion
///   API, `::arbor` by default.
///
/// Type parameters must implement `Convert`; the generated impls carry that
/// bound. Unions are rejected:
///
/// ```compile_fail
/// #[derive(arbor::ToValue)]
/// union Bits {
///     int: u32,
///     float: f32,
/// }
/// ```
#[proc_macro_derive(ToValue, attributes(arbor))]
pub fn derive_to_value(input: TokenStream) -> TokenStream {
    to_value::derive_to_value_impl(input)
}
