//! Arbor - convert Rust values into arena-backed dynamic value trees
//!
//! # Overview
//!
//! [`value_from`] turns any convertible value (scalars, strings, sequences,
//! maps, tuples, and your own types) into a JSON-like [`Value`] allocated in a
//! [`bumpalo`] arena. The conversion for each type is chosen at compile time;
//! types with no conversion are rejected by the compiler.
//!
//! # Quick Start
//!
//! ```
//! use arbor::{AsMap, Storage, ToValue, value_from};
//! use bumpalo::Bump;
//!
//! #[derive(ToValue)]
//! struct Build {
//!     target: &'static str,
//!     flags: Vec<&'static str>,
//!     timings: (f64, f64),
//! }
//!
//! let arena = Bump::new();
//! let storage = Storage::new(&arena);
//!
//! let build = Build {
//!     target: "x86_64",
//!     flags: vec!["-O2"],
//!     timings: (0.5, 1.25),
//! };
//! let v = value_from(&build, storage).unwrap();
//! assert_eq!(
//!     v.to_string(),
//!     r#"{"target":"x86_64","flags":["-O2"],"timings":[0.5,1.25]}"#
//! );
//!
//! // Pair lists become objects when wrapped; the last duplicate wins.
//! let env = value_from(&AsMap([("PATH", "/bin"), ("PATH", "/usr/bin")]), storage).unwrap();
//! assert_eq!(env.to_string(), r#"{"PATH":"/usr/bin"}"#);
//! ```
//!
//! # Custom Conversions
//!
//! Implement [`ToValue`] by hand when the derived shape does not fit, and tag
//! the type [`UserDefined`](tag::UserDefined):
//!
//! ```
//! use arbor::{Convert, Result, Storage, ToValue, Value, tag, value_from};
//! use bumpalo::Bump;
//!
//! struct Version(u32, u32, u32);
//!
//! impl ToValue for Version {
//!     fn to_value(&self, jv: &mut Value<'_>) -> Result<()> {
//!         let s = jv.emplace_string();
//!         s.push_str(&format!("{}.{}.{}", self.0, self.1, self.2));
//!         Ok(())
//!     }
//! }
//!
//! impl Convert for Version {
//!     type Tag = tag::UserDefined;
//! }
//!
//! let arena = Bump::new();
//! let v = value_from(&[Version(1, 2, 3)], Storage::new(&arena)).unwrap();
//! assert_eq!(v.to_string(), r#"["1.2.3"]"#);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Re-export the conversion API from arbor_core
pub use arbor_core::{
    AsMap, Category, CategoryTag, Convert, ElementVisitor, Error, MapKey, MapLike, NativeScalar,
    Null, NullLike, Pair, Result, SequenceLike, SizeHint, Strategy, StringLike, ToValue, TupleLike,
    category_of, probe, tag, value_from, value_from_into,
};

// Re-export the value tree
pub use arbor_core::{Array, BumpString, Kind, Number, Object, Scalar, Storage, Value};
pub use bumpalo::Bump;

#[cfg(feature = "derive")]
pub use arbor_macros::ToValue;
