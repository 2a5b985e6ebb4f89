//! Arena-backed dynamic values.
//!
//! A [`Value`] is a JSON-like tree (null, bool, number, string, array, object)
//! whose nodes are all allocated in one [`bumpalo::Bump`] arena, reached through
//! a [`Storage`] handle. Every node can report the storage it belongs to, and
//! containers only accept children from that same storage.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use arbor_values::{Storage, Value};
//!
//! let arena = Bump::new();
//! let storage = Storage::new(&arena);
//!
//! let mut doc = Value::null(storage);
//! let obj = doc.emplace_object();
//! obj.insert("name", Value::string(storage, "arbor"));
//! obj.insert("stars", Value::number(storage, 3));
//!
//! assert_eq!(doc.to_string(), r#"{"name":"arbor","stars":3}"#);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod array;
mod display;
mod number;
mod object;
mod storage;
mod value;

pub use array::Array;
pub use bumpalo::collections::String as BumpString;
pub use number::{Number, Scalar};
pub use object::Object;
pub use storage::Storage;
pub use value::{Kind, Value};
