//! Convert Rust values into arena-backed dynamic [`Value`] trees.
//!
//! [`value_from`] is the single entry point. It asks the source type for its
//! conversion category (the [`Convert::Tag`] associated type, fixed at compile
//! time) and runs the matching [`Strategy`]:
//!
//! | Category       | Types                                              | Result            |
//! |----------------|----------------------------------------------------|-------------------|
//! | `UserDefined`  | types implementing [`ToValue`], `Option<T>`        | whatever the hook writes |
//! | `Native`       | `bool`, integers, floats, [`Number`], [`Value`]    | scalar / copy     |
//! | `Null`         | `()`, [`Null`], `PhantomData<T>`                   | null              |
//! | `StringLike`   | `str`, `String`, `char`                            | string            |
//! | `MapLike`      | `BTreeMap`, `HashMap`, [`Object`], [`AsMap`]       | object            |
//! | `SequenceLike` | slices, arrays, `Vec`, sets, [`Array`]             | array             |
//! | `TupleLike`    | tuples of 1 to 16 elements                         | array             |
//!
//! References and smart pointers (`&T`, `Box<T>`, `Rc<T>`, `Arc<T>`,
//! `Cow<T>`) convert exactly like `T`. Types with no category do not implement
//! [`Convert`] and are rejected by the compiler.
//!
//! Every node of one conversion is allocated in the [`Storage`] passed to the
//! top-level call.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use bumpalo::Bump;
//! use arbor_core::{Storage, value_from};
//!
//! let arena = Bump::new();
//! let mut scores = BTreeMap::new();
//! scores.insert("alice", vec![(1, true), (2, false)]);
//!
//! let v = value_from(&scores, Storage::new(&arena)).unwrap();
//! assert_eq!(v.to_string(), r#"{"alice":[[1,true],[2,false]]}"#);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{borrow::Cow, boxed::Box, rc::Rc, string::String, string::ToString, sync::Arc};
    pub use alloc::{collections, vec::Vec};
}

#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod category;
pub mod convert;
pub mod error;
pub mod key;
pub mod size_hint;
pub mod strategy;

pub use arbor_values::{Array, BumpString, Kind, Number, Object, Scalar, Storage, Value};
pub use category::{Category, CategoryTag, category_of, tag};
pub use convert::{Convert, Strategy, value_from, value_from_into};
pub use error::{Error, Result};
pub use key::MapKey;
pub use size_hint::{SizeHint, probe};
pub use strategy::{
    AsMap, ElementVisitor, MapLike, NativeScalar, Null, NullLike, Pair, SequenceLike,
    StringLike, ToValue, TupleLike,
};
