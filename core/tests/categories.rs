//! Compile-time classification of source types.
//!
//! Types with no conversion must not implement `Convert`, so converting them is
//! rejected by the compiler rather than failing at runtime.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use arbor_core::{
    Array, AsMap, Category, Convert, MapKey, Null, Number, Object, Scalar, Value, category_of,
};
use static_assertions::{assert_impl_all, assert_not_impl_any};

assert_impl_all!(bool: Convert);
assert_impl_all!(i8: Convert);
assert_impl_all!(u64: Convert);
assert_impl_all!(f32: Convert);
assert_impl_all!(Number: Convert);
assert_impl_all!(Scalar: Convert);
assert_impl_all!(Value<'static>: Convert);
assert_impl_all!((): Convert);
assert_impl_all!(Null: Convert);
assert_impl_all!(str: Convert);
assert_impl_all!(String: Convert);
assert_impl_all!(char: Convert);
assert_impl_all!(Option<String>: Convert);
assert_impl_all!([u8]: Convert);
assert_impl_all!([u8; 3]: Convert);
assert_impl_all!(Vec<Vec<bool>>: Convert);
assert_impl_all!(VecDeque<i32>: Convert);
assert_impl_all!(LinkedList<i32>: Convert);
assert_impl_all!(BTreeSet<String>: Convert);
assert_impl_all!(HashSet<u16>: Convert);
assert_impl_all!(Array<'static>: Convert);
assert_impl_all!(BTreeMap<String, f64>: Convert);
assert_impl_all!(HashMap<u32, Vec<String>>: Convert);
assert_impl_all!(BTreeMap<bool, ()>: Convert);
assert_impl_all!(Object<'static>: Convert);
assert_impl_all!(AsMap<Vec<(String, i32)>>: Convert);
assert_impl_all!((i32, String, [f64; 2]): Convert);
assert_impl_all!(&'static str: Convert);
assert_impl_all!(Box<[i32]>: Convert);
assert_impl_all!(Rc<str>: Convert);
assert_impl_all!(Arc<Vec<u8>>: Convert);
assert_impl_all!(Cow<'static, str>: Convert);

// 128-bit integers do not fit the number representation.
assert_not_impl_any!(i128: Convert);
assert_not_impl_any!(u128: Convert);
// Raw pointers have no meaningful value.
assert_not_impl_any!(*const u8: Convert);
assert_not_impl_any!(*mut String: Convert);
// Unsupported types stay unsupported inside containers.
assert_not_impl_any!(Vec<i128>: Convert);
assert_not_impl_any!((i32, u128): Convert);
assert_not_impl_any!(Option<*const u8>: Convert);
assert_not_impl_any!(BTreeMap<String, i128>: Convert);
// Keys without an unambiguous string form.
assert_not_impl_any!(f64: MapKey);
assert_not_impl_any!((i32, i32): MapKey);
assert_not_impl_any!(BTreeMap<(i32, i32), bool>: Convert);
assert_not_impl_any!(AsMap<Vec<(f32, i32)>>: Convert);
// A pair list is not a map unless wrapped.
assert_impl_all!(Vec<(String, i32)>: Convert);

#[test]
fn test_each_type_has_one_category() {
    assert_eq!(category_of::<bool>(), Category::Native);
    assert_eq!(category_of::<Value<'_>>(), Category::Native);
    assert_eq!(category_of::<PhantomData<u8>>(), Category::Null);
    assert_eq!(category_of::<String>(), Category::StringLike);
    assert_eq!(category_of::<HashMap<String, i32>>(), Category::MapLike);
    assert_eq!(category_of::<AsMap<[(u8, u8); 2]>>(), Category::MapLike);
    assert_eq!(category_of::<[u8; 2]>(), Category::SequenceLike);
    assert_eq!(category_of::<Vec<(String, i32)>>(), Category::SequenceLike);
    assert_eq!(category_of::<(u8,)>(), Category::TupleLike);
    assert_eq!(category_of::<char>(), Category::StringLike);
}

#[test]
fn test_pointers_report_pointee_category() {
    assert_eq!(category_of::<&Vec<u8>>(), category_of::<Vec<u8>>());
    assert_eq!(category_of::<&mut str>(), Category::StringLike);
    assert_eq!(category_of::<Box<Option<u8>>>(), Category::UserDefined);
    assert_eq!(category_of::<Arc<BTreeMap<u8, u8>>>(), Category::MapLike);
    assert_eq!(category_of::<Cow<'_, [u8]>>(), Category::SequenceLike);
}
