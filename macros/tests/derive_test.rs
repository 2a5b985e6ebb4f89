//! Tests for `#[derive(ToValue)]`.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use arbor::{Category, Convert, Storage, ToValue, Value, category_of, value_from};
use bumpalo::Bump;
use pretty_assertions::assert_eq;

fn json<T: Convert + ?Sized>(from: &T) -> String {
    let arena = Bump::new();
    value_from(from, Storage::new(&arena))
        .expect("conversion should succeed")
        .to_string()
}

// =============================================================================
// Structs
// =============================================================================

#[derive(ToValue)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn test_named_struct_is_object_in_field_order() {
    assert_eq!(json(&Point { x: 1, y: -2 }), r#"{"x":1,"y":-2}"#);
    assert_eq!(category_of::<Point>(), Category::UserDefined);
}

#[derive(ToValue)]
struct Renamed {
    #[arbor(rename = "type")]
    kind: &'static str,
    #[arbor(skip)]
    #[allow(dead_code)]
    cache: Vec<u8>,
    r#loop: bool,
}

#[test]
fn test_rename_and_skip() {
    let v = Renamed {
        kind: "a",
        cache: vec![1, 2, 3],
        r#loop: false,
    };
    assert_eq!(json(&v), r#"{"type":"a","loop":false}"#);
}

#[derive(ToValue)]
struct Meters(f64);

#[derive(ToValue)]
struct Span(u32, u32);

#[derive(ToValue)]
struct Marker;

#[derive(ToValue)]
struct Nothing {}

#[test]
fn test_tuple_newtype_and_unit_structs() {
    assert_eq!(json(&Meters(2.5)), "2.5");
    assert_eq!(json(&Span(3, 7)), "[3,7]");
    assert_eq!(json(&Marker), "null");
    assert_eq!(json(&Nothing {}), "{}");
}

#[derive(ToValue)]
struct Tagged<T, U: Clone> {
    value: T,
    tags: Vec<U>,
    #[arbor(skip)]
    _marker: PhantomData<fn() -> U>,
}

#[test]
fn test_generic_struct() {
    let t = Tagged {
        value: Point { x: 0, y: 0 },
        tags: vec!["a".to_string()],
        _marker: PhantomData,
    };
    assert_eq!(json(&t), r#"{"value":{"x":0,"y":0},"tags":["a"]}"#);
}

#[derive(ToValue)]
struct Borrowed<'a> {
    name: &'a str,
    scores: &'a BTreeMap<String, u8>,
}

#[test]
fn test_struct_with_lifetime() {
    let scores = BTreeMap::from([("math".to_string(), 9)]);
    let b = Borrowed {
        name: "kim",
        scores: &scores,
    };
    assert_eq!(json(&b), r#"{"name":"kim","scores":{"math":9}}"#);
}

// =============================================================================
// Enums
// =============================================================================

#[derive(ToValue)]
enum Shape {
    Empty,
    #[arbor(rename = "dot")]
    Point,
    Circle(f64),
    Rect(u32, u32),
    Poly { sides: u8, #[arbor(skip)] _hidden: () },
}

#[test]
fn test_enum_variants() {
    assert_eq!(json(&Shape::Empty), r#""Empty""#);
    assert_eq!(json(&Shape::Point), r#""dot""#);
    assert_eq!(json(&Shape::Circle(0.5)), r#"{"Circle":0.5}"#);
    assert_eq!(json(&Shape::Rect(2, 3)), r#"{"Rect":[2,3]}"#);
    assert_eq!(
        json(&Shape::Poly {
            sides: 6,
            _hidden: ()
        }),
        r#"{"Poly":{"sides":6}}"#
    );
}

#[derive(ToValue)]
enum Never {}

#[test]
fn test_empty_enum_is_convertible() {
    assert_eq!(category_of::<Never>(), Category::UserDefined);
    assert_eq!(json(&Vec::<Never>::new()), "[]");
}

// =============================================================================
// Storage and composition
// =============================================================================

#[test]
fn test_derived_nodes_share_storage() {
    let arena = Bump::new();
    let storage = Storage::new(&arena);
    let v = value_from(&Shape::Poly { sides: 3, _hidden: () }, storage).unwrap();

    let payload = &v.as_object().unwrap()["Poly"];
    assert_eq!(payload.storage(), storage);
    assert_eq!(payload.as_object().unwrap()["sides"].storage(), storage);
}

#[test]
fn test_derived_types_inside_containers() {
    let shapes = vec![Some(Shape::Circle(1.0)), None];
    assert_eq!(json(&shapes), r#"[{"Circle":1.0},null]"#);
}

#[test]
fn test_derived_hook_can_be_called_directly() {
    let arena = Bump::new();
    let mut jv = Value::null(Storage::new(&arena));
    Span(1, 2).to_value(&mut jv).unwrap();
    assert_eq!(jv.to_string(), "[1,2]");
}

mod core_path {
    use arbor_core::{Storage, value_from};
    use bumpalo::Bump;

    #[derive(arbor::ToValue)]
    #[arbor(crate = "arbor_core")]
    struct Config {
        retries: u8,
    }

    #[test]
    fn test_crate_path_override() {
        let arena = Bump::new();
        let v = value_from(&Config { retries: 3 }, Storage::new(&arena)).unwrap();
        assert_eq!(v.to_string(), r#"{"retries":3}"#);
    }
}
