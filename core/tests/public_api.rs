//! Integration tests for the public API.
//!
//! These tests drive conversions the way a downstream crate would: through
//! hand-written `ToValue` hooks composed with the built-in categories.

use std::collections::BTreeMap;
use std::fmt;

use arbor_core::{
    AsMap, Convert, ElementVisitor, Error, Result, SizeHint, Storage, ToValue, TupleLike, Value,
    category_of, tag, value_from, value_from_into,
};
use bumpalo::Bump;
use pretty_assertions::assert_eq;

struct User {
    name: String,
    roles: Vec<&'static str>,
    manager: Option<Box<User>>,
}

impl ToValue for User {
    fn to_value(&self, jv: &mut Value<'_>) -> Result<()> {
        let obj = jv.emplace_object();
        let storage = obj.storage();
        obj.insert("name", value_from(&self.name, storage)?);
        obj.insert("roles", value_from(&self.roles, storage)?);
        obj.insert("manager", value_from(&self.manager, storage)?);
        Ok(())
    }
}

impl Convert for User {
    type Tag = tag::UserDefined;
}

#[test]
fn test_nested_user_types() {
    let arena = Bump::new();
    let user = User {
        name: "ana".into(),
        roles: vec!["dev"],
        manager: Some(Box::new(User {
            name: "bo".into(),
            roles: vec![],
            manager: None,
        })),
    };

    let v = value_from(&user, Storage::new(&arena)).expect("conversion should succeed");
    assert_eq!(
        v.to_string(),
        r#"{"name":"ana","roles":["dev"],"manager":{"name":"bo","roles":[],"manager":null}}"#
    );
}

/// Delegates its whole node to the wrapped value.
struct Transparent<T>(T);

impl<T: Convert> ToValue for Transparent<T> {
    fn to_value(&self, jv: &mut Value<'_>) -> Result<()> {
        value_from_into(&self.0, jv)
    }
}

impl<T: Convert> Convert for Transparent<T> {
    type Tag = tag::UserDefined;
}

#[test]
fn test_hook_can_delegate_its_node() {
    let arena = Bump::new();
    let storage = Storage::new(&arena);
    let direct = value_from(&[1, 2], storage).unwrap();
    let wrapped = value_from(&Transparent([1, 2]), storage).unwrap();
    assert_eq!(wrapped, direct);
}

#[derive(Debug)]
struct OutOfRange(u32);

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "port {} out of range", self.0)
    }
}

impl std::error::Error for OutOfRange {}

struct Port(u32);

impl ToValue for Port {
    fn to_value(&self, jv: &mut Value<'_>) -> Result<()> {
        if self.0 > u32::from(u16::MAX) {
            return Err(Error::hook(OutOfRange(self.0)));
        }
        jv.set(self.0);
        Ok(())
    }
}

impl Convert for Port {
    type Tag = tag::UserDefined;
}

#[test]
fn test_hook_error_keeps_its_source() {
    let arena = Bump::new();
    let ports = AsMap(vec![("http", Port(80)), ("bad", Port(70_000))]);

    let err = value_from(&ports, Storage::new(&arena)).unwrap_err();
    assert_eq!(err.to_string(), "conversion hook failed");

    let source = std::error::Error::source(&err).expect("hook error has a source");
    assert_eq!(source.to_string(), "port 70000 out of range");
    assert!(source.downcast_ref::<OutOfRange>().is_some());
    assert!(std::error::Error::source(source).is_none());
}

#[test]
fn test_failed_conversion_does_not_affect_later_ones() {
    let arena = Bump::new();
    let storage = Storage::new(&arena);

    assert!(value_from(&[Port(1), Port(u32::MAX)], storage).is_err());
    let ok = value_from(&[Port(1), Port(2)], storage).unwrap();
    assert_eq!(ok.to_string(), "[1,2]");
}

/// A record exposed positionally, like a tuple.
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl TupleLike for Rgb {
    const ARITY: usize = 3;

    fn walk<V: ElementVisitor>(&self, visitor: &mut V) -> Result<()> {
        visitor.visit(0, &self.r)?;
        visitor.visit(1, &self.g)?;
        visitor.visit(2, &self.b)
    }
}

impl Convert for Rgb {
    type Tag = tag::TupleLike;
}

#[test]
fn test_custom_tuple_like() {
    let arena = Bump::new();
    let palette = BTreeMap::from([("red", Rgb { r: 255, g: 0, b: 0 })]);
    let v = value_from(&palette, Storage::new(&arena)).unwrap();
    assert_eq!(v.to_string(), r#"{"red":[255,0,0]}"#);
    assert_eq!(category_of::<Rgb>(), arbor_core::Category::TupleLike);
}

#[test]
fn test_size_hint_conversion() {
    assert_eq!(SizeHint::from(Some(4)), SizeHint::Known(4));
    assert_eq!(SizeHint::from(None), SizeHint::Unknown);
}

#[test]
fn test_value_round_trips_through_another_arena() {
    let first = Bump::new();
    let second = Bump::new();

    let original = value_from(&("x", [1.5, -0.0]), Storage::new(&first)).unwrap();
    let copied = value_from(&original, Storage::new(&second)).unwrap();
    drop(original);
    assert_eq!(copied.to_string(), r#"["x",[1.5,-0.0]]"#);
}
