use bumpalo::collections::String as BumpString;
use core::fmt;

use crate::{Array, Number, Object, Scalar, Storage};

/// The kind of a [`Value`], without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

/// A dynamically typed, JSON-like value.
///
/// Every value remembers the [`Storage`] it was created with, and all of its
/// children live in that same storage. Containers are filled in place through
/// the `emplace_*` methods, which switch the node's kind and hand back a
/// mutable handle:
///
/// ```
/// use bumpalo::Bump;
/// use arbor_values::{Storage, Value};
///
/// let arena = Bump::new();
/// let storage = Storage::new(&arena);
///
/// let mut v = Value::null(storage);
/// let arr = v.emplace_array();
/// arr.push(Value::number(storage, 1));
/// arr.push(Value::string(storage, "two"));
///
/// assert_eq!(v.to_string(), r#"[1,"two"]"#);
/// ```
pub struct Value<'a> {
    storage: Storage<'a>,
    repr: Repr<'a>,
}

enum Repr<'a> {
    Null,
    Bool(bool),
    Number(Number),
    String(BumpString<'a>),
    Array(Array<'a>),
    Object(Object<'a>),
}

impl<'a> Value<'a> {
    pub fn null(storage: Storage<'a>) -> Self {
        Self {
            storage,
            repr: Repr::Null,
        }
    }

    pub fn bool(storage: Storage<'a>, value: bool) -> Self {
        Self {
            storage,
            repr: Repr::Bool(value),
        }
    }

    pub fn number(storage: Storage<'a>, value: impl Into<Number>) -> Self {
        Self {
            storage,
            repr: Repr::Number(value.into()),
        }
    }

    /// Create a string value, copying `value` into the arena.
    pub fn string(storage: Storage<'a>, value: &str) -> Self {
        Self {
            storage,
            repr: Repr::String(BumpString::from_str_in(value, storage.arena())),
        }
    }

    pub fn from_scalar(storage: Storage<'a>, scalar: impl Into<Scalar>) -> Self {
        let mut value = Self::null(storage);
        value.set(scalar);
        value
    }

    /// The arena this value and all of its children live in.
    pub fn storage(&self) -> Storage<'a> {
        self.storage
    }

    pub fn kind(&self) -> Kind {
        match self.repr {
            Repr::Null => Kind::Null,
            Repr::Bool(_) => Kind::Bool,
            Repr::Number(_) => Kind::Number,
            Repr::String(_) => Kind::String,
            Repr::Array(_) => Kind::Array,
            Repr::Object(_) => Kind::Object,
        }
    }

    // --- In-place mutation ---

    /// Replace this value with a scalar.
    pub fn set(&mut self, scalar: impl Into<Scalar>) {
        self.repr = match scalar.into() {
            Scalar::Null => Repr::Null,
            Scalar::Bool(b) => Repr::Bool(b),
            Scalar::Number(n) => Repr::Number(n),
        };
    }

    pub fn set_null(&mut self) {
        self.repr = Repr::Null;
    }

    /// Turn this value into an empty string and return it for filling.
    pub fn emplace_string(&mut self) -> &mut BumpString<'a> {
        self.repr = Repr::String(BumpString::new_in(self.storage.arena()));
        match &mut self.repr {
            Repr::String(s) => s,
            _ => unreachable!(),
        }
    }

    /// Turn this value into an empty array and return it for filling.
    pub fn emplace_array(&mut self) -> &mut Array<'a> {
        self.repr = Repr::Array(Array::new(self.storage));
        match &mut self.repr {
            Repr::Array(a) => a,
            _ => unreachable!(),
        }
    }

    /// Turn this value into an empty object and return it for filling.
    pub fn emplace_object(&mut self) -> &mut Object<'a> {
        self.repr = Repr::Object(Object::new(self.storage));
        match &mut self.repr {
            Repr::Object(o) => o,
            _ => unreachable!(),
        }
    }

    // --- Accessors ---

    pub fn is_null(&self) -> bool {
        matches!(self.repr, Repr::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.repr, Repr::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self.repr, Repr::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self.repr, Repr::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self.repr, Repr::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self.repr, Repr::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.repr {
            Repr::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self.repr {
            Repr::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_number()?.as_i64()
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_number()?.as_u64()
    }

    pub fn as_f64(&self) -> Option<f64> {
        Some(self.as_number()?.as_f64())
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.repr {
            Repr::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array<'a>> {
        match &self.repr {
            Repr::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array<'a>> {
        match &mut self.repr {
            Repr::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object<'a>> {
        match &self.repr {
            Repr::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object<'a>> {
        match &mut self.repr {
            Repr::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Deep-copy this value into `storage`.
    pub fn clone_in<'b>(&self, storage: Storage<'b>) -> Value<'b> {
        let repr = match &self.repr {
            Repr::Null => Repr::Null,
            Repr::Bool(b) => Repr::Bool(*b),
            Repr::Number(n) => Repr::Number(*n),
            Repr::String(s) => Repr::String(BumpString::from_str_in(s, storage.arena())),
            Repr::Array(a) => Repr::Array(a.clone_in(storage)),
            Repr::Object(o) => Repr::Object(o.clone_in(storage)),
        };
        Value { storage, repr }
    }
}

impl Clone for Value<'_> {
    fn clone(&self) -> Self {
        self.clone_in(self.storage)
    }
}

/// Structural equality. The storages of the two values are not compared.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Null, Repr::Null) => true,
            (Repr::Bool(a), Repr::Bool(b)) => a == b,
            (Repr::Number(a), Repr::Number(b)) => a == b,
            (Repr::String(a), Repr::String(b)) => a.as_str() == b.as_str(),
            (Repr::Array(a), Repr::Array(b)) => a == b,
            (Repr::Object(a), Repr::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Null => f.write_str("Null"),
            Repr::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Repr::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Repr::String(s) => f.debug_tuple("String").field(&s.as_str()).finish(),
            Repr::Array(a) => f.debug_tuple("Array").field(a).finish(),
            Repr::Object(o) => f.debug_tuple("Object").field(o).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    #[test]
    fn new_value_is_null() {
        let arena = Bump::new();
        let v = Value::null(Storage::new(&arena));
        assert!(v.is_null());
        assert_eq!(v.kind(), Kind::Null);
    }

    #[test]
    fn set_scalar_in_place() {
        let arena = Bump::new();
        let mut v = Value::null(Storage::new(&arena));

        v.set(true);
        assert_eq!(v.as_bool(), Some(true));
        v.set(-7i32);
        assert_eq!(v.as_i64(), Some(-7));
        v.set(2.5f64);
        assert_eq!(v.as_f64(), Some(2.5));
        v.set(());
        assert!(v.is_null());
    }

    #[test]
    fn emplace_replaces_previous_contents() {
        let arena = Bump::new();
        let storage = Storage::new(&arena);
        let mut v = Value::string(storage, "old");

        v.emplace_array().push(Value::bool(storage, false));
        assert_eq!(v.as_array().map(Array::len), Some(1));

        v.emplace_object();
        assert_eq!(v.as_object().map(Object::len), Some(0));

        v.emplace_string().push_str("new");
        assert_eq!(v.as_str(), Some("new"));
    }

    #[test]
    fn empty_string_is_not_null() {
        let arena = Bump::new();
        let mut v = Value::null(Storage::new(&arena));
        v.emplace_string();
        assert_eq!(v.kind(), Kind::String);
        assert_eq!(v.as_str(), Some(""));
    }

    #[test]
    fn accessors_reject_other_kinds() {
        let arena = Bump::new();
        let v = Value::bool(Storage::new(&arena), true);
        assert_eq!(v.as_number(), None);
        assert_eq!(v.as_str(), None);
        assert!(v.as_array().is_none());
        assert!(v.as_object().is_none());
    }

    #[test]
    fn equality_ignores_storage() {
        let arena1 = Bump::new();
        let arena2 = Bump::new();
        let a = Value::string(Storage::new(&arena1), "x");
        let b = Value::string(Storage::new(&arena2), "x");
        assert_eq!(a, b);
        assert_ne!(a, Value::null(Storage::new(&arena1)));
    }
}
