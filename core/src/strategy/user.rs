use crate::{Convert, Result, Strategy, Value, tag, value_from_into};

/// A conversion hook supplied by the type itself.
///
/// The hook receives a null node and may write anything into it; the
/// dispatcher does not inspect the result. Errors it returns propagate to the
/// top-level caller unchanged. A hook only takes effect once the type is tagged
/// [`UserDefined`](tag::UserDefined):
///
/// ```
/// use bumpalo::Bump;
/// use arbor_core::{Convert, Result, Storage, ToValue, Value, tag, value_from};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl ToValue for Point {
///     fn to_value(&self, jv: &mut Value<'_>) -> Result<()> {
///         let arr = jv.emplace_array();
///         let storage = arr.storage();
///         arr.push(value_from(&self.x, storage)?);
///         arr.push(value_from(&self.y, storage)?);
///         Ok(())
///     }
/// }
///
/// impl Convert for Point {
///     type Tag = tag::UserDefined;
/// }
///
/// let arena = Bump::new();
/// let v = value_from(&Point { x: 1, y: -2 }, Storage::new(&arena)).unwrap();
/// assert_eq!(v.to_string(), "[1,-2]");
/// ```
pub trait ToValue {
    fn to_value(&self, jv: &mut Value<'_>) -> Result<()>;
}

impl<T: ToValue + ?Sized> Strategy<T> for tag::UserDefined {
    fn apply(jv: &mut Value<'_>, from: &T) -> Result<()> {
        from.to_value(jv)
    }
}

/// `None` converts to null, `Some(v)` converts like `v`.
impl<T: Convert> ToValue for Option<T> {
    fn to_value(&self, jv: &mut Value<'_>) -> Result<()> {
        match self {
            Some(value) => value_from_into(value, jv),
            None => Ok(()),
        }
    }
}

impl<T: Convert> Convert for Option<T> {
    type Tag = tag::UserDefined;
}
