//! The conversion dispatcher.

use core::any::type_name;

use crate::{
    Result, Storage, Value,
    category::{CategoryTag, category_of},
};

/// Classifies a type into exactly one conversion category.
///
/// The associated [`Tag`](Convert::Tag) picks the [`Strategy`] that
/// [`value_from`] runs. A type without an implementation has no conversion, and
/// any attempt to convert it is a compile error:
///
/// ```compile_fail
/// use bumpalo::Bump;
/// use arbor_core::{Storage, value_from};
///
/// struct Opaque;
///
/// let arena = Bump::new();
/// let _ = value_from(&Opaque, Storage::new(&arena));
/// ```
///
/// Types that are not built in become convertible by implementing
/// [`ToValue`](crate::ToValue) and tagging themselves
/// [`UserDefined`](crate::tag::UserDefined), which `#[derive(ToValue)]` does.
#[diagnostic::on_unimplemented(
    message = "no conversion to `Value` exists for `{Self}`",
    label = "`{Self}` has no conversion category",
    note = "implement `ToValue` and `Convert<Tag = arbor_core::tag::UserDefined>`, or `#[derive(ToValue)]`"
)]
pub trait Convert {
    type Tag: Strategy<Self>;
}

/// How values of `T` are written into a destination node.
///
/// There is one implementation per tag in [`tag`](crate::tag), each generic
/// over the capability trait its category requires.
/// [`Unsupported`](crate::tag::Unsupported) has none.
#[diagnostic::on_unimplemented(
    message = "no suitable conversion strategy for `{T}`",
    label = "`{Self}` cannot convert `{T}`"
)]
pub trait Strategy<T: ?Sized>: CategoryTag {
    /// Fill `jv`, which is null on entry, from `from`.
    fn apply(jv: &mut Value<'_>, from: &T) -> Result<()>;
}

/// Convert `from` into a new value allocated in `storage`.
///
/// Nested elements are converted by recursive calls that reuse the storage of
/// the container being filled, so the whole tree shares one arena. Errors from
/// user hooks abort the conversion and are returned unchanged.
///
/// ```
/// use bumpalo::Bump;
/// use arbor_core::{AsMap, Storage, value_from};
///
/// let arena = Bump::new();
/// let storage = Storage::new(&arena);
///
/// let pairs = [("a", 1), ("b", 2), ("a", 3)];
/// let v = value_from(&AsMap(pairs), storage).unwrap();
/// assert_eq!(v.to_string(), r#"{"a":3,"b":2}"#);
/// ```
pub fn value_from<'a, T>(from: &T, storage: Storage<'a>) -> Result<Value<'a>>
where
    T: Convert + ?Sized,
{
    let mut jv = Value::null(storage);
    apply::<T>(&mut jv, from)?;
    Ok(jv)
}

/// Convert `from` into an existing node, replacing its contents.
///
/// The node keeps its storage. This is the form hooks use to delegate their
/// whole node to another conversion.
pub fn value_from_into<T>(from: &T, jv: &mut Value<'_>) -> Result<()>
where
    T: Convert + ?Sized,
{
    jv.set_null();
    apply::<T>(jv, from)
}

fn apply<T: Convert + ?Sized>(jv: &mut Value<'_>, from: &T) -> Result<()> {
    tracing::trace!(ty = type_name::<T>(), category = %category_of::<T>(), "value_from");
    <T::Tag as Strategy<T>>::apply(jv, from)
}
