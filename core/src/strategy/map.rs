use crate::{
    Convert, MapKey, Object, Result, SizeHint, Strategy, Value, collections::BTreeMap, probe,
    strategy::SequenceLike, tag, value_from,
};

/// A type that iterates as `(key, value)` pairs.
pub trait MapLike {
    type Key: MapKey + ?Sized;
    type Value: Convert + ?Sized;

    /// The entries, in the source's own iteration order.
    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    /// How many entries [`entries`](MapLike::entries) yields, if cheap to tell.
    fn size_hint(&self) -> SizeHint {
        probe(&self.entries())
    }
}

impl<T: MapLike + ?Sized> Strategy<T> for tag::MapLike {
    fn apply(jv: &mut Value<'_>, from: &T) -> Result<()> {
        let obj = jv.emplace_object();
        obj.reserve(from.size_hint().reserve_count());
        for (key, value) in from.entries() {
            let value = value_from(value, obj.storage())?;
            // Later duplicates overwrite earlier ones.
            key.with_key(|key| obj.insert(key, value));
        }
        Ok(())
    }
}

impl<M: MapLike + ?Sized> MapLike for &M {
    type Key = M::Key;
    type Value = M::Value;

    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)> {
        (**self).entries()
    }

    fn size_hint(&self) -> SizeHint {
        (**self).size_hint()
    }
}

macro_rules! impl_map {
    ($([$($generics:tt)*] $ty:ty;)*) => {
        $(
            impl<$($generics)*> MapLike for $ty {
                type Key = K;
                type Value = V;

                fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
                    self.iter()
                }

                fn size_hint(&self) -> SizeHint {
                    SizeHint::Known(self.len())
                }
            }

            impl<$($generics)*> Convert for $ty {
                type Tag = tag::MapLike;
            }
        )*
    };
}

impl_map! {
    [K: MapKey, V: Convert] BTreeMap<K, V>;
    [K: MapKey, V: Convert, S] hashbrown::HashMap<K, V, S>;
}

#[cfg(any(feature = "std", test))]
impl_map! {
    [K: MapKey, V: Convert, S] std::collections::HashMap<K, V, S>;
}

impl<'a> MapLike for Object<'a> {
    type Key = str;
    type Value = Value<'a>;

    fn entries(&self) -> impl Iterator<Item = (&str, &Value<'a>)> {
        // Shorten the arena lifetime of the keys to the borrow of `self`.
        self.iter().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::Known(self.len())
    }
}

impl Convert for Object<'_> {
    type Tag = tag::MapLike;
}

/// A sequence element that splits into a map key and a value.
///
/// Implemented for 2-tuples; it lets [`AsMap`] reach the key and value types
/// as projections of the sequence's item type.
pub trait Pair {
    type Key: MapKey + ?Sized;
    type Value: Convert + ?Sized;

    fn parts(&self) -> (&Self::Key, &Self::Value);
}

impl<K: MapKey, V: Convert> Pair for (K, V) {
    type Key = K;
    type Value = V;

    fn parts(&self) -> (&K, &V) {
        (&self.0, &self.1)
    }
}

/// Converts a sequence of `(key, value)` pairs as a map.
///
/// Pairs are inserted in sequence order, so a repeated key takes the value of
/// its last occurrence while keeping the position of its first.
///
/// ```
/// use bumpalo::Bump;
/// use arbor_core::{AsMap, Storage, value_from};
///
/// let arena = Bump::new();
/// let pairs = vec![(1, "one"), (2, "two")];
/// let v = value_from(&AsMap(&pairs), Storage::new(&arena)).unwrap();
/// assert_eq!(v.to_string(), r#"{"1":"one","2":"two"}"#);
/// ```
///
/// The pairs must themselves be convertible, so the key type needs a
/// [`Convert`] impl as well as a [`MapKey`] one. `i128` and `u128` are valid
/// keys of a `BTreeMap` but not of an `AsMap`, because they have no
/// conversion of their own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AsMap<C>(pub C);

impl<C> MapLike for AsMap<C>
where
    C: SequenceLike,
    C::Item: Pair,
{
    type Key = <C::Item as Pair>::Key;
    type Value = <C::Item as Pair>::Value;

    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)> {
        self.0.items().map(|pair| pair.parts())
    }

    fn size_hint(&self) -> SizeHint {
        self.0.size_hint()
    }
}

impl<C> Convert for AsMap<C>
where
    C: SequenceLike,
    C::Item: Pair,
{
    type Tag = tag::MapLike;
}
