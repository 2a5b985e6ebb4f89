use crate::{
    Array, Convert, Result, SizeHint, Strategy, Value, Vec,
    collections::{BTreeSet, LinkedList, VecDeque},
    probe, tag, value_from,
};

/// A type that iterates as a linear sequence of elements.
pub trait SequenceLike {
    type Item: Convert + ?Sized;

    /// The elements, in the order they should appear in the array.
    fn items(&self) -> impl Iterator<Item = &Self::Item>;

    /// How many elements [`items`](SequenceLike::items) yields, if cheap to tell.
    fn size_hint(&self) -> SizeHint {
        probe(&self.items())
    }
}

impl<T: SequenceLike + ?Sized> Strategy<T> for tag::SequenceLike {
    fn apply(jv: &mut Value<'_>, from: &T) -> Result<()> {
        let arr = jv.emplace_array();
        arr.reserve(from.size_hint().reserve_count());
        for item in from.items() {
            let storage = arr.storage();
            arr.push(value_from(item, storage)?);
        }
        Ok(())
    }
}

impl<C: SequenceLike + ?Sized> SequenceLike for &C {
    type Item = C::Item;

    fn items(&self) -> impl Iterator<Item = &Self::Item> {
        (**self).items()
    }

    fn size_hint(&self) -> SizeHint {
        (**self).size_hint()
    }
}

macro_rules! impl_sequence {
    ($([$($generics:tt)*] $ty:ty;)*) => {
        $(
            impl<$($generics)*> SequenceLike for $ty {
                type Item = T;

                fn items(&self) -> impl Iterator<Item = &T> {
                    self.iter()
                }

                fn size_hint(&self) -> SizeHint {
                    SizeHint::Known(self.len())
                }
            }

            impl<$($generics)*> Convert for $ty {
                type Tag = tag::SequenceLike;
            }
        )*
    };
}

impl_sequence! {
    [T: Convert] [T];
    [T: Convert, const N: usize] [T; N];
    [T: Convert] Vec<T>;
    [T: Convert] VecDeque<T>;
    [T: Convert] LinkedList<T>;
    [T: Convert] BTreeSet<T>;
    [T: Convert, S] hashbrown::HashSet<T, S>;
    [T: Convert] bumpalo::collections::Vec<'_, T>;
}

#[cfg(any(feature = "std", test))]
impl_sequence! {
    [T: Convert, S] std::collections::HashSet<T, S>;
}

impl<'a> SequenceLike for Array<'a> {
    type Item = Value<'a>;

    fn items(&self) -> impl Iterator<Item = &Value<'a>> {
        self.iter()
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::Known(self.len())
    }
}

impl Convert for Array<'_> {
    type Tag = tag::SequenceLike;
}
