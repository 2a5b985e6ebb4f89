use bumpalo::collections::Vec as BumpVec;
use core::{fmt, ops::Index, slice};

use crate::{Storage, Value};

/// An ordered sequence of values allocated in one arena.
pub struct Array<'a> {
    storage: Storage<'a>,
    items: BumpVec<'a, Value<'a>>,
}

impl<'a> Array<'a> {
    /// Create an empty array. Does not allocate.
    pub fn new(storage: Storage<'a>) -> Self {
        Self {
            storage,
            items: BumpVec::new_in(storage.arena()),
        }
    }

    /// Create an empty array with room for `capacity` elements.
    pub fn with_capacity(storage: Storage<'a>, capacity: usize) -> Self {
        Self {
            storage,
            items: BumpVec::with_capacity_in(capacity, storage.arena()),
        }
    }

    /// The arena this array and all of its elements live in.
    pub fn storage(&self) -> Storage<'a> {
        self.storage
    }

    /// Reserve room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Append a value. The value must belong to the same storage.
    pub fn push(&mut self, value: Value<'a>) {
        debug_assert!(
            value.storage() == self.storage,
            "array element allocated in a different arena"
        );
        self.items.push(value);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&Value<'a>> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value<'a>> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Value<'a>> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value<'a>] {
        &self.items
    }

    /// Remove all elements, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Deep-copy this array into `storage`.
    pub fn clone_in<'b>(&self, storage: Storage<'b>) -> Array<'b> {
        let mut out = Array::with_capacity(storage, self.len());
        for item in self.iter() {
            out.push(item.clone_in(storage));
        }
        out
    }
}

impl Clone for Array<'_> {
    fn clone(&self) -> Self {
        self.clone_in(self.storage)
    }
}

impl PartialEq for Array<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a> Index<usize> for Array<'a> {
    type Output = Value<'a>;

    fn index(&self, index: usize) -> &Value<'a> {
        &self.items[index]
    }
}

impl<'s, 'a> IntoIterator for &'s Array<'a> {
    type Item = &'s Value<'a>;
    type IntoIter = slice::Iter<'s, Value<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Array<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
