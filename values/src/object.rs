use bumpalo::{Bump, collections::Vec as BumpVec};
use core::{fmt, ops::Index};
use hashbrown::{DefaultHashBuilder, HashMap};

use crate::{Storage, Value};

type KeyIndex<'a> = HashMap<&'a str, usize, DefaultHashBuilder, &'a Bump>;

/// A string-keyed collection of values allocated in one arena.
///
/// Entries iterate in insertion order. Keys are unique: inserting an existing
/// key replaces its value but keeps the key's original position. Equality
/// ignores order.
///
/// Both the entries and the hash index used for lookups are allocated in the
/// object's arena, so an object never touches the global allocator.
pub struct Object<'a> {
    storage: Storage<'a>,
    entries: BumpVec<'a, (&'a str, Value<'a>)>,
    index: KeyIndex<'a>,
}

impl<'a> Object<'a> {
    /// Create an empty object. Does not allocate.
    pub fn new(storage: Storage<'a>) -> Self {
        Self {
            storage,
            entries: BumpVec::new_in(storage.arena()),
            index: HashMap::new_in(storage.arena()),
        }
    }

    /// Create an empty object with room for `capacity` entries.
    pub fn with_capacity(storage: Storage<'a>, capacity: usize) -> Self {
        let mut object = Self::new(storage);
        object.reserve(capacity);
        object
    }

    /// The arena this object, its keys and its values live in.
    pub fn storage(&self) -> Storage<'a> {
        self.storage
    }

    /// Reserve room for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
        self.index.reserve(additional);
    }

    /// Insert `value` under `key`, returning the value it replaced.
    ///
    /// The key is copied into the arena only when it is new.
    pub fn insert(&mut self, key: &str, value: Value<'a>) -> Option<Value<'a>> {
        debug_assert!(
            value.storage() == self.storage,
            "object member allocated in a different arena"
        );
        if let Some(&slot) = self.index.get(key) {
            return Some(core::mem::replace(&mut self.entries[slot].1, value));
        }
        let key = self.storage.alloc_str(key);
        self.index.insert(key, self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        let &slot = self.index.get(key)?;
        Some(&self.entries[slot].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value<'a>> {
        let &slot = self.index.get(key)?;
        Some(&mut self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'a str, &Value<'a>)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value<'a>> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Remove all entries, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Deep-copy this object into `storage`, preserving entry order.
    pub fn clone_in<'b>(&self, storage: Storage<'b>) -> Object<'b> {
        let mut out = Object::with_capacity(storage, self.len());
        for (key, value) in self.iter() {
            out.insert(key, value.clone_in(storage));
        }
        out
    }
}

impl Clone for Object<'_> {
    fn clone(&self) -> Self {
        self.clone_in(self.storage)
    }
}

impl PartialEq for Object<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| v == value))
    }
}

impl<'a> Index<&str> for Object<'a> {
    type Output = Value<'a>;

    fn index(&self, key: &str) -> &Value<'a> {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no entry for key {key:?}"),
        }
    }
}

impl fmt::Debug for Object<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
