use bumpalo::Bump;
use core::{fmt, hash};

/// Handle to the arena that backs every node of one value tree.
///
/// `Storage` is pointer-sized and `Copy`: passing it around never creates a
/// new arena, it only shares the one the caller chose. Two storages are equal
/// if and only if they point to the same [`Bump`].
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use arbor_values::{Storage, Value};
///
/// let arena = Bump::new();
/// let storage = Storage::new(&arena);
/// let v = Value::bool(storage, true);
/// assert_eq!(v.storage(), storage);
/// ```
#[derive(Copy, Clone)]
pub struct Storage<'a> {
    arena: &'a Bump,
}

static_assertions::assert_eq_size!(Storage<'static>, usize);

impl<'a> Storage<'a> {
    /// Create a storage handle for `arena`.
    pub fn new(arena: &'a Bump) -> Self {
        Self { arena }
    }

    /// The arena all nodes of this storage are allocated in.
    pub fn arena(&self) -> &'a Bump {
        self.arena
    }

    /// Copy a string into the arena.
    pub fn alloc_str(&self, s: &str) -> &'a str {
        self.arena.alloc_str(s)
    }
}

impl<'a> From<&'a Bump> for Storage<'a> {
    fn from(arena: &'a Bump) -> Self {
        Self::new(arena)
    }
}

impl fmt::Debug for Storage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Storage")
            .field(&(self.arena as *const Bump))
            .finish()
    }
}

// Bump has no PartialEq/Hash; storages compare by arena identity.
impl PartialEq for Storage<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.arena, other.arena)
    }
}

impl Eq for Storage<'_> {}

impl hash::Hash for Storage<'_> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        core::ptr::hash(self.arena, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_arena_is_equal() {
        let arena = Bump::new();
        let a = Storage::new(&arena);
        let b = Storage::from(&arena);
        assert_eq!(a, b);
    }

    #[test]
    fn different_arenas_are_not_equal() {
        let arena1 = Bump::new();
        let arena2 = Bump::new();
        assert_ne!(Storage::new(&arena1), Storage::new(&arena2));
    }

    #[test]
    fn alloc_str_copies_into_arena() {
        let arena = Bump::new();
        let storage = Storage::new(&arena);
        let owned = String::from("hello");
        let s = storage.alloc_str(&owned);
        drop(owned);
        assert_eq!(s, "hello");
    }
}
