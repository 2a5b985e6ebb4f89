//! Deriving object keys from map keys.
//!
//! Object keys are strings. String-like keys are used verbatim, integers are
//! rendered in canonical decimal and booleans as `"true"`/`"false"`. Nothing
//! else implements [`MapKey`]: a map keyed by floats or by composite types has
//! no unambiguous object form and does not convert.

use crate::{Arc, Box, Cow, Rc, String};

/// A map key that can be rendered as an object key.
pub trait MapKey {
    /// Call `f` with the string form of this key.
    fn with_key<R>(&self, f: impl FnOnce(&str) -> R) -> R;
}

impl MapKey for str {
    fn with_key<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(self)
    }
}

impl MapKey for String {
    fn with_key<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(self)
    }
}

impl MapKey for Box<str> {
    fn with_key<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(self)
    }
}

impl MapKey for Rc<str> {
    fn with_key<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(self)
    }
}

impl MapKey for Arc<str> {
    fn with_key<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(self)
    }
}

impl MapKey for Cow<'_, str> {
    fn with_key<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(self)
    }
}

impl MapKey for char {
    fn with_key<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        let mut buf = [0u8; 4];
        f(self.encode_utf8(&mut buf))
    }
}

impl MapKey for bool {
    fn with_key<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(if *self { "true" } else { "false" })
    }
}

impl<K: MapKey + ?Sized> MapKey for &K {
    fn with_key<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        (**self).with_key(f)
    }
}

macro_rules! impl_integer_key {
    ($($ty:ty),*) => {
        $(
            impl MapKey for $ty {
                fn with_key<R>(&self, f: impl FnOnce(&str) -> R) -> R {
                    f(itoa::Buffer::new().format(*self))
                }
            }
        )*
    };
}

impl_integer_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
