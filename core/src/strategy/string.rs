use crate::{BumpString, Convert, Result, Strategy, String, Value, tag};

/// A type whose value is one UTF-8 string.
///
/// The string is lent to a closure so that types without a stored buffer,
/// like `char`, can encode into a temporary one.
pub trait StringLike {
    fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R;
}

impl<T: StringLike + ?Sized> Strategy<T> for tag::StringLike {
    fn apply(jv: &mut Value<'_>, from: &T) -> Result<()> {
        from.with_str(|src| {
            let dst = jv.emplace_string();
            dst.reserve_exact(src.len());
            dst.push_str(src);
        });
        Ok(())
    }
}

macro_rules! impl_string_like {
    ($($ty:ty),*) => {
        $(
            impl StringLike for $ty {
                fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
                    f(self)
                }
            }

            impl Convert for $ty {
                type Tag = tag::StringLike;
            }
        )*
    };
}

impl_string_like!(str, String, BumpString<'_>);

impl StringLike for char {
    fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        let mut buf = [0u8; 4];
        f(self.encode_utf8(&mut buf))
    }
}

impl Convert for char {
    type Tag = tag::StringLike;
}
