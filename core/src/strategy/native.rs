use crate::{Convert, Number, Result, Scalar, Strategy, Value, tag};

/// A type that maps directly onto a node without any transformation.
pub trait NativeScalar {
    /// Overwrite `jv` with this value.
    fn assign(&self, jv: &mut Value<'_>);
}

impl<T: NativeScalar + ?Sized> Strategy<T> for tag::Native {
    fn apply(jv: &mut Value<'_>, from: &T) -> Result<()> {
        from.assign(jv);
        Ok(())
    }
}

macro_rules! impl_native_scalar {
    ($($ty:ty),*) => {
        $(
            impl NativeScalar for $ty {
                fn assign(&self, jv: &mut Value<'_>) {
                    jv.set(*self);
                }
            }

            impl Convert for $ty {
                type Tag = tag::Native;
            }
        )*
    };
}

impl_native_scalar!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, Number, Scalar
);

/// An existing value is deep-copied into the destination's storage.
impl NativeScalar for Value<'_> {
    fn assign(&self, jv: &mut Value<'_>) {
        *jv = self.clone_in(jv.storage());
    }
}

impl Convert for Value<'_> {
    type Tag = tag::Native;
}
