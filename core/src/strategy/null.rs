use core::marker::PhantomData;

use crate::{Convert, Result, Strategy, Value, tag};

/// A type that carries no data and always converts to null.
pub trait NullLike {}

/// The null value as a standalone type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Null;

impl<T: NullLike + ?Sized> Strategy<T> for tag::Null {
    fn apply(jv: &mut Value<'_>, _from: &T) -> Result<()> {
        // Nothing to write: the dispatcher hands over a null node.
        debug_assert!(jv.is_null(), "null conversion target must start out null");
        Ok(())
    }
}

impl NullLike for () {}

impl Convert for () {
    type Tag = tag::Null;
}

impl NullLike for Null {}

impl Convert for Null {
    type Tag = tag::Null;
}

impl<T: ?Sized> NullLike for PhantomData<T> {}

impl<T: ?Sized> Convert for PhantomData<T> {
    type Tag = tag::Null;
}
