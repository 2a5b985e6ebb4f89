//! Pointer types convert exactly like their pointee.

use alloc::borrow::ToOwned;
use core::ops::Deref;

use crate::{
    Arc, Box, Convert, Cow, Rc, Result, Strategy, Value,
    category::{CategoryTag, tag},
};

impl<P, T> Strategy<P> for tag::Indirect<T>
where
    P: Deref,
    P::Target: Convert,
    T: CategoryTag,
{
    fn apply(jv: &mut Value<'_>, from: &P) -> Result<()> {
        <<P::Target as Convert>::Tag as Strategy<P::Target>>::apply(jv, &**from)
    }
}

impl<T: Convert + ?Sized> Convert for &T {
    type Tag = tag::Indirect<T::Tag>;
}

impl<T: Convert + ?Sized> Convert for &mut T {
    type Tag = tag::Indirect<T::Tag>;
}

impl<T: Convert + ?Sized> Convert for Box<T> {
    type Tag = tag::Indirect<T::Tag>;
}

impl<T: Convert + ?Sized> Convert for Rc<T> {
    type Tag = tag::Indirect<T::Tag>;
}

impl<T: Convert + ?Sized> Convert for Arc<T> {
    type Tag = tag::Indirect<T::Tag>;
}

impl<T> Convert for Cow<'_, T>
where
    T: Convert + ToOwned + ?Sized,
{
    type Tag = tag::Indirect<T::Tag>;
}
