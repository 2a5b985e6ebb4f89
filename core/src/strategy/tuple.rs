use crate::{Array, Convert, Result, Strategy, Value, tag, value_from};

/// Receives the elements of a tuple one position at a time.
pub trait ElementVisitor {
    fn visit<T: Convert + ?Sized>(&mut self, index: usize, element: &T) -> Result<()>;
}

/// A fixed-arity product whose positions may all have different types.
pub trait TupleLike {
    /// The number of positions, known at compile time.
    const ARITY: usize;

    /// Visit positions `0..ARITY` in ascending order, stopping at the first
    /// error.
    fn walk<V: ElementVisitor>(&self, visitor: &mut V) -> Result<()>;
}

impl<T: TupleLike + ?Sized> Strategy<T> for tag::TupleLike {
    fn apply(jv: &mut Value<'_>, from: &T) -> Result<()> {
        let arr = jv.emplace_array();
        arr.reserve(T::ARITY);
        from.walk(&mut AppendElements { arr })
    }
}

struct AppendElements<'r, 'a> {
    arr: &'r mut Array<'a>,
}

impl ElementVisitor for AppendElements<'_, '_> {
    fn visit<T: Convert + ?Sized>(&mut self, index: usize, element: &T) -> Result<()> {
        debug_assert_eq!(index, self.arr.len(), "tuple positions visited out of order");
        let storage = self.arr.storage();
        self.arr.push(value_from(element, storage)?);
        Ok(())
    }
}

macro_rules! impl_tuple {
    ($($arity:literal => ($($index:tt $name:ident)+))+) => {
        $(
            impl<$($name: Convert),+> TupleLike for ($($name,)+) {
                const ARITY: usize = $arity;

                fn walk<V: ElementVisitor>(&self, visitor: &mut V) -> Result<()> {
                    $(visitor.visit($index, &self.$index)?;)+
                    Ok(())
                }
            }

            impl<$($name: Convert),+> Convert for ($($name,)+) {
                type Tag = tag::TupleLike;
            }
        )+
    };
}

impl_tuple! {
    1 => (0 T0)
    2 => (0 T0 1 T1)
    3 => (0 T0 1 T1 2 T2)
    4 => (0 T0 1 T1 2 T2 3 T3)
    5 => (0 T0 1 T1 2 T2 3 T3 4 T4)
    6 => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5)
    7 => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6)
    8 => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7)
    9 => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8)
    10 => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9)
    11 => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9 10 T10)
    12 => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9 10 T10 11 T11)
    13 => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9 10 T10 11 T11 12 T12)
    14 => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9 10 T10 11 T11 12 T12 13 T13)
    15 => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9 10 T10 11 T11 12 T12 13 T13 14 T14)
    16 => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9 10 T10 11 T11 12 T12 13 T13 14 T14 15 T15)
}
