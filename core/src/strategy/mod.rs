//! One conversion strategy per category.
//!
//! Each module pairs a capability trait (what a source type must offer) with
//! the [`Strategy`](crate::Strategy) impl for its tag, and implements both for
//! the standard types of that category.

mod indirect;
mod map;
mod native;
mod null;
mod sequence;
mod string;
mod tuple;
mod user;

pub use map::{AsMap, MapLike, Pair};
pub use native::NativeScalar;
pub use null::{Null, NullLike};
pub use sequence::SequenceLike;
pub use string::StringLike;
pub use tuple::{ElementVisitor, TupleLike};
pub use user::ToValue;
