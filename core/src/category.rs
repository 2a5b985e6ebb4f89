//! Conversion categories and the tag types that select them.
//!
//! Every convertible type names exactly one tag through
//! [`Convert::Tag`](crate::Convert::Tag). The tag is a type, so the choice of
//! strategy is made by the compiler once per source type and never looked at
//! again at runtime. [`Category`] mirrors the tags as a plain enum for
//! diagnostics and tests.

use core::fmt;

use crate::Convert;

/// The closed set of conversion categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// The type converts itself through a [`ToValue`](crate::ToValue) hook.
    UserDefined,
    /// The type maps directly onto a scalar or is already a `Value`.
    Native,
    /// The type carries no data and always converts to null.
    Null,
    /// The type is a contiguous UTF-8 buffer.
    StringLike,
    /// The type iterates as `(key, value)` pairs.
    MapLike,
    /// The type iterates as a linear sequence of elements.
    SequenceLike,
    /// The type is a fixed-arity heterogeneous product.
    TupleLike,
    /// No conversion exists.
    Unsupported,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::UserDefined => "user-defined",
            Category::Native => "native",
            Category::Null => "null",
            Category::StringLike => "string-like",
            Category::MapLike => "map-like",
            Category::SequenceLike => "sequence-like",
            Category::TupleLike => "tuple-like",
            Category::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Implemented by every tag type in [`tag`].
pub trait CategoryTag {
    const CATEGORY: Category;
}

/// The category `T` converts under.
///
/// ```
/// use arbor_core::{Category, category_of};
///
/// assert_eq!(category_of::<Vec<u8>>(), Category::SequenceLike);
/// assert_eq!(category_of::<&str>(), Category::StringLike);
/// assert_eq!(category_of::<(bool, f64)>(), Category::TupleLike);
/// ```
pub const fn category_of<T: Convert + ?Sized>() -> Category {
    <T::Tag as CategoryTag>::CATEGORY
}

/// Tag types, one per [`Category`].
///
/// Tags are uninhabited: they exist only to be named in
/// [`Convert::Tag`](crate::Convert::Tag).
pub mod tag {
    use core::marker::PhantomData;

    use super::{Category, CategoryTag};

    macro_rules! tags {
        ($($(#[$meta:meta])* $name:ident,)*) => {
            $(
                $(#[$meta])*
                #[derive(Debug)]
                pub enum $name {}

                impl CategoryTag for $name {
                    const CATEGORY: Category = Category::$name;
                }
            )*
        };
    }

    tags! {
        /// Delegates to the type's [`ToValue`](crate::ToValue) hook.
        UserDefined,
        /// Assigns a scalar, or copies an existing `Value`.
        Native,
        /// Leaves the destination null.
        Null,
        /// Copies a string buffer.
        StringLike,
        /// Builds an object from key/value pairs.
        MapLike,
        /// Builds an array from a sequence.
        SequenceLike,
        /// Builds an array from tuple positions.
        TupleLike,
        /// Has no strategy; naming it as a tag fails to compile.
        ///
        /// ```compile_fail
        /// use arbor_core::{Convert, tag};
        ///
        /// struct RawHandle(*const u8);
        ///
        /// impl Convert for RawHandle {
        ///     type Tag = tag::Unsupported;
        /// }
        /// ```
        Unsupported,
    }

    /// Tag of pointer types that convert exactly like their pointee.
    ///
    /// `T` is the pointee's tag; the reported category is the pointee's.
    pub struct Indirect<T>(PhantomData<T>, core::convert::Infallible);

    impl<T: CategoryTag> CategoryTag for Indirect<T> {
        const CATEGORY: Category = T::CATEGORY;
    }
}
