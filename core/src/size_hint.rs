//! Best-effort cardinality estimates used to pre-size containers.

/// How many elements a source collection will yield, if known cheaply.
///
/// A hint only affects how much is reserved up front. Converting with
/// [`SizeHint::Unknown`] produces exactly the same tree as converting with the
/// true size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SizeHint {
    Known(usize),
    #[default]
    Unknown,
}

impl SizeHint {
    /// Number of slots to reserve: the known size, or zero.
    pub fn reserve_count(self) -> usize {
        match self {
            SizeHint::Known(n) => n,
            SizeHint::Unknown => 0,
        }
    }

    pub fn known(self) -> Option<usize> {
        match self {
            SizeHint::Known(n) => Some(n),
            SizeHint::Unknown => None,
        }
    }
}

impl From<Option<usize>> for SizeHint {
    fn from(n: Option<usize>) -> Self {
        n.map_or(SizeHint::Unknown, SizeHint::Known)
    }
}

/// Ask an iterator for its exact length without advancing it.
///
/// Returns [`SizeHint::Known`] only when the iterator's lower and upper bounds
/// agree; anything looser is reported as unknown.
pub fn probe<I: Iterator + ?Sized>(iter: &I) -> SizeHint {
    match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => SizeHint::Known(lower),
        _ => SizeHint::Unknown,
    }
}
