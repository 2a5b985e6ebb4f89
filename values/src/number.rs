//! Numeric and scalar payloads of a [`Value`](crate::Value).

use core::fmt;

/// A JSON number: signed integer, unsigned integer or double.
///
/// Integers compare numerically regardless of signedness, so
/// `Number::I64(3) == Number::U64(3)`. Floats only compare equal to floats,
/// using IEEE semantics (`NaN != NaN`).
#[derive(Copy, Clone, Debug)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    /// The value as `i64`, if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::I64(n) => Some(n),
            Number::U64(n) => i64::try_from(n).ok(),
            Number::F64(_) => None,
        }
    }

    /// The value as `u64`, if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::I64(n) => u64::try_from(n).ok(),
            Number::U64(n) => Some(n),
            Number::F64(_) => None,
        }
    }

    /// The value as `f64`. Integers are converted, possibly losing precision.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    pub fn is_integer(&self) -> bool {
        !matches!(self, Number::F64(_))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::I64(a), Number::I64(b)) => a == b,
            (Number::U64(a), Number::U64(b)) => a == b,
            (Number::I64(a), Number::U64(b)) | (Number::U64(b), Number::I64(a)) => {
                u64::try_from(a).is_ok_and(|a| a == b)
            }
            (Number::F64(a), Number::F64(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::I64(n) => f.write_str(itoa::Buffer::new().format(n)),
            Number::U64(n) => f.write_str(itoa::Buffer::new().format(n)),
            // JSON has no representation for NaN or infinities.
            Number::F64(n) if !n.is_finite() => f.write_str("null"),
            Number::F64(n) => f.write_str(ryu::Buffer::new().format_finite(n)),
        }
    }
}

macro_rules! impl_number_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )*
    };
}

impl_number_from!(I64 as i64: i8, i16, i32, i64, isize);
impl_number_from!(U64 as u64: u8, u16, u32, u64, usize);
impl_number_from!(F64 as f64: f32, f64);

/// A value that carries no children: null, a boolean or a number.
///
/// This is what [`Value::set`](crate::Value::set) assigns in place.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<Number> for Scalar {
    fn from(n: Number) -> Self {
        Scalar::Number(n)
    }
}

impl From<()> for Scalar {
    fn from(_: ()) -> Self {
        Scalar::Null
    }
}

macro_rules! impl_scalar_from_number {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Scalar {
                fn from(n: $source) -> Self {
                    Scalar::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_scalar_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
