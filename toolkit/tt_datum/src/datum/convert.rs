//! Fallible conversions from `Datum` to native types.
//!
//! Each `to_*` method accepts the kinds the conversion table allows and
//! rejects everything else with an [`InvalidOperation`] naming the value
//! and its kind. `to_bool` is the one total conversion. The `TryFrom`
//! impls delegate to the inherent methods.

use super::{Datum, Map, Vector};
use crate::errors::{self, InvalidOperation};
use tt_url::Url;

impl Datum {
    /// Numeric value as `f64`; accepts Float and Integer.
    pub fn to_f64(&self) -> Result<f64, InvalidOperation> {
        self.as_float()
            .ok_or_else(|| errors::cannot_convert(self, "f64"))
    }

    /// Numeric value as `f32`, rounding; accepts Float and Integer.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32(&self) -> Result<f32, InvalidOperation> {
        self.to_f64().map(|v| v as f32)
    }

    /// Integral value; accepts Integer, Float (truncating, saturating at
    /// the `i64` range, NaN becomes 0) and Boolean (0 or 1).
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_i64(&self) -> Result<i64, InvalidOperation> {
        match self {
            Self::Integer(i) => Ok(*i),
            Self::Float(v) => Ok(*v as i64),
            Self::Boolean(b) => Ok(i64::from(*b)),
            _ => Err(errors::cannot_convert(self, "i64")),
        }
    }

    /// As [`to_i64`](Self::to_i64), then range-checked into `i32`.
    pub fn to_i32(&self) -> Result<i32, InvalidOperation> {
        i32::try_from(self.to_i64()?).map_err(|_| errors::cannot_convert(self, "i32"))
    }

    /// As [`to_i64`](Self::to_i64), then range-checked into `i16`.
    pub fn to_i16(&self) -> Result<i16, InvalidOperation> {
        i16::try_from(self.to_i64()?).map_err(|_| errors::cannot_convert(self, "i16"))
    }

    /// As [`to_i64`](Self::to_i64), then range-checked into `i8`.
    pub fn to_i8(&self) -> Result<i8, InvalidOperation> {
        i8::try_from(self.to_i64()?).map_err(|_| errors::cannot_convert(self, "i8"))
    }

    /// As [`to_i64`](Self::to_i64), then range-checked into `u64`.
    pub fn to_u64(&self) -> Result<u64, InvalidOperation> {
        u64::try_from(self.to_i64()?).map_err(|_| errors::cannot_convert(self, "u64"))
    }

    /// As [`to_i64`](Self::to_i64), then range-checked into `u32`.
    pub fn to_u32(&self) -> Result<u32, InvalidOperation> {
        u32::try_from(self.to_i64()?).map_err(|_| errors::cannot_convert(self, "u32"))
    }

    /// As [`to_i64`](Self::to_i64), then range-checked into `u16`.
    pub fn to_u16(&self) -> Result<u16, InvalidOperation> {
        u16::try_from(self.to_i64()?).map_err(|_| errors::cannot_convert(self, "u16"))
    }

    /// As [`to_i64`](Self::to_i64), then range-checked into `u8`.
    pub fn to_u8(&self) -> Result<u8, InvalidOperation> {
        u8::try_from(self.to_i64()?).map_err(|_| errors::cannot_convert(self, "u8"))
    }

    /// Truthiness; total over every kind.
    ///
    /// Undefined and Null are false; numerics are true when non-zero (NaN
    /// included); String, Vector and Map are true when non-empty; a URL is
    /// always true.
    pub fn to_bool(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Boolean(b) => *b,
            Self::Integer(i) => *i != 0,
            Self::Float(v) => *v != 0.0,
            Self::String(s) => !s.is_empty(),
            Self::Url(_) => true,
            Self::Vector(items) => !items.is_empty(),
            Self::Map(entries) => !entries.is_empty(),
        }
    }

    /// The single character of a one-character String.
    pub fn to_char(&self) -> Result<char, InvalidOperation> {
        if let Self::String(s) = self {
            let mut chars = s.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return Ok(c);
            }
        }
        Err(errors::cannot_convert(self, "char"))
    }

    /// URL value; accepts Url and String (parsed and normalized).
    pub fn to_url(&self) -> Result<Url, InvalidOperation> {
        match self {
            Self::Url(url) => Ok((**url).clone()),
            Self::String(s) => Ok(Url::new(s)),
            _ => Err(errors::cannot_convert(self, "URL")),
        }
    }

    /// Owned copy of the vector payload; accepts Vector only.
    pub fn to_vector(&self) -> Result<Vector, InvalidOperation> {
        match self {
            Self::Vector(items) => Ok((**items).clone()),
            _ => Err(errors::cannot_convert(self, "Vector")),
        }
    }

    /// Owned copy of the map payload; accepts Map only.
    pub fn to_map(&self) -> Result<Map, InvalidOperation> {
        match self {
            Self::Map(entries) => Ok((**entries).clone()),
            _ => Err(errors::cannot_convert(self, "Map")),
        }
    }
}

macro_rules! try_from_datum {
    ($($target:ty => $method:ident),* $(,)?) => {
        $(
            impl TryFrom<&Datum> for $target {
                type Error = InvalidOperation;

                fn try_from(value: &Datum) -> Result<Self, Self::Error> {
                    value.$method()
                }
            }

            impl TryFrom<Datum> for $target {
                type Error = InvalidOperation;

                fn try_from(value: Datum) -> Result<Self, Self::Error> {
                    value.$method()
                }
            }
        )*
    };
}

try_from_datum! {
    f64 => to_f64,
    f32 => to_f32,
    i64 => to_i64,
    i32 => to_i32,
    i16 => to_i16,
    i8 => to_i8,
    u64 => to_u64,
    u32 => to_u32,
    u16 => to_u16,
    u8 => to_u8,
    char => to_char,
    Url => to_url,
    Vector => to_vector,
    Map => to_map,
}

impl From<&Datum> for bool {
    fn from(value: &Datum) -> Self {
        value.to_bool()
    }
}

impl From<&Datum> for String {
    fn from(value: &Datum) -> Self {
        value.to_string()
    }
}
