//! The dynamic tagged value type.
//!
//! `Datum` is the toolkit's configuration and expression value: one of
//! Float, Integer, Boolean, Null, Undefined, String, URL, Vector or Map in
//! a single enum with value semantics. Storage falls into two classes:
//! scalars live inline in the enum word and short strings are stored
//! inline by `SmolStr`, while URL/Vector/Map payloads are boxed,
//! exclusively owned, deep-copied on clone and released exactly once on
//! drop. There is no payload sharing between instances.
//!
//! Cross-kind equality, the total order and hashing live in [`cmp`];
//! fallible conversions in [`convert`]; binary operators in
//! [`crate::operators`].

mod cmp;
mod convert;

use std::collections::BTreeMap;
use std::fmt;

use smol_str::SmolStr;
use tt_url::Url;

use crate::errors::{self, InvalidOperation};

/// Sequence payload of a datum.
pub type Vector = Vec<Datum>;

/// Key-ordered mapping payload of a datum. Ordered by the datum total
/// order, so rendering and hashing are deterministic.
pub type Map = BTreeMap<Datum, Datum>;

/// A dynamic value: exactly one kind at a time.
#[derive(Clone, Debug, Default)]
pub enum Datum {
    /// No value assigned yet; the default state.
    #[default]
    Undefined,
    /// An explicit empty value.
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(SmolStr),
    Url(Box<Url>),
    Vector(Box<Vector>),
    Map(Box<Map>),
}

/// The logical kind of a datum, for diagnostics and dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatumKind {
    Undefined,
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Url,
    Vector,
    Map,
}

// Factory methods

impl Datum {
    /// Create a string datum. Short strings are stored inline.
    #[inline]
    pub fn string(s: impl Into<SmolStr>) -> Self {
        Self::String(s.into())
    }

    /// Create a URL datum.
    #[inline]
    pub fn url(url: Url) -> Self {
        Self::Url(Box::new(url))
    }

    /// Create a vector datum.
    #[inline]
    pub fn vector(items: Vector) -> Self {
        Self::Vector(Box::new(items))
    }

    /// Create a map datum.
    #[inline]
    pub fn map(entries: Map) -> Self {
        Self::Map(Box::new(entries))
    }
}

// Kind inspection

impl Datum {
    /// The logical kind of this value.
    pub fn kind(&self) -> DatumKind {
        match self {
            Self::Undefined => DatumKind::Undefined,
            Self::Null => DatumKind::Null,
            Self::Boolean(_) => DatumKind::Boolean,
            Self::Integer(_) => DatumKind::Integer,
            Self::Float(_) => DatumKind::Float,
            Self::String(_) => DatumKind::String,
            Self::Url(_) => DatumKind::Url,
            Self::Vector(_) => DatumKind::Vector,
            Self::Map(_) => DatumKind::Map,
        }
    }

    /// The kind name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self.kind() {
            DatumKind::Undefined => "Undefined",
            DatumKind::Null => "Null",
            DatumKind::Boolean => "Boolean",
            DatumKind::Integer => "Integer",
            DatumKind::Float => "Float",
            DatumKind::String => "String",
            DatumKind::Url => "URL",
            DatumKind::Vector => "Vector",
            DatumKind::Map => "Map",
        }
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Integer or Float.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    #[inline]
    pub fn is_url(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    #[inline]
    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(_))
    }

    #[inline]
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }
}

// Borrowing accessors

impl Datum {
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The numeric value as a float; accepts Integer and Float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            #[allow(clippy::cast_precision_loss)]
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            Self::Url(url) => Some(url),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[Datum]> {
        match self {
            Self::Vector(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// The string form shared by the String and URL kinds.
    pub(crate) fn text(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            Self::Url(url) => Some(url.as_str()),
            _ => None,
        }
    }
}

// Value operations

impl Datum {
    /// Drop any owned payload and return to `Undefined`.
    pub fn reset(&mut self) {
        *self = Self::Undefined;
    }

    /// The element count of a sized kind: string byte length, vector
    /// element count or map entry count.
    pub fn size(&self) -> Result<usize, InvalidOperation> {
        match self {
            Self::String(s) => Ok(s.len()),
            Self::Vector(items) => Ok(items.len()),
            Self::Map(entries) => Ok(entries.len()),
            _ => Err(errors::no_size(self)),
        }
    }

    /// Debug rendering: like `Display`, but String is quoted and URL is
    /// wrapped in `<URL ...>`.
    pub fn repr(&self) -> String {
        match self {
            Self::String(s) => format!("\"{s}\""),
            Self::Url(url) => format!("<URL {url}>"),
            other => other.to_string(),
        }
    }
}

// Rendering

/// Write a float with a mandatory fractional part, so that the rendering
/// round-trips as a Float rather than re-reading as an Integer.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
    }
    let rendered = format!("{value}");
    if rendered.contains('.') {
        f.write_str(&rendered)
    } else {
        write!(f, "{rendered}.0")
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write_float(f, *v),
            Self::String(s) => f.write_str(s),
            Self::Url(url) => write!(f, "{url}"),
            Self::Vector(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// Construction from native types

impl From<bool> for Datum {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Datum {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Datum {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i16> for Datum {
    fn from(value: i16) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i8> for Datum {
    fn from(value: i8) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for Datum {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u16> for Datum {
    fn from(value: u16) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u8> for Datum {
    fn from(value: u8) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Datum {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for Datum {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<char> for Datum {
    fn from(value: char) -> Self {
        let mut buffer = [0u8; 4];
        Self::string(&*value.encode_utf8(&mut buffer))
    }
}

impl From<Url> for Datum {
    fn from(value: Url) -> Self {
        Self::url(value)
    }
}

impl From<Vector> for Datum {
    fn from(value: Vector) -> Self {
        Self::vector(value)
    }
}

impl From<Map> for Datum {
    fn from(value: Map) -> Self {
        Self::map(value)
    }
}

#[cfg(test)]
mod tests;
