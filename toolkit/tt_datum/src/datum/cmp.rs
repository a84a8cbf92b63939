//! Equality, total order and hashing for `Datum`.
//!
//! Equality crosses kind boundaries inside two families: Integer and Float
//! compare by exact numeric value, and String and URL compare by string
//! form. Every other pair of distinct kinds is unequal.
//!
//! The order is total over every datum, including NaN. Values of comparable
//! families order by value; otherwise the kind rank decides:
//! Undefined < Null < Boolean < numeric < text < Vector < Map. NaN compares
//! equal to NaN and greater than every other float, which keeps sorting and
//! `BTreeMap` keys well defined without a poisoned element.
//!
//! `Hash` is consistent with `Eq`: numeric values hash through a canonical
//! float bit pattern and text values hash their string form, so
//! `Integer(1)`, `Float(1.0)` and the pair `String("a")`/`Url("a")` land in
//! the same bucket.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::Datum;

/// Kind rank for the cross-kind fallback order. Integer and Float share a
/// rank, as do String and URL.
fn rank(value: &Datum) -> u8 {
    match value {
        Datum::Undefined => 0,
        Datum::Null => 1,
        Datum::Boolean(_) => 2,
        Datum::Integer(_) | Datum::Float(_) => 3,
        Datum::String(_) | Datum::Url(_) => 4,
        Datum::Vector(_) => 5,
        Datum::Map(_) => 6,
    }
}

/// Total order over floats: NaN equals NaN and sorts above every other
/// value; `-0.0` equals `0.0`.
///
/// `f64::total_cmp` is unsuitable here because it separates the two zero
/// encodings, which would break transitivity against `Integer(0)`.
fn cmp_floats(lhs: f64, rhs: f64) -> Ordering {
    match (lhs.is_nan(), rhs.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // Neither side is NaN, so partial_cmp is defined.
        (false, false) => lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal),
    }
}

/// Exact comparison of an integer against a float, without rounding the
/// integer through `f64`.
///
/// Floats at or beyond the `i64` range decide immediately; in-range floats
/// compare against their truncation, with the fractional part breaking
/// ties.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn cmp_int_float(lhs: i64, rhs: f64) -> Ordering {
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

    if rhs.is_nan() {
        return Ordering::Less;
    }
    if rhs >= TWO_POW_63 {
        return Ordering::Less;
    }
    if rhs < -TWO_POW_63 {
        return Ordering::Greater;
    }
    // rhs is now in [-2^63, 2^63), so the truncation fits in i64.
    let truncated = rhs.trunc() as i64;
    match lhs.cmp(&truncated) {
        Ordering::Equal if rhs > truncated as f64 => Ordering::Less,
        Ordering::Equal if rhs < truncated as f64 => Ordering::Greater,
        ordering => ordering,
    }
}

fn cmp_same_rank(lhs: &Datum, rhs: &Datum) -> Ordering {
    match (lhs, rhs) {
        (Datum::Undefined, Datum::Undefined) | (Datum::Null, Datum::Null) => Ordering::Equal,
        (Datum::Boolean(a), Datum::Boolean(b)) => a.cmp(b),
        (Datum::Integer(a), Datum::Integer(b)) => a.cmp(b),
        (Datum::Float(a), Datum::Float(b)) => cmp_floats(*a, *b),
        (Datum::Integer(a), Datum::Float(b)) => cmp_int_float(*a, *b),
        (Datum::Float(a), Datum::Integer(b)) => cmp_int_float(*b, *a).reverse(),
        (Datum::Vector(a), Datum::Vector(b)) => a.iter().cmp(b.iter()),
        // Key sequences decide first; values only break a key-sequence tie.
        (Datum::Map(a), Datum::Map(b)) => a
            .keys()
            .cmp(b.keys())
            .then_with(|| a.values().cmp(b.values())),
        // Equal ranks and no case above: both sides are text.
        (a, b) => match (a.text(), b.text()) {
            (Some(a), Some(b)) => a.cmp(b),
            _ => Ordering::Equal,
        },
    }
}

impl Ord for Datum {
    fn cmp(&self, other: &Self) -> Ordering {
        rank(self)
            .cmp(&rank(other))
            .then_with(|| cmp_same_rank(self, other))
    }
}

impl PartialOrd for Datum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Datum {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Datum {}

/// Canonical bit pattern for hashing a float: every NaN payload maps to one
/// pattern and both zeros map to positive zero.
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl Hash for Datum {
    fn hash<H: Hasher>(&self, state: &mut H) {
        rank(self).hash(state);
        match self {
            Self::Undefined | Self::Null => {}
            Self::Boolean(b) => b.hash(state),
            // Integers hash through their float rendering so that equal
            // numerics hash equal across kinds.
            #[allow(clippy::cast_precision_loss)]
            Self::Integer(i) => canonical_bits(*i as f64).hash(state),
            Self::Float(v) => canonical_bits(*v).hash(state),
            Self::String(s) => s.as_str().hash(state),
            Self::Url(url) => url.as_str().hash(state),
            Self::Vector(items) => {
                items.len().hash(state);
                for item in items.iter() {
                    item.hash(state);
                }
            }
            Self::Map(entries) => {
                entries.len().hash(state);
                for (key, value) in entries.iter() {
                    key.hash(state);
                    value.hash(state);
                }
            }
        }
    }
}
