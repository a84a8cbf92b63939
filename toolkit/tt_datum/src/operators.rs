//! Binary operators over pairs of datums.
//!
//! [`evaluate_binary`] dispatches on the operand kinds. A pair of Integers
//! stays in wrapping 64-bit arithmetic; any other numeric pair widens to
//! `f64` and follows IEEE. `+` additionally concatenates Strings and
//! Vectors and unions Maps, with the right-hand entry winning a key
//! collision. Every combination outside these families is rejected with an
//! `InvalidOperation` naming both operands.
//!
//! Shifts and bitwise operators work on the unsigned reinterpretation of
//! the Integer operands. Shift amounts clamp rather than wrap: a magnitude
//! above 63 shifts every bit out (yielding 0, or -1 for a right shift of a
//! negative value), and a negative amount shifts in the opposite
//! direction, where the reversed `<<` becomes a logical right shift.

use crate::datum::Datum;
use crate::errors::{self, DatumResult, InvalidOperation};

/// A binary operator applicable to datums.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Shl,
    Shr,
    BitAnd,
    BitOr,
    BitXor,
}

impl BinaryOp {
    /// The source-level symbol, used in diagnostics.
    pub fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
fn logical_shift_right(lhs: i64, magnitude: u64) -> i64 {
    if magnitude > 63 {
        0
    } else {
        ((lhs as u64) >> magnitude) as i64
    }
}

#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
fn logical_shift_left(lhs: i64, magnitude: u64) -> i64 {
    if magnitude > 63 {
        0
    } else {
        ((lhs as u64) << magnitude) as i64
    }
}

fn shift_left(lhs: i64, amount: i64) -> i64 {
    if amount < 0 {
        logical_shift_right(lhs, amount.unsigned_abs())
    } else {
        logical_shift_left(lhs, amount.unsigned_abs())
    }
}

/// Arithmetic right shift for in-range amounts; an over-long shift keeps
/// only the sign.
fn shift_right(lhs: i64, amount: i64) -> i64 {
    if amount < 0 {
        logical_shift_left(lhs, amount.unsigned_abs())
    } else if amount > 63 {
        if lhs < 0 {
            -1
        } else {
            0
        }
    } else {
        lhs >> amount
    }
}

#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
fn integer_binary(lhs: i64, rhs: i64, op: BinaryOp) -> Result<i64, InvalidOperation> {
    Ok(match op {
        BinaryOp::Add => lhs.wrapping_add(rhs),
        BinaryOp::Sub => lhs.wrapping_sub(rhs),
        BinaryOp::Mul => lhs.wrapping_mul(rhs),
        BinaryOp::Div => {
            if rhs == 0 {
                return Err(errors::division_by_zero());
            }
            lhs.wrapping_div(rhs)
        }
        BinaryOp::Mod => {
            if rhs == 0 {
                return Err(errors::modulo_by_zero());
            }
            lhs.wrapping_rem(rhs)
        }
        BinaryOp::Shl => shift_left(lhs, rhs),
        BinaryOp::Shr => shift_right(lhs, rhs),
        BinaryOp::BitAnd => ((lhs as u64) & (rhs as u64)) as i64,
        BinaryOp::BitOr => ((lhs as u64) | (rhs as u64)) as i64,
        BinaryOp::BitXor => ((lhs as u64) ^ (rhs as u64)) as i64,
    })
}

/// Arithmetic over `f64` pairs. Shifts and bitwise operators have no float
/// meaning; `None` becomes a type-mismatch error at the call site. `%` is
/// the IEEE remainder with the sign of the dividend, and `/` by zero
/// yields an infinity or NaN rather than an error.
fn float_binary(lhs: f64, rhs: f64, op: BinaryOp) -> Option<f64> {
    Some(match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Sub => lhs - rhs,
        BinaryOp::Mul => lhs * rhs,
        BinaryOp::Div => lhs / rhs,
        BinaryOp::Mod => lhs % rhs,
        _ => return None,
    })
}

/// Apply `op` to two datums.
pub fn evaluate_binary(lhs: &Datum, rhs: &Datum, op: BinaryOp) -> DatumResult {
    match (lhs, rhs) {
        (Datum::Integer(a), Datum::Integer(b)) => {
            integer_binary(*a, *b, op).map(Datum::Integer)
        }
        (Datum::Integer(_) | Datum::Float(_), Datum::Integer(_) | Datum::Float(_)) => {
            match (lhs.as_float(), rhs.as_float()) {
                (Some(a), Some(b)) => float_binary(a, b, op)
                    .map(Datum::Float)
                    .ok_or_else(|| errors::binary_type_mismatch(op, lhs, rhs)),
                _ => Err(errors::binary_type_mismatch(op, lhs, rhs)),
            }
        }
        (Datum::String(a), Datum::String(b)) if op == BinaryOp::Add => {
            Ok(Datum::string(format!("{a}{b}")))
        }
        (Datum::Vector(a), Datum::Vector(b)) if op == BinaryOp::Add => {
            let mut items = (**a).clone();
            items.extend(b.iter().cloned());
            Ok(Datum::vector(items))
        }
        (Datum::Map(a), Datum::Map(b)) if op == BinaryOp::Add => {
            // Union; the right-hand value wins a key collision.
            let mut merged = (**a).clone();
            for (key, value) in b.iter() {
                merged.insert(key.clone(), value.clone());
            }
            Ok(Datum::map(merged))
        }
        _ => Err(errors::binary_type_mismatch(op, lhs, rhs)),
    }
}

impl Datum {
    pub fn try_add(&self, rhs: &Self) -> DatumResult {
        evaluate_binary(self, rhs, BinaryOp::Add)
    }

    pub fn try_sub(&self, rhs: &Self) -> DatumResult {
        evaluate_binary(self, rhs, BinaryOp::Sub)
    }

    pub fn try_mul(&self, rhs: &Self) -> DatumResult {
        evaluate_binary(self, rhs, BinaryOp::Mul)
    }

    pub fn try_div(&self, rhs: &Self) -> DatumResult {
        evaluate_binary(self, rhs, BinaryOp::Div)
    }

    pub fn try_rem(&self, rhs: &Self) -> DatumResult {
        evaluate_binary(self, rhs, BinaryOp::Mod)
    }

    pub fn try_shl(&self, rhs: &Self) -> DatumResult {
        evaluate_binary(self, rhs, BinaryOp::Shl)
    }

    pub fn try_shr(&self, rhs: &Self) -> DatumResult {
        evaluate_binary(self, rhs, BinaryOp::Shr)
    }

    pub fn try_bitand(&self, rhs: &Self) -> DatumResult {
        evaluate_binary(self, rhs, BinaryOp::BitAnd)
    }

    pub fn try_bitor(&self, rhs: &Self) -> DatumResult {
        evaluate_binary(self, rhs, BinaryOp::BitOr)
    }

    pub fn try_bitxor(&self, rhs: &Self) -> DatumResult {
        evaluate_binary(self, rhs, BinaryOp::BitXor)
    }
}
