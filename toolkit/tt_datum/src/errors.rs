//! Error type for illegal datum operations.
//!
//! Every illegal conversion, operator application or `size()` request maps
//! to the single [`InvalidOperation`] kind. These are contract violations
//! surfaced synchronously to the caller; there is no retry or recovery
//! machinery. Factory functions build the message from the offending
//! operands' `repr()` and `type_name()`.

use thiserror::Error;

use crate::datum::Datum;
use crate::operators::BinaryOp;

/// Result of a fallible datum operation.
pub type DatumResult = Result<Datum, InvalidOperation>;

/// An operation was applied to a datum of an incompatible kind.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidOperation {
    message: String,
}

impl InvalidOperation {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::trace!(message = %message, "invalid datum operation");
        Self { message }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Conversion to a native type rejected for this kind.
#[cold]
pub fn cannot_convert(value: &Datum, target: &str) -> InvalidOperation {
    InvalidOperation::new(format!(
        "cannot convert {} of type {} to {target}",
        value.repr(),
        value.type_name()
    ))
}

/// Operator rejected for this combination of operand kinds.
#[cold]
pub fn binary_type_mismatch(op: BinaryOp, lhs: &Datum, rhs: &Datum) -> InvalidOperation {
    InvalidOperation::new(format!(
        "cannot apply '{}' to {} of type {} and {} of type {}",
        op.as_symbol(),
        lhs.repr(),
        lhs.type_name(),
        rhs.repr(),
        rhs.type_name()
    ))
}

/// Integer division by zero.
#[cold]
pub fn division_by_zero() -> InvalidOperation {
    InvalidOperation::new("integer division by zero")
}

/// Integer modulo by zero.
#[cold]
pub fn modulo_by_zero() -> InvalidOperation {
    InvalidOperation::new("integer modulo by zero")
}

/// `size()` requested on a kind without a size.
#[cold]
pub fn no_size(value: &Datum) -> InvalidOperation {
    InvalidOperation::new(format!(
        "cannot get size of {} of type {}",
        value.repr(),
        value.type_name()
    ))
}
