//! Dynamic tagged value type for the TTauri toolkit.
//!
//! The crate centers on [`Datum`], a value that is exactly one of nine
//! kinds at a time: Undefined, Null, Boolean, Integer, Float, String, URL,
//! Vector or Map. Scalars live inline, container payloads are exclusively
//! owned and deep-copied on clone. On top of the value sit conversions to
//! native types, a cross-kind total order usable for sorting and map keys,
//! hashing consistent with equality, and the binary operators in
//! [`operators`].
//!
//! Illegal conversions and operator applications are reported through
//! [`InvalidOperation`]; nothing in the crate panics on bad input.
//!
//! ```
//! use tt_datum::{Datum, BinaryOp, evaluate_binary};
//!
//! let sum = evaluate_binary(&Datum::from(3), &Datum::from(4), BinaryOp::Add);
//! assert_eq!(sum, Ok(Datum::from(7)));
//!
//! let mixed = evaluate_binary(&Datum::from(3), &Datum::from(0.5), BinaryOp::Add);
//! assert_eq!(mixed, Ok(Datum::from(3.5)));
//! ```

mod datum;
pub mod errors;
mod operators;

pub use datum::{Datum, DatumKind, Map, Vector};
pub use errors::{DatumResult, InvalidOperation};
pub use operators::{evaluate_binary, BinaryOp};
