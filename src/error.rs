//! Error types shared by the digit-string primitives and the multiplier.

use thiserror::Error;

use crate::karatsuba::ParamError;

/// Errors surfaced by the public API of this crate.
///
/// `InvalidDigitString` and `OperandTooLarge` describe bad caller input and
/// are recoverable. `NegativeResult` is only ever returned by the public
/// subtraction primitive; inside the multiplier the same condition is an
/// internal invariant violation and panics instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The input was empty or contained a character outside `'0'..='9'`.
    #[error("invalid digit string {input:?}: {reason}")]
    InvalidDigitString { input: String, reason: String },

    /// Subtraction was asked to produce a value below zero.
    #[error("subtraction would produce a negative result")]
    NegativeResult,

    /// Multiplier parameters failed validation.
    #[error("invalid multiplier parameters: {0}")]
    InvalidParams(#[from] ParamError),

    /// An operand is longer than the configured `max_digits`.
    #[error("operand has {digits} digits, limit is {limit}")]
    OperandTooLarge { digits: usize, limit: usize },
}
