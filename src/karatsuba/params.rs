//! Parameter definitions and validation for the multiplier.
//!
//! None of these parameters change the recursion tree or the result; they
//! only decide where work runs and how large an operand may be.

use thiserror::Error;

/// Configuration for a [`Multiplier`](super::Multiplier).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KaratsubaParams {
    /// Padded operand length at or above which the three sub-products are
    /// evaluated concurrently. Only consulted with the `parallel` feature.
    /// Minimum 2.
    pub parallel_threshold: usize,
    /// Maximum number of digits accepted per operand after normalization.
    /// `None` accepts any length.
    pub max_digits: Option<usize>,
}

/// Errors that can occur during parameter validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParamError {
    /// A length-1 frame is the base case and never splits.
    #[error("parallel threshold must be at least 2, got {0}")]
    ThresholdTooSmall(usize),
    /// A digit string always has at least one digit.
    #[error("max_digits must be at least 1")]
    ZeroDigitLimit,
}

impl KaratsubaParams {
    pub(crate) fn validate(&self) -> Result<(), ParamError> {
        if self.parallel_threshold < 2 {
            return Err(ParamError::ThresholdTooSmall(self.parallel_threshold));
        }

        if self.max_digits == Some(0) {
            return Err(ParamError::ZeroDigitLimit);
        }

        Ok(())
    }
}

impl Default for KaratsubaParams {
    /// Parallel above 256 digits, no length limit.
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
            max_digits: None,
        }
    }
}
