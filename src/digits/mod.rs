//! Decimal digit strings
//!
//! This module defines the value type every other part of the crate
//! operates on, and the normalization helpers that maintain its invariant.
//!
//! - `DigitString`: an owned, normalized decimal representation of a
//!   non-negative integer, most significant digit first.
//! - `normalize` and `pad_to_equal_length`: crate-private helpers over raw
//!   digit buffers, used by the arithmetic primitives and the multiplier.
//!
//! Conversions from native unsigned integers and the operator traits
//! (`+`, `*`) live in private submodules and are available on the type
//! itself.

mod conv;
mod core;
mod ops;

pub use self::core::DigitString;
pub(crate) use self::core::{normalize_owned, pad_to_equal_length};
