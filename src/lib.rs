//! Decimal Karatsuba multiplication
//!
//! This crate multiplies arbitrarily large non-negative integers written as
//! decimal digit strings, using the Karatsuba divide-and-conquer algorithm
//! directly on the digits rather than delegating to a binary big-integer
//! type.
//!
//! # Module overview
//!
//! - `digits`
//!   The `DigitString` value type: validated, normalized decimal digits,
//!   most significant first. Also hosts the normalization and padding
//!   helpers, conversions from native integers and the `+` / `*`
//!   operators.
//!
//! - `arith` (crate-private)
//!   Non-recursive primitives over raw digit buffers: addition with carry,
//!   subtraction with borrow (failing on underflow) and multiplication by a
//!   power of ten. Exposed through `DigitString::{add, checked_sub,
//!   shift_left}`.
//!
//! - `karatsuba`
//!   The recursive multiplier. Each level pads both operands to a common
//!   length, splits them in half, computes three sub-products and
//!   recombines them with the `arith` primitives, for
//!   O(n^1.585) digit operations instead of O(n²).
//!
//! # Errors
//!
//! Malformed input (empty, or containing anything but `'0'..='9'`) is
//! reported as [`Error::InvalidDigitString`]. An underflow inside the
//! multiplier's recombination step is a broken internal invariant and
//! panics; it is never returned as an error.
//!
//! # Logging
//!
//! The multiplier emits `tracing` spans and events. No subscriber is
//! installed by this crate.
//!
//! ```rust
//! use karatsuba_digits::{DigitString, multiply};
//!
//! assert_eq!(multiply("12", "34").unwrap(), "408");
//!
//! let a: DigitString = "00999".parse().unwrap();
//! let b = DigitString::from(2u8);
//! assert_eq!((&a * &b).as_str(), "1998");
//! ```

mod arith;
mod error;

pub mod digits;
pub mod karatsuba;

pub use digits::DigitString;
pub use error::Error;
pub use karatsuba::{KaratsubaParams, Multiplier, multiply};
