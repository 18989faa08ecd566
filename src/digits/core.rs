//! Decimal digit-string value type
//!
//! This module defines `DigitString`, an owned, immutable decimal
//! representation of a non-negative integer, together with the two
//! normalization helpers every other component builds on.
//!
//! Digits are stored as ASCII bytes, **most significant digit first**,
//! which is also the order they are read and printed in.
//!
//! Two layers coexist:
//! - `DigitString` always satisfies the normalization invariant (no leading
//!   zero unless the value is exactly `"0"`).
//! - Raw digit buffers (`&[u8]` / `Vec<u8>`) are the transient working form
//!   used inside the arithmetic primitives. They may carry leading zeros
//!   (split halves, padded operands) and are never exposed as values.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::Error;

/// Non-negative integer stored as normalized decimal digits.
///
/// Every constructor either validates its input or produces digits
/// arithmetically, so a `DigitString` is never empty, never contains a
/// non-digit character and never starts with `'0'` unless it is `"0"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DigitString(pub(crate) String);

impl DigitString {
    /// The value zero.
    pub fn zero() -> Self {
        Self(String::from("0"))
    }

    /// The value one.
    pub fn one() -> Self {
        Self(String::from("1"))
    }

    /// Validates `input` and normalizes away any leading zeros.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDigitString`] if `input` is empty or contains
    /// anything other than ASCII `'0'..='9'`. Signs, separators and
    /// surrounding whitespace are all rejected.
    pub fn parse(input: &str) -> Result<Self, Error> {
        validate(input)?;

        Ok(Self::from_digits(normalize(input.as_bytes())))
    }

    /// Wraps a raw digit buffer produced by the arithmetic primitives.
    ///
    /// The buffer is normalized first, so callers may hand over padded or
    /// otherwise unstripped digits.
    pub(crate) fn from_digits(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(u8::is_ascii_digit));

        let digits = normalize_owned(digits);
        Self(digits.into_iter().map(char::from).collect())
    }

    /// Borrows the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Borrows the digits as ASCII bytes, most significant first.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Consumes the value and returns the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of decimal digits (`1` for zero).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a digit string holds at least one digit.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }
}

impl Default for DigitString {
    fn default() -> Self {
        Self::zero()
    }
}

/// Numeric ordering.
///
/// Normalized digit strings compare by length first; equal lengths compare
/// lexicographically, which matches numeric order for ASCII digits.
impl Ord for DigitString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.as_bytes().cmp(other.as_bytes()))
    }
}

impl PartialOrd for DigitString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for DigitString {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for DigitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DigitString {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DigitString> for String {
    fn from(value: DigitString) -> Self {
        value.0
    }
}

/// Rejects empty input and any character outside `'0'..='9'`.
fn validate(input: &str) -> Result<(), Error> {
    if input.is_empty() {
        return Err(Error::InvalidDigitString {
            input: String::new(),
            reason: String::from("empty input"),
        });
    }

    if let Some((position, found)) = input.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(Error::InvalidDigitString {
            input: input.to_owned(),
            reason: format!("unexpected character {found:?} at byte {position}"),
        });
    }

    Ok(())
}

/// Strips leading `'0'` digits from a raw digit buffer.
///
/// An all-zero (or empty) buffer normalizes to `"0"`.
pub(crate) fn normalize(digits: &[u8]) -> Vec<u8> {
    match digits.iter().position(|&d| d != b'0') {
        Some(first) => digits[first..].to_vec(),
        None => vec![b'0'],
    }
}

/// In-place variant of [`normalize`] for buffers the caller already owns.
pub(crate) fn normalize_owned(mut digits: Vec<u8>) -> Vec<u8> {
    match digits.iter().position(|&d| d != b'0') {
        Some(0) => digits,
        Some(first) => {
            digits.drain(..first);
            digits
        }
        None => vec![b'0'],
    }
}

/// Left-pads two raw digit buffers with `'0'` to the longer one's length.
///
/// The padded buffers deliberately break the normalization invariant; they
/// exist only long enough for the multiplier to split them at a common
/// position.
pub(crate) fn pad_to_equal_length(a: &[u8], b: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let width = a.len().max(b.len());

    (pad_left(a, width), pad_left(b, width))
}

fn pad_left(digits: &[u8], width: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(width);
    out.resize(width - digits.len(), b'0');
    out.extend_from_slice(digits);

    out
}
