//! Schoolbook long multiplication.
//!
//! O(n·m) digit-by-digit multiplication, kept as an independent baseline
//! for cross-checking and benchmarking the Karatsuba path. The multiplier
//! itself never calls into this module.

use crate::digits::DigitString;

/// Multiplies two digit strings by accumulating every digit pair.
pub fn schoolbook(a: &DigitString, b: &DigitString) -> DigitString {
    let lhs = a.as_bytes();
    let rhs = b.as_bytes();

    // Little-endian column sums; a product has at most len(a) + len(b) digits.
    let mut columns = vec![0u64; lhs.len() + rhs.len()];

    for (i, &da) in lhs.iter().rev().enumerate() {
        for (j, &db) in rhs.iter().rev().enumerate() {
            columns[i + j] += u64::from(da - b'0') * u64::from(db - b'0');
        }
    }

    for i in 0..columns.len() - 1 {
        let carry = columns[i] / 10;
        columns[i] %= 10;
        columns[i + 1] += carry;
    }

    DigitString::from_digits(columns.iter().rev().map(|&c| b'0' + c as u8).collect())
}
