//! Conversions between `DigitString` and native unsigned integers
//!
//! Native integers always fit into a digit string, so those conversions
//! are infallible. The reverse direction succeeds only when the decimal
//! value fits the target type; otherwise `Err(())` is returned, matching
//! the other primitive conversions in this crate.

use crate::digits::DigitString;

/// Converts a `u128` into its decimal digits.
///
/// Every narrower unsigned type goes through this conversion.
impl From<u128> for DigitString {
    fn from(value: u128) -> Self {
        if value == 0 {
            return DigitString::zero();
        }

        let mut digits = Vec::with_capacity(39);
        let mut value = value;

        while value > 0 {
            digits.push(b'0' + (value % 10) as u8);
            value /= 10;
        }

        digits.reverse();
        DigitString::from_digits(digits)
    }
}

macro_rules! from_narrow_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DigitString {
                fn from(value: $ty) -> Self {
                    DigitString::from(value as u128)
                }
            }
        )*
    };
}

from_narrow_unsigned!(u8, u16, u32, u64, usize);

/// Attempts to convert a `DigitString` into a `u128`.
///
/// Fails if the value exceeds `u128::MAX`.
impl TryFrom<&DigitString> for u128 {
    type Error = ();

    fn try_from(value: &DigitString) -> Result<Self, Self::Error> {
        value.as_bytes().iter().try_fold(0u128, |acc, &d| {
            acc.checked_mul(10)
                .and_then(|acc| acc.checked_add(u128::from(d - b'0')))
                .ok_or(())
        })
    }
}

/// Attempts to convert a `DigitString` into a `u64`.
///
/// Fails if the value exceeds `u64::MAX`.
impl TryFrom<&DigitString> for u64 {
    type Error = ();

    fn try_from(value: &DigitString) -> Result<Self, Self::Error> {
        let wide = u128::try_from(value)?;

        u64::try_from(wide).map_err(|_| ())
    }
}
