//! Arithmetic methods and operator traits for `DigitString`
//!
//! These wrap the raw-buffer primitives in the crate-private `arith` module and the
//! Karatsuba multiplier so that callers holding validated values never
//! have to touch digit buffers directly.
//!
//! Only infallible operations get operator traits. Subtraction can fail
//! with [`Error::NegativeResult`], so it is exposed as
//! [`DigitString::checked_sub`] instead of `Sub`.

use std::ops::{Add, Mul};

use crate::arith;
use crate::digits::DigitString;
use crate::error::Error;
use crate::karatsuba;

impl DigitString {
    /// Returns `self + rhs`.
    pub fn add(&self, rhs: &DigitString) -> DigitString {
        DigitString::from_digits(arith::add(self.as_bytes(), rhs.as_bytes()))
    }

    /// Returns `self - rhs`.
    ///
    /// # Errors
    /// [`Error::NegativeResult`] if `rhs` is numerically greater than `self`.
    pub fn checked_sub(&self, rhs: &DigitString) -> Result<DigitString, Error> {
        arith::subtract(self.as_bytes(), rhs.as_bytes()).map(DigitString::from_digits)
    }

    /// Returns `self × 10^places`.
    pub fn shift_left(&self, places: usize) -> DigitString {
        DigitString::from_digits(arith::shift_left(self.as_bytes(), places))
    }

    /// Returns `self × rhs` using Karatsuba multiplication with default
    /// parameters and no operand length limit.
    pub fn multiply(&self, rhs: &DigitString) -> DigitString {
        karatsuba::Multiplier::default().product(self, rhs).value
    }
}

impl Add<&DigitString> for &DigitString {
    type Output = DigitString;

    fn add(self, rhs: &DigitString) -> Self::Output {
        DigitString::add(self, rhs)
    }
}

impl Add for DigitString {
    type Output = DigitString;

    fn add(self, rhs: DigitString) -> Self::Output {
        DigitString::add(&self, &rhs)
    }
}

impl Mul<&DigitString> for &DigitString {
    type Output = DigitString;

    fn mul(self, rhs: &DigitString) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul for DigitString {
    type Output = DigitString;

    fn mul(self, rhs: DigitString) -> Self::Output {
        self.multiply(&rhs)
    }
}
