//! Karatsuba multiplication over decimal digit strings.
//!
//! Given operands padded to a common length `n`, each recursion level
//! splits them at `n - m` with `m = ceil(n / 2)`:
//!
//! ```text
//! x = x_high · 10^m + x_low
//! y = y_high · 10^m + y_low
//! ```
//!
//! and computes exactly **three** sub-products:
//!
//! ```text
//! z0    = x_low  · y_low
//! z2    = x_high · y_high
//! z_mid = (x_low + x_high) · (y_low + y_high)
//! ```
//!
//! The cross term is recovered without a fourth multiplication as
//! `z1 = z_mid - z2 - z0`, and the product is reassembled as
//! `z2 · 10^(2m) + z1 · 10^m + z0`. This gives
//! `T(n) = 3·T(n/2) + O(n) = O(n^log2(3))`.
//!
//! Operands are re-padded at every level, not once at the top, so the split
//! point of each frame depends only on the two buffers that frame receives.
//! The base case is a padded length of one digit.
//!
//! ## Failure model
//!
//! Only malformed input is a caller error. `z_mid ≥ z2 + z0` holds
//! algebraically, so a `NegativeResult` while computing `z1` means the
//! padding or splitting is broken. That is reported as a panic, never as
//! `Err`, so tests can tell bad input apart from a broken algorithm.

use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use rayon::join;
use tracing::{debug, error};

use super::params::KaratsubaParams;
use crate::arith::{add, shift_left, subtract};
use crate::digits::{DigitString, pad_to_equal_length};
use crate::error::Error;

/// Counters describing one top-level multiplication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecursionStats {
    /// Total recursive frames, including the root.
    pub calls: usize,
    /// Frames that hit the single-digit base case.
    pub base_cases: usize,
    /// Deepest recursion level reached; the root is level 0.
    pub max_depth: usize,
}

/// A product together with the shape of the recursion that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub value: DigitString,
    pub stats: RecursionStats,
}

/// Karatsuba multiplier bound to a validated set of parameters.
#[derive(Clone, Debug, Default)]
pub struct Multiplier {
    params: KaratsubaParams,
}

impl Multiplier {
    /// Creates a multiplier after validating `params`.
    ///
    /// # Errors
    /// [`Error::InvalidParams`] if a parameter is out of range.
    pub fn new(params: KaratsubaParams) -> Result<Self, Error> {
        params.validate()?;

        Ok(Self { params })
    }

    pub fn params(&self) -> &KaratsubaParams {
        &self.params
    }

    /// Multiplies two decimal strings.
    ///
    /// Both inputs are validated and normalized once, up front. Leading
    /// zeros are accepted (`"00042"` reads as `42`); signs, separators and
    /// whitespace are not.
    ///
    /// # Errors
    /// - [`Error::InvalidDigitString`] for empty or non-decimal input.
    /// - [`Error::OperandTooLarge`] if `max_digits` is set and exceeded.
    pub fn multiply(&self, x: &str, y: &str) -> Result<String, Error> {
        let x = DigitString::parse(x)?;
        let y = DigitString::parse(y)?;

        self.multiply_digits(&x, &y).map(DigitString::into_string)
    }

    /// Multiplies two already validated digit strings.
    ///
    /// # Errors
    /// [`Error::OperandTooLarge`] if `max_digits` is set and exceeded.
    pub fn multiply_digits(&self, x: &DigitString, y: &DigitString) -> Result<DigitString, Error> {
        self.multiply_with_stats(x, y).map(|product| product.value)
    }

    /// Like [`multiply_digits`](Self::multiply_digits), also reporting how
    /// the recursion unfolded.
    pub fn multiply_with_stats(&self, x: &DigitString, y: &DigitString) -> Result<Product, Error> {
        if let Some(limit) = self.params.max_digits {
            let digits = x.len().max(y.len());

            if digits > limit {
                return Err(Error::OperandTooLarge { digits, limit });
            }
        }

        Ok(self.product(x, y))
    }

    /// Runs the recursion on two validated operands. Never fails; the
    /// length limit is checked by the callers that honor it.
    #[tracing::instrument(skip_all, name = "Karatsuba.multiply", fields(x_digits = x.len(), y_digits = y.len()))]
    pub(crate) fn product(&self, x: &DigitString, y: &DigitString) -> Product {
        debug!("multiplication started");

        let ctx = Context::new(&self.params);
        let digits = karatsuba(x.as_bytes(), y.as_bytes(), 0, &ctx);
        let result = Product {
            value: DigitString::from_digits(digits),
            stats: ctx.into_stats(),
        };

        debug!(
            digits = result.value.len(),
            calls = result.stats.calls,
            base_cases = result.stats.base_cases,
            max_depth = result.stats.max_depth,
            "multiplication finished"
        );

        result
    }
}

/// Multiplies two decimal strings with default parameters.
///
/// # Errors
/// [`Error::InvalidDigitString`] if either input is empty or contains a
/// character outside `'0'..='9'`.
///
/// # Example
///
/// ```rust
/// assert_eq!(karatsuba_digits::multiply("1234", "5678").unwrap(), "7006652");
/// ```
pub fn multiply(x: &str, y: &str) -> Result<String, Error> {
    Multiplier::default().multiply(x, y)
}

/// State shared by every frame of one multiplication.
///
/// Counters are atomic so the same context can be borrowed by concurrent
/// sub-products.
struct Context {
    parallel_threshold: usize,
    calls: AtomicUsize,
    base_cases: AtomicUsize,
    max_depth: AtomicUsize,
}

impl Context {
    fn new(params: &KaratsubaParams) -> Self {
        Self {
            parallel_threshold: params.parallel_threshold,
            calls: AtomicUsize::new(0),
            base_cases: AtomicUsize::new(0),
            max_depth: AtomicUsize::new(0),
        }
    }

    fn enter(&self, depth: usize) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.max_depth.fetch_max(depth, Ordering::Relaxed);
    }

    /// Whether a frame of padded length `n` evaluates its sub-products
    /// concurrently. Always `false` without the `parallel` feature.
    fn forks(&self, n: usize) -> bool {
        cfg!(feature = "parallel") && n >= self.parallel_threshold
    }

    fn into_stats(self) -> RecursionStats {
        RecursionStats {
            calls: self.calls.into_inner(),
            base_cases: self.base_cases.into_inner(),
            max_depth: self.max_depth.into_inner(),
        }
    }
}

fn karatsuba(x: &[u8], y: &[u8], depth: usize, ctx: &Context) -> Vec<u8> {
    ctx.enter(depth);

    let (x, y) = pad_to_equal_length(x, y);
    let n = x.len();

    if n == 1 {
        ctx.base_cases.fetch_add(1, Ordering::Relaxed);
        return single_digit_product(x[0], y[0]);
    }

    let m = n.div_ceil(2);
    let (x_high, x_low) = x.split_at(n - m);
    let (y_high, y_low) = y.split_at(n - m);

    let x_sum = add(x_low, x_high);
    let y_sum = add(y_low, y_high);

    let [z0, z2, z_mid] = sub_products(
        [(x_low, y_low), (x_high, y_high), (x_sum.as_slice(), y_sum.as_slice())],
        depth + 1,
        ctx,
    );
    let z1 = middle_term(&z_mid, &z2, &z0);

    add(&add(&shift_left(&z2, 2 * m), &shift_left(&z1, m)), &z0)
}

/// Evaluates `[z0, z2, z_mid]`. The three are independent of each other.
fn sub_products(operands: [(&[u8], &[u8]); 3], depth: usize, ctx: &Context) -> [Vec<u8>; 3] {
    let [(x0, y0), (x2, y2), (xm, ym)] = operands;

    let z0 = || karatsuba(x0, y0, depth, ctx);
    let z2 = || karatsuba(x2, y2, depth, ctx);
    let z_mid = || karatsuba(xm, ym, depth, ctx);

    // high and low halves together span the padded frame
    if ctx.forks(x0.len() + x2.len()) {
        let (z0, (z2, z_mid)) = join(z0, || join(z2, z_mid));
        return [z0, z2, z_mid];
    }

    [z0(), z2(), z_mid()]
}

/// Sequential stand-in for `rayon::join`.
#[cfg(not(feature = "parallel"))]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (a(), b())
}

/// `z1 = z_mid - z2 - z0`.
///
/// # Panics
/// If either subtraction underflows, which cannot happen for correctly
/// split operands.
fn middle_term(z_mid: &[u8], z2: &[u8], z0: &[u8]) -> Vec<u8> {
    match subtract(z_mid, z2).and_then(|partial| subtract(&partial, z0)) {
        Ok(z1) => z1,
        Err(err) => {
            error!(
                z_mid = z_mid.len(),
                z2 = z2.len(),
                z0 = z0.len(),
                "karatsuba middle term underflowed"
            );
            panic!("internal invariant violated while recombining partial products: {err}");
        }
    }
}

/// Product of two ASCII digits as a one- or two-digit buffer (0..=81).
fn single_digit_product(a: u8, b: u8) -> Vec<u8> {
    let product = (a - b'0') * (b - b'0');

    if product < 10 {
        vec![b'0' + product]
    } else {
        vec![b'0' + product / 10, b'0' + product % 10]
    }
}
