//! Digit-buffer arithmetic primitives
//!
//! This module implements the three non-recursive operations the
//! Karatsuba multiplier combines its partial products with:
//!
//! - [`add`]: schoolbook addition with carry
//! - [`subtract`]: schoolbook subtraction with borrow, failing on underflow
//! - [`shift_left`]: multiplication by a power of ten
//!
//! All three work on **raw digit buffers**: ASCII `'0'..='9'` bytes, most
//! significant first, possibly carrying leading zeros. They allocate a
//! fresh buffer for their result and never modify their inputs.
//!
//! Nothing here re-checks that the bytes are digits, so the module is
//! crate-private. Outside callers go through the `DigitString` methods,
//! whose operands were validated on construction.

mod add;
mod shift;
mod sub;

pub(crate) use add::add;
pub(crate) use shift::shift_left;
pub(crate) use sub::subtract;
