use crate::digits::normalize_owned;
use crate::error::Error;

/// Subtracts raw digit buffer `b` from `a`.
///
/// Digits are processed from least to most significant with a borrow.
/// Positions past the end of either operand read as `0`, so leading zeros
/// on either side are harmless.
///
/// # Errors
/// [`Error::NegativeResult`] if a borrow is still pending once every digit
/// has been consumed, i.e. `a < b`. The result is never clamped to zero.
pub(crate) fn subtract(a: &[u8], b: &[u8]) -> Result<Vec<u8>, Error> {
    let width = a.len().max(b.len());
    let mut out = Vec::with_capacity(width);

    let mut lhs = a.iter().rev();
    let mut rhs = b.iter().rev();
    let mut borrow = 0i8;

    for _ in 0..width {
        let l = lhs.next().map_or(0, |&d| (d - b'0') as i8);
        let r = rhs.next().map_or(0, |&d| (d - b'0') as i8);
        let mut diff = l - r - borrow;

        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }

        out.push(b'0' + diff as u8);
    }

    if borrow != 0 {
        return Err(Error::NegativeResult);
    }

    out.reverse();
    Ok(normalize_owned(out))
}

#[cfg(test)]
mod tests {
    use super::subtract;
    use crate::error::Error;

    #[test]
    fn borrow_chain() {
        assert_eq!(subtract(b"1000", b"1").unwrap(), b"999");
        assert_eq!(subtract(b"1234", b"1234").unwrap(), b"0");
    }

    #[test]
    fn leading_zeros_on_either_side() {
        assert_eq!(subtract(b"42", b"0007").unwrap(), b"35");
        assert_eq!(subtract(b"0042", b"7").unwrap(), b"35");
    }

    #[test]
    fn underflow_is_reported() {
        assert_eq!(subtract(b"99", b"100"), Err(Error::NegativeResult));
        assert_eq!(subtract(b"0", b"1"), Err(Error::NegativeResult));
    }
}
