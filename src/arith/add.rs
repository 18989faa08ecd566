use crate::digits::normalize_owned;

/// Adds two raw digit buffers.
///
/// Digits are processed from least to most significant with a carry of
/// `0` or `1`. Positions past the end of the shorter operand read as `0`,
/// and a final carry becomes the new leading digit. The result is
/// normalized, so padded inputs are accepted.
pub(crate) fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let width = a.len().max(b.len());
    let mut out = Vec::with_capacity(width + 1);

    let mut lhs = a.iter().rev();
    let mut rhs = b.iter().rev();
    let mut carry = 0u8;

    for _ in 0..width {
        let l = lhs.next().map_or(0, |&d| d - b'0');
        let r = rhs.next().map_or(0, |&d| d - b'0');
        let sum = l + r + carry;

        out.push(b'0' + sum % 10);
        carry = sum / 10;
    }

    if carry > 0 {
        out.push(b'0' + carry);
    }

    out.reverse();
    normalize_owned(out)
}

#[cfg(test)]
mod tests {
    use super::add;

    #[test]
    fn unequal_lengths() {
        assert_eq!(add(b"7", b"12345"), b"12352");
        assert_eq!(add(b"12345", b"7"), b"12352");
    }

    #[test]
    fn final_carry_becomes_leading_digit() {
        assert_eq!(add(b"999", b"1"), b"1000");
        assert_eq!(add(b"9", b"9"), b"18");
    }

    #[test]
    fn padded_operands_are_normalized() {
        assert_eq!(add(b"0003", b"04"), b"7");
        assert_eq!(add(b"00", b"000"), b"0");
    }
}
