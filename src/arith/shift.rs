/// Multiplies a raw digit buffer by `10^places` by appending zeros.
///
/// A zero value stays `"0"`: no trailing zeros are appended to it, so the
/// result remains normalized.
pub(crate) fn shift_left(digits: &[u8], places: usize) -> Vec<u8> {
    if digits.iter().all(|&d| d == b'0') {
        return vec![b'0'];
    }

    let mut out = Vec::with_capacity(digits.len() + places);
    out.extend_from_slice(digits);
    out.resize(digits.len() + places, b'0');

    out
}

#[cfg(test)]
mod tests {
    use super::shift_left;

    #[test]
    fn appends_zeros() {
        assert_eq!(shift_left(b"5678", 2), b"567800");
        assert_eq!(shift_left(b"5678", 0), b"5678");
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(shift_left(b"0", 5), b"0");
        assert_eq!(shift_left(b"000", 2), b"0");
    }
}
