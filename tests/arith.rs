use karatsuba_digits::{DigitString, Error};

fn ds(s: &str) -> DigitString {
    DigitString::parse(s).unwrap()
}

#[test]
fn add_equal_lengths() {
    assert_eq!(ds("5678").add(&ds("1234")), ds("6912"));
}

#[test]
fn add_unequal_lengths() {
    assert_eq!(ds("7").add(&ds("12345")), ds("12352"));
    assert_eq!(ds("12345").add(&ds("7")), ds("12352"));
}

#[test]
fn add_final_carry_becomes_leading_digit() {
    assert_eq!(ds("999").add(&ds("1")), ds("1000"));
    assert_eq!(ds("9").add(&ds("9")), ds("18"));
}

#[test]
fn add_zero_operands() {
    assert_eq!(ds("000").add(&ds("0")), DigitString::zero());
    assert_eq!(ds("0").add(&ds("42")), ds("42"));
}

#[test]
fn subtract_with_borrow_chain() {
    assert_eq!(ds("1000").checked_sub(&ds("1")).unwrap(), ds("999"));
    assert_eq!(ds("5678").checked_sub(&ds("1234")).unwrap(), ds("4444"));
}

#[test]
fn subtract_to_zero() {
    assert_eq!(ds("1234").checked_sub(&ds("1234")).unwrap(), DigitString::zero());
}

#[test]
fn subtract_fails_on_negative_result() {
    assert_eq!(ds("1").checked_sub(&ds("2")), Err(Error::NegativeResult));
    assert_eq!(ds("99").checked_sub(&ds("100")), Err(Error::NegativeResult));
    assert_eq!(ds("0").checked_sub(&ds("1")), Err(Error::NegativeResult));
}

#[test]
fn checked_sub_error_is_distinct_from_bad_input() {
    let err = ds("3").checked_sub(&ds("4")).unwrap_err();

    assert_eq!(err, Error::NegativeResult);
    assert!(!matches!(err, Error::InvalidDigitString { .. }));
}

#[test]
fn shift_left_appends_zeros() {
    assert_eq!(ds("5678").shift_left(2), ds("567800"));
    assert_eq!(ds("5678").shift_left(0), ds("5678"));
}

#[test]
fn shift_left_keeps_zero_normalized() {
    let shifted = ds("0").shift_left(5);

    assert_eq!(shifted, DigitString::zero());
    assert_eq!(shifted.as_str(), "0");
}

#[test]
fn non_digit_bytes_never_reach_arithmetic() {
    // Each of these once produced a wrong digit string or an overflow panic
    // when fed straight into the buffer primitives.
    for bad in ["1a", " 1", "abc", "0x"] {
        assert!(
            matches!(DigitString::parse(bad), Err(Error::InvalidDigitString { .. })),
            "{bad:?} should be rejected"
        );
    }

    assert_eq!(ds("11").add(&ds("1")), ds("12"));
    assert_eq!(ds("100").shift_left(2), ds("10000"));
}

#[test]
fn add_operator() {
    assert_eq!(&ds("5678") + &ds("1234"), ds("6912"));
    assert_eq!(ds("1") + ds("99"), ds("100"));
}
