use karatsuba_digits::{DigitString, Error};

#[test]
fn parse_strips_leading_zeros() {
    let d: DigitString = "00042".parse().unwrap();
    assert_eq!(d.as_str(), "42");
    assert_eq!(d.len(), 2);
}

#[test]
fn parse_all_zeros_is_zero() {
    let d = DigitString::parse("0000").unwrap();
    assert_eq!(d, DigitString::zero());
    assert!(d.is_zero());
    assert_eq!(d.to_string(), "0");
}

#[test]
fn parse_rejects_empty_input() {
    let err = DigitString::parse("").unwrap_err();
    assert!(matches!(err, Error::InvalidDigitString { .. }));
}

#[test]
fn parse_rejects_non_digits() {
    for bad in ["12a4", "-5", "+5", " 12", "12 ", "1_000", "1.5", "٣"] {
        let err = DigitString::parse(bad).unwrap_err();
        assert!(
            matches!(err, Error::InvalidDigitString { .. }),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn invalid_digit_string_reports_position() {
    let err = DigitString::try_from("12x").unwrap_err();
    let msg = err.to_string();

    assert!(msg.contains("'x'"), "{msg}");
    assert!(msg.contains("byte 2"), "{msg}");
}

#[test]
fn from_native_integers() {
    assert_eq!(DigitString::from(0u8).as_str(), "0");
    assert_eq!(DigitString::from(255u8).as_str(), "255");
    assert_eq!(DigitString::from(12345u16).as_str(), "12345");
    assert_eq!(DigitString::from(1234567u32).as_str(), "1234567");
    assert_eq!(
        DigitString::from(u64::MAX).as_str(),
        "18446744073709551615"
    );
    assert_eq!(
        DigitString::from(u128::MAX).as_str(),
        "340282366920938463463374607431768211455"
    );
    assert_eq!(DigitString::from(42usize).as_str(), "42");
}

#[test]
fn try_into_native_integers() {
    let d = DigitString::parse("18446744073709551615").unwrap();
    assert_eq!(u64::try_from(&d), Ok(u64::MAX));

    let too_big = DigitString::parse("18446744073709551616").unwrap();
    assert!(u64::try_from(&too_big).is_err());
    assert_eq!(u128::try_from(&too_big), Ok(u64::MAX as u128 + 1));

    let huge = DigitString::parse("340282366920938463463374607431768211456").unwrap();
    assert!(u128::try_from(&huge).is_err());
}

#[test]
fn ordering_is_numeric() {
    let nine = DigitString::from(9u8);
    let ten = DigitString::from(10u8);
    let eleven = DigitString::from(11u8);

    assert!(nine < ten);
    assert!(ten < eleven);
    assert!(DigitString::zero() < DigitString::one());
    assert_eq!(
        DigitString::parse("0100").unwrap().cmp(&DigitString::from(100u8)),
        std::cmp::Ordering::Equal
    );
}

#[test]
fn string_conversions() {
    let d = DigitString::parse("0750").unwrap();
    let s: String = d.clone().into();

    assert_eq!(s, "750");
    assert_eq!(AsRef::<str>::as_ref(&d), "750");
    assert_eq!(d.into_string(), "750");
    assert_eq!(DigitString::default(), DigitString::zero());
}
