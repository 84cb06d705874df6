use decint::{BigInt, Category, ErrorCode};

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn roundtrip() {
    for s in [
        "0",
        "1",
        "-1",
        "7",
        "999",
        "1000",
        "-1000",
        "123456",
        "100000000000000000000",
        "123456789012345678901234567890",
        "-999999999999999999999999999999",
    ] {
        assert_eq!(big(s).to_string(), s);
    }
}

#[test]
fn interior_zero_limbs_are_padded() {
    // Limbs below the most significant one print zero-padded to three
    // digits, so no digits go missing around zero-valued groups.
    assert_eq!(big("1000001").to_string(), "1000001");
    assert_eq!(big("1000000").to_string(), "1000000");
    assert_eq!(big("5000010002").to_string(), "5000010002");
}

#[test]
fn canonicalizes_sign_and_leading_zeros() {
    assert_eq!(big("+42").to_string(), "42");
    assert_eq!(big("0042").to_string(), "42");
    assert_eq!(big("-0042").to_string(), "-42");
    assert_eq!(big("+000").to_string(), "0");
    assert_eq!(big("00000000000000000001").to_string(), "1");
}

#[test]
fn zero_normalization() {
    let from_int = BigInt::from(0);
    for s in ["0", "+0", "-0", "000", "-000"] {
        let parsed = big(s);
        assert_eq!(parsed, from_int, "{:?} did not normalize", s);
        assert!(parsed.is_zero());
        assert!(!parsed.is_negative());
        assert_eq!(parsed.to_string(), "0");
    }
}

#[test]
fn machine_integer_conversions() {
    assert_eq!(BigInt::from(0_i64).to_string(), "0");
    assert_eq!(BigInt::from(-1_i8).to_string(), "-1");
    assert_eq!(BigInt::from(255_u8).to_string(), "255");
    assert_eq!(BigInt::from(1_000_000_u32).to_string(), "1000000");
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(i64::MAX).to_string(), "9223372036854775807");
    assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInt::from(usize::MIN).to_string(), "0");
}

#[test]
fn conversions_agree_with_parsing() {
    assert_eq!(BigInt::from(-9000), big("-9000"));
    assert_eq!(BigInt::from(123456789_u64), big("123456789"));
}

#[test]
fn rejects_empty_and_lone_signs() {
    for s in ["", "+", "-"] {
        let err = s.parse::<BigInt>().unwrap_err();
        assert!(err.is_malformed_input(), "{:?} should be malformed", s);
        assert_eq!(*err.code(), ErrorCode::ExpectedDigit);
    }
    assert_eq!("".parse::<BigInt>().unwrap_err().offset(), 1);
    assert_eq!("+".parse::<BigInt>().unwrap_err().offset(), 2);
}

#[test]
fn rejects_non_digit_characters() {
    let cases = [
        ("abc", 'a', 1),
        ("12x3", 'x', 3),
        ("12 3", ' ', 3),
        (" 12", ' ', 1),
        ("12.5", '.', 3),
        ("--5", '-', 2),
        ("+-5", '-', 2),
        ("12-", '-', 3),
        ("1_000", '_', 2),
    ];
    for (input, ch, offset) in cases {
        let err = input.parse::<BigInt>().unwrap_err();
        assert_eq!(
            *err.code(),
            ErrorCode::UnexpectedCharacter(ch),
            "wrong code for {:?}",
            input
        );
        assert_eq!(err.offset(), offset, "wrong offset for {:?}", input);
        assert_eq!(err.classify(), Category::MalformedInput);
    }
}

#[test]
fn rejects_non_ascii_digits() {
    // Unicode digits are digits, but not ASCII digits.
    let err = "١٢٣".parse::<BigInt>().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::UnexpectedCharacter('١'));
    assert!(err.is_malformed_input());
}

#[test]
fn error_display_includes_offset() {
    let err = "12x3".parse::<BigInt>().unwrap_err();
    assert_eq!(err.to_string(), "unexpected character `x` at offset 3");

    let err = "".parse::<BigInt>().unwrap_err();
    assert_eq!(err.to_string(), "expected a decimal digit at offset 1");

    let err = big("1").checked_div(&big("0")).unwrap_err();
    assert_eq!(err.to_string(), "division by zero");
}

#[test]
fn digit_ceiling() {
    // Exactly 30000 digits parses.
    let max = "9".repeat(30000);
    assert!(max.parse::<BigInt>().is_ok());

    // One more digit fails with Overflow, not MalformedInput.
    let over = format!("1{}", "0".repeat(30000));
    let err = over.parse::<BigInt>().unwrap_err();
    assert!(err.is_overflow());
    assert_eq!(*err.code(), ErrorCode::Overflow);
}

#[test]
fn leading_zeros_do_not_count_toward_ceiling() {
    let padded = format!("{}{}", "0".repeat(500), "9".repeat(30000));
    let n = padded.parse::<BigInt>().unwrap();
    assert_eq!(n.to_string().len(), 30000);
}

#[test]
fn crate_level_entry_points() {
    let n = decint::from_str("-123").unwrap();
    assert_eq!(decint::to_string(&n), "-123");
    assert!(decint::from_str("nope").is_err());
}
