//! Parsing decimal text into big integers.

use crate::bigint::BigInt;
use crate::error::{Error, ErrorCode, Result};
use crate::math::{self, Limb};
use core::str::FromStr;

/// Parses a [`BigInt`] from its decimal text representation.
///
/// The accepted grammar is an optional `+` or `-` sign followed by one or
/// more ASCII digits, and nothing else. Redundant leading zeros are
/// stripped, and `-0` normalizes to the one non-negative zero.
///
/// ```
/// let n = decint::from_str("-000123")?;
/// assert_eq!(n.to_string(), "-123");
/// # Ok::<(), decint::Error>(())
/// ```
///
/// # Errors
///
/// Fails with a `MalformedInput` error if the input is empty, is a lone
/// sign, or contains any character that is not an ASCII digit, and with
/// `Overflow` if the value needs more than 30000 decimal digits after
/// leading zeros are stripped.
pub fn from_str(s: &str) -> Result<BigInt> {
    s.parse()
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<BigInt> {
        let bytes = s.as_bytes();
        let (negative, digits_start) = match bytes.first() {
            Some(b'-') => (true, 1),
            Some(b'+') => (false, 1),
            _ => (false, 0),
        };

        let digits = &bytes[digits_start..];
        if digits.is_empty() {
            return Err(Error::parse(ErrorCode::ExpectedDigit, digits_start + 1));
        }
        for (i, &byte) in digits.iter().enumerate() {
            if !byte.is_ascii_digit() {
                // Every byte before this one is an ASCII digit, so this
                // index is a character boundary.
                let ch = s[digits_start + i..].chars().next().unwrap();
                return Err(Error::parse(
                    ErrorCode::UnexpectedCharacter(ch),
                    digits_start + i + 1,
                ));
            }
        }

        // Split into groups of three digits from the least significant
        // end; the most significant group may be shorter.
        let mut limbs = Vec::with_capacity(digits.len() / math::DIGITS_PER_LIMB + 1);
        for group in digits.rchunks(math::DIGITS_PER_LIMB) {
            let mut limb: Limb = 0;
            for &byte in group {
                limb = limb * 10 + Limb::from(byte - b'0');
            }
            limbs.push(limb);
        }

        BigInt::from_sign_magnitude(negative, limbs)
    }
}
