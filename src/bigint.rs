//! The signed arbitrary-precision integer type.

use crate::error::{Error, ErrorCode, Result};
use crate::math::{self, Limb};
use core::cmp::Ordering;

/// A signed integer with up to 30000 decimal digits.
///
/// The magnitude is stored as base-1000 limbs, least significant first,
/// with a separate sign flag. The representation is kept canonical at all
/// times: no most-significant zero limb survives any operation (except the
/// single-limb zero), and zero is never negative, however it was produced.
///
/// ```
/// use decint::BigInt;
///
/// let a: BigInt = "123456789012345678901234567890".parse()?;
/// let b = BigInt::from(1);
/// assert_eq!((a + b).to_string(), "123456789012345678901234567891");
/// # Ok::<(), decint::Error>(())
/// ```
///
/// Construction and arithmetic that would exceed the digit ceiling fail
/// with [`Error`] rather than producing a partial result; see the
/// `checked_*` methods for the non-panicking forms of the operators.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) negative: bool,
    pub(crate) limbs: Vec<Limb>,
}

impl Default for BigInt {
    /// The zero value.
    fn default() -> BigInt {
        BigInt {
            negative: false,
            limbs: vec![0],
        }
    }
}

impl BigInt {
    /// The sole constructor every operation funnels through.
    ///
    /// Strips most-significant zero limbs, maps the empty magnitude to the
    /// canonical single-limb zero, clears the sign of zero, and enforces
    /// the digit ceiling.
    pub(crate) fn from_sign_magnitude(negative: bool, mut limbs: Vec<Limb>) -> Result<BigInt> {
        math::normalize(&mut limbs);
        if limbs.len() > math::MAX_LIMBS {
            return Err(Error::new(ErrorCode::Overflow));
        }
        if limbs.is_empty() {
            return Ok(BigInt::default());
        }
        Ok(BigInt { negative, limbs })
    }

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// Returns true if the value is strictly negative. Zero is never
    /// negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            negative: false,
            limbs: self.limbs.clone(),
        }
    }

    /// The value with its sign flipped. Zero stays non-negative.
    pub(crate) fn negated(&self) -> BigInt {
        let mut result = self.clone();
        if !result.is_zero() {
            result.negative = !result.negative;
        }
        result
    }

    /// Adds two values, failing with `Overflow` if the sum would exceed
    /// the digit ceiling.
    ///
    /// When the operand signs differ this is a magnitude subtraction: the
    /// result takes the sign of the operand with the larger magnitude.
    pub fn checked_add(&self, other: &BigInt) -> Result<BigInt> {
        if self.negative == other.negative {
            let magnitude = math::add(&self.limbs, &other.limbs);
            return BigInt::from_sign_magnitude(self.negative, magnitude);
        }
        match math::compare(&self.limbs, &other.limbs) {
            Ordering::Less => {
                let magnitude = math::sub(&other.limbs, &self.limbs);
                BigInt::from_sign_magnitude(other.negative, magnitude)
            }
            _ => {
                let magnitude = math::sub(&self.limbs, &other.limbs);
                BigInt::from_sign_magnitude(self.negative, magnitude)
            }
        }
    }

    /// Subtracts `other` from `self`, as `self + (-other)`.
    pub fn checked_sub(&self, other: &BigInt) -> Result<BigInt> {
        self.checked_add(&other.negated())
    }

    /// Multiplies two values, failing with `Overflow` if the product would
    /// exceed the digit ceiling.
    ///
    /// The result sign is the XOR of the operand signs; a zero product is
    /// forced non-negative.
    pub fn checked_mul(&self, other: &BigInt) -> Result<BigInt> {
        let magnitude = math::long_mul(&self.limbs, &other.limbs);
        BigInt::from_sign_magnitude(self.negative != other.negative, magnitude)
    }

    /// Divides `self` by `other`, truncating toward zero.
    ///
    /// Fails with `DivisionByZero` if `other` is zero.
    pub fn checked_div(&self, other: &BigInt) -> Result<BigInt> {
        if other.is_zero() {
            return Err(Error::new(ErrorCode::DivisionByZero));
        }
        let magnitude = math::div(&self.limbs, &other.limbs);
        BigInt::from_sign_magnitude(self.negative != other.negative, magnitude)
    }

    /// The remainder of truncating division, derived as
    /// `self - (self / other) * other` so that
    /// `a == (a / b) * b + (a % b)` holds by construction.
    ///
    /// Fails with `DivisionByZero` if `other` is zero.
    pub fn checked_rem(&self, other: &BigInt) -> Result<BigInt> {
        let quotient = self.checked_div(other)?;
        let product = quotient.checked_mul(other)?;
        self.checked_sub(&product)
    }

    /// Raises `self` to the power `exponent` by repeated multiplication.
    ///
    /// Runs in time linear in the numeric value of `exponent`, not its
    /// digit count. Any value to the power zero is one, including zero.
    /// Fails with `Overflow` if an intermediate product would exceed the
    /// digit ceiling.
    ///
    /// # Panics
    ///
    /// Panics if `exponent` is negative.
    pub fn pow(&self, exponent: &BigInt) -> Result<BigInt> {
        assert!(
            !exponent.is_negative(),
            "pow requires a non-negative exponent"
        );
        if exponent.is_zero() {
            return Ok(BigInt::from(1));
        }
        let mut result = self.clone();
        let mut i = BigInt::from(2);
        while i <= *exponent {
            result = result.checked_mul(self)?;
            i += 1;
        }
        Ok(result)
    }

    /// Builds a value from a machine-width magnitude. A 64-bit magnitude
    /// occupies at most seven limbs, nowhere near the digit ceiling.
    fn from_u64_magnitude(negative: bool, mut value: u64) -> BigInt {
        let mut limbs = Vec::new();
        while value > 0 {
            limbs.push((value % u64::from(math::RADIX)) as Limb);
            value /= u64::from(math::RADIX);
        }
        BigInt::from_sign_magnitude(negative, limbs).unwrap()
    }
}

// Total order: negative values sort before non-negative ones; within a
// sign, the magnitude comparison decides, inverted on the negative side.
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => math::compare(&self.limbs, &other.limbs),
            (true, true) => math::compare(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! impl_from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(value: $ty) -> Self {
                    BigInt::from_u64_magnitude(value < 0, u64::from(value.unsigned_abs()))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(value: $ty) -> Self {
                    BigInt::from_u64_magnitude(false, value as u64)
                }
            }
        )*
    };
}

impl_from_signed!(i8 i16 i32 i64);
impl_from_unsigned!(u8 u16 u32 u64 usize);

impl From<isize> for BigInt {
    #[inline]
    fn from(value: isize) -> Self {
        BigInt::from_u64_magnitude(value < 0, value.unsigned_abs() as u64)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BigInt {
    /// Serializes as the canonical decimal string, so the value survives
    /// formats whose native integers are machine-width.
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> serde::de::Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a decimal string or an integer")
            }

            #[inline]
            fn visit_i64<E>(self, value: i64) -> core::result::Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            #[inline]
            fn visit_u64<E>(self, value: u64) -> core::result::Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            fn visit_str<E>(self, value: &str) -> core::result::Result<BigInt, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_any(BigIntVisitor)
    }
}
