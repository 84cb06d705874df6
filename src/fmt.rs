//! Formatting big integers as decimal text.

use crate::bigint::BigInt;
use crate::math::DIGITS_PER_LIMB;
use core::fmt::{self, Debug, Display};

/// Formats a [`BigInt`] as its canonical decimal string.
///
/// The output is a `-` sign for negative values followed by the digits
/// with no redundant leading zeros; zero prints as `0`, never `-0`.
/// Formatting then parsing is the identity.
///
/// ```
/// let n = decint::from_str("1000")?;
/// assert_eq!(decint::to_string(&(n / 3)), "333");
/// # Ok::<(), decint::Error>(())
/// ```
pub fn to_string(value: &BigInt) -> String {
    value.to_string()
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let mut buffer = itoa::Buffer::new();
        if let Some((head, rest)) = self.limbs.split_last() {
            // The most significant limb prints unpadded; every limb below
            // it is zero-padded to exactly three digits.
            f.write_str(buffer.format(*head))?;
            for &limb in rest.iter().rev() {
                let digits = buffer.format(limb);
                for _ in digits.len()..DIGITS_PER_LIMB {
                    f.write_str("0")?;
                }
                f.write_str(digits)?;
            }
        }
        Ok(())
    }
}

// One layer less verbose than the derived representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}
