//! Signed arbitrary-precision integers with decimal limbs.
//!
//! A [`BigInt`] holds any integer of up to 30000 decimal digits. The
//! magnitude is stored in base-1000 limbs (three decimal digits per limb),
//! which keeps textual conversion trivial and every algorithm linear-time
//! and easy to audit; there is deliberately no bit-level representation
//! and no sub-quadratic multiplication.
//!
//! # Constructing values
//!
//! Values come from decimal text or from machine integers:
//!
//! ```
//! use decint::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890".parse()?;
//! let b = decint::from_str("-42")?;
//! let c = BigInt::from(1_000_000_u64);
//! assert!(b < c);
//! # Ok::<(), decint::Error>(())
//! ```
//!
//! # Arithmetic
//!
//! The usual operators work on owned values, references, and `i64`
//! operands on either side, and panic on overflow or division by zero.
//! The `checked_*` methods are the non-panicking forms:
//!
//! ```
//! use decint::BigInt;
//!
//! let n: BigInt = "1000".parse()?;
//! assert_eq!((&n / 3).to_string(), "333");
//! assert_eq!((&n % 3).to_string(), "1");
//!
//! let zero = BigInt::from(0);
//! assert!(n.checked_div(&zero).unwrap_err().is_division_by_zero());
//! # Ok::<(), decint::Error>(())
//! ```
//!
//! For every `a` and non-zero `b`, the Euclidean identity
//! `(a / b) * b + (a % b) == a` holds by construction: the remainder is
//! derived from the quotient rather than computed independently.
//!
//! # Failure modes
//!
//! Every failure is one of three narrowly scoped kinds, surfaced through
//! [`Error`] so callers can discriminate them: a result needing more than
//! 30000 decimal digits ([`Category::Overflow`]), a zero divisor
//! ([`Category::DivisionByZero`]), or text outside the sign-optional
//! decimal grammar ([`Category::MalformedInput`]). No operation ever
//! returns a partial result.

#![deny(missing_docs)]

mod bigint;
mod error;
mod fmt;
mod math;
mod ops;
mod parse;

pub use crate::bigint::BigInt;
pub use crate::error::{Category, Error, ErrorCode, Result};
pub use crate::fmt::to_string;
pub use crate::parse::from_str;
