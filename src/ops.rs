//! The operator web over [`BigInt`].
//!
//! Every operator is a thin wrapper over one of the `checked_*` core
//! operations, expanded mechanically over all owned/borrowed operand
//! combinations and the symmetric `BigInt` ↔ `i64` mixed forms. The
//! operators panic on overflow and division by zero; callers that need to
//! handle those outcomes use the `checked_*` methods instead.

use crate::bigint::BigInt;
use core::cmp::Ordering;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

macro_rules! impl_binop {
    (impl $imp:ident, $method:ident, $checked:ident) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                self.$checked(rhs).unwrap_or_else(|err| panic!("{}", err))
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                self.$method(&rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                (&self).$method(rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                (&self).$method(&rhs)
            }
        }

        impl $imp<i64> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: i64) -> BigInt {
                self.$method(&BigInt::from(rhs))
            }
        }

        impl $imp<i64> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: i64) -> BigInt {
                (&self).$method(&BigInt::from(rhs))
            }
        }

        impl $imp<BigInt> for i64 {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::from(self).$method(&rhs)
            }
        }

        impl $imp<&BigInt> for i64 {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::from(self).$method(rhs)
            }
        }
    };
}

macro_rules! impl_assign {
    (impl $imp:ident, $method:ident, $checked:ident) => {
        impl $imp<&BigInt> for BigInt {
            fn $method(&mut self, rhs: &BigInt) {
                *self = self.$checked(rhs).unwrap_or_else(|err| panic!("{}", err));
            }
        }

        impl $imp<BigInt> for BigInt {
            #[inline]
            fn $method(&mut self, rhs: BigInt) {
                self.$method(&rhs);
            }
        }

        impl $imp<i64> for BigInt {
            #[inline]
            fn $method(&mut self, rhs: i64) {
                self.$method(&BigInt::from(rhs));
            }
        }
    };
}

impl_binop!(impl Add, add, checked_add);
impl_binop!(impl Sub, sub, checked_sub);
impl_binop!(impl Mul, mul, checked_mul);
impl_binop!(impl Div, div, checked_div);
impl_binop!(impl Rem, rem, checked_rem);

impl_assign!(impl AddAssign, add_assign, checked_add);
impl_assign!(impl SubAssign, sub_assign, checked_sub);
impl_assign!(impl MulAssign, mul_assign, checked_mul);
impl_assign!(impl DivAssign, div_assign, checked_div);
impl_assign!(impl RemAssign, rem_assign, checked_rem);

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        self.negated()
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        self.negated()
    }
}

impl PartialEq<i64> for BigInt {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        *self == BigInt::from(*other)
    }
}

impl PartialEq<BigInt> for i64 {
    #[inline]
    fn eq(&self, other: &BigInt) -> bool {
        BigInt::from(*self) == *other
    }
}

impl PartialOrd<i64> for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.partial_cmp(&BigInt::from(*other))
    }
}

impl PartialOrd<BigInt> for i64 {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        BigInt::from(*self).partial_cmp(other)
    }
}
