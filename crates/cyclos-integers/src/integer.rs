//! Arbitrary precision integers.
//!
//! A thin wrapper over `dashu::integer::IBig` exposing the operations the
//! cyclotomic engine needs from an integer coefficient: ring arithmetic,
//! exact division and a floating approximation.

use dashu::base::{Abs, Signed as DashuSigned};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Divides exactly, returning `None` if `divisor` is zero or does not
    /// divide `self`.
    #[must_use]
    pub fn checked_div_exact(&self, divisor: &Self) -> Option<Self> {
        if divisor.is_zero() {
            return None;
        }
        let remainder = &self.0 % &divisor.0;
        remainder.is_zero().then(|| Self(&self.0 / &divisor.0))
    }

    /// Returns the nearest `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        RBig::from(self.0.clone()).to_f64().value()
    }

    /// Attempts to convert to an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! integer_binop {
    ($Op:ident, $method:ident) => {
        impl $Op for Integer {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self($Op::$method(self.0, rhs.0))
            }
        }

        impl $Op<&Integer> for Integer {
            type Output = Self;

            fn $method(self, rhs: &Integer) -> Self::Output {
                Self($Op::$method(self.0, &rhs.0))
            }
        }

        impl $Op for &Integer {
            type Output = Integer;

            fn $method(self, rhs: Self) -> Self::Output {
                Integer($Op::$method(&self.0, &rhs.0))
            }
        }
    };
}

integer_binop!(Add, add);
integer_binop!(Sub, sub);
integer_binop!(Mul, mul);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_division() {
        let a = Integer::new(42);
        assert_eq!(a.checked_div_exact(&Integer::new(6)), Some(Integer::new(7)));
        assert_eq!(a.checked_div_exact(&Integer::new(5)), None);
        assert_eq!(a.checked_div_exact(&Integer::new(0)), None);
        assert_eq!(
            Integer::new(-12).checked_div_exact(&Integer::new(4)),
            Some(Integer::new(-3))
        );
    }

    #[test]
    fn test_float_approximation() {
        assert_eq!(Integer::new(-7).to_f64(), -7.0);
        assert_eq!(Integer::new(1 << 40).to_f64(), 1_099_511_627_776.0);
    }

    #[test]
    fn test_ring_ops_by_reference() {
        let a = Integer::new(10);
        let b = Integer::new(3);
        assert_eq!((&a + &b).to_i64(), Some(13));
        assert_eq!((&a - &b).to_i64(), Some(7));
        assert_eq!((&a * &b).to_i64(), Some(30));
        assert_eq!((-&a).to_i64(), Some(-10));
        assert!(Integer::new(-1).is_negative());
        assert_eq!(Integer::new(-5).abs(), Integer::new(5));
    }
}
