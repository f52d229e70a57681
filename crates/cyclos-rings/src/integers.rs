//! Integer coefficients: arbitrary precision `Integer` and machine `i64`.
//!
//! Both are rings, not fields. A cyclotomic number with integer
//! coefficients is inverted by mapping its coefficients into `Rational`.

use std::hash::{Hash, Hasher};

use cyclos_integers::Integer;

use crate::traits::Coefficient;

impl Coefficient for Integer {
    const EXACT: bool = true;

    fn from_i64(n: i64) -> Self {
        Integer::new(n)
    }

    fn to_f64(&self) -> f64 {
        Integer::to_f64(self)
    }

    fn div_exact(&self, divisor: &Self) -> Option<Self> {
        self.checked_div_exact(divisor)
    }

    fn hash_coeff<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}

/// Machine integers for small, bounded coefficients.
///
/// # Panics
///
/// `Add`, `Sub`, `Mul` and `Neg` are the primitive operators: they panic on
/// overflow in debug builds and wrap in release builds. Products of
/// cyclotomic numbers grow quickly, so use [`Integer`] when coefficients are
/// not known to stay well inside `i64`. [`Coefficient::div_exact`] never
/// overflows and reports `i64::MIN / -1` as `None`.
impl Coefficient for i64 {
    const EXACT: bool = true;

    fn from_i64(n: i64) -> Self {
        n
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_f64(&self) -> f64 {
        *self as f64
    }

    fn div_exact(&self, divisor: &Self) -> Option<Self> {
        match self.checked_rem(*divisor) {
            Some(0) => self.checked_div(*divisor),
            _ => None,
        }
    }

    fn hash_coeff<H: Hasher>(&self, state: &mut H) {
        state.write_i64(*self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_exact_division() {
        let a = Integer::new(-21);
        assert_eq!(a.div_exact(&Integer::new(7)), Some(Integer::new(-3)));
        assert_eq!(a.div_exact(&Integer::new(4)), None);
        assert_eq!(a.magnitude(), 21.0);
    }

    #[test]
    fn test_i64_exact_division() {
        assert_eq!(12i64.div_exact(&-4), Some(-3));
        assert_eq!(12i64.div_exact(&5), None);
        assert_eq!(12i64.div_exact(&0), None);
        assert_eq!(i64::MIN.div_exact(&-1), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflow")]
    fn test_i64_overflow_panics_in_debug() {
        let big = std::hint::black_box(<i64 as Coefficient>::from_i64(i64::MAX));
        let _ = big + 1;
    }

    #[test]
    fn test_integer_does_not_overflow() {
        let big = <Integer as Coefficient>::from_i64(i64::MAX);
        let sum = big.clone() + Integer::new(1);
        assert!(sum > big);
        assert_eq!(sum.to_i64(), None);
    }
}
