//! Rational coefficients, the exact field used for inversion.

use std::hash::{Hash, Hasher};

use cyclos_integers::Rational;
use num_traits::Zero;

use crate::traits::{Coefficient, FieldCoefficient};

impl Coefficient for Rational {
    const EXACT: bool = true;

    fn from_i64(n: i64) -> Self {
        Rational::from(n)
    }

    fn to_f64(&self) -> f64 {
        Rational::to_f64(self)
    }

    fn div_exact(&self, divisor: &Self) -> Option<Self> {
        (!divisor.is_zero()).then(|| self / divisor)
    }

    fn hash_coeff<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}

impl FieldCoefficient for Rational {
    fn inv(&self) -> Option<Self> {
        self.checked_recip()
    }

    fn epsilon() -> Option<f64> {
        None
    }

    fn from_real(_x: f64) -> Option<Self> {
        None
    }
}
