//! Floating coefficients.
//!
//! `f64` is treated as a field with rounding; the engine consults
//! [`FieldCoefficient::epsilon`] to decide when a result is ill-conditioned.

use std::hash::Hasher;

use crate::traits::{Coefficient, FieldCoefficient};

impl Coefficient for f64 {
    const EXACT: bool = false;

    #[allow(clippy::cast_precision_loss)]
    fn from_i64(n: i64) -> Self {
        n as f64
    }

    fn to_f64(&self) -> f64 {
        *self
    }

    fn div_exact(&self, divisor: &Self) -> Option<Self> {
        (*divisor != 0.0).then(|| self / divisor)
    }

    fn hash_coeff<H: Hasher>(&self, state: &mut H) {
        // 0.0 == -0.0, so both must produce the same bits
        let value = if *self == 0.0 { 0.0 } else { *self };
        state.write_u64(value.to_bits());
    }
}

impl FieldCoefficient for f64 {
    fn inv(&self) -> Option<Self> {
        (*self != 0.0).then(|| self.recip())
    }

    fn epsilon() -> Option<f64> {
        Some(f64::EPSILON)
    }

    fn from_real(x: f64) -> Option<Self> {
        Some(x)
    }
}
