//! Inversion through the field norm.
//!
//! For `α ≠ 0` in `Q(ζₙ)` the product of all Galois conjugates
//! `N(α) = Π σᵢ(α)` is a nonzero rational, so
//!
//! ```text
//! α⁻¹ = (Π_{i ≠ 1} σᵢ(α)) / N(α)
//! ```
//!
//! The number is first reduced to its minimal conductor, which keeps the
//! number of conjugates at `φ(n) - 1` for the smallest possible `n`, and
//! scaled by its dominant coefficient so floating products stay near 1.

use std::borrow::Borrow;
use std::ops::Div;

use cyclos_basis::basis;
use cyclos_rings::FieldCoefficient;
use tracing::{debug, warn};

use crate::arith::Workspace;
use crate::config::InversionConfig;
use crate::cyclotomic::Cyclotomic;
use crate::error::{CycloError, Result};
use crate::store::CoeffStore;

impl<T: FieldCoefficient, S: CoeffStore<T>> Cyclotomic<T, S> {
    /// Computes the multiplicative inverse with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CycloError::DivisionByZero`] if `self` is zero.
    pub fn try_inv(&self) -> Result<Self> {
        self.try_inv_with(&InversionConfig::default())
    }

    /// Computes the multiplicative inverse.
    ///
    /// The result lives at the minimal conductor of `self`. Ill-conditioned
    /// floating inputs are reported through `tracing` and still produce a
    /// best-effort result.
    ///
    /// # Errors
    ///
    /// Returns [`CycloError::DivisionByZero`] if `self` is zero.
    ///
    /// # Panics
    ///
    /// Panics if, for an exact coefficient type, the computed norm is not
    /// rational. That would mean the conjugate product is wrong.
    pub fn try_inv_with(&self, config: &InversionConfig) -> Result<Self> {
        let alpha = self.reduce_to_minimal_conductor();
        let n = alpha.conductor();

        if n == 1 {
            let inverse = alpha.coeff(0).inv().ok_or(CycloError::DivisionByZero)?;
            return Ok(Self::scalar(inverse));
        }

        let lead = alpha
            .terms()
            .map(|(_, c)| c)
            .max_by(|a, b| a.magnitude().total_cmp(&b.magnitude()))
            .cloned()
            .ok_or(CycloError::DivisionByZero)?;
        if let Some(eps) = T::epsilon() {
            if lead.magnitude() < config.ill_conditioned_factor * eps {
                warn!(
                    conductor = n,
                    magnitude = lead.magnitude(),
                    "ill-conditioned inversion: dominant coefficient is near machine epsilon"
                );
            }
        }
        let ilead = lead.inv().ok_or(CycloError::DivisionByZero)?;
        let alpha = alpha.scale(&ilead);

        let basis = basis(n);
        let wanted = basis.len() - 1;
        let mut workspace = Workspace::new();
        let mut out = Self::one(n);
        let mut multiplied = 0;
        for i in 2..n {
            if multiplied == wanted {
                break;
            }
            if !basis.is_unit(i) {
                continue;
            }
            out = out.mul_with(&alpha.conjugate_by(i), &mut workspace);
            multiplied += 1;
        }
        debug!(conductor = n, conjugates = multiplied, "multiplied galois conjugates");

        let norm = out.mul_with(&alpha, &mut workspace);
        let norm = if T::EXACT {
            let reduced = norm.reduce_to_minimal_conductor();
            assert_eq!(
                reduced.conductor(),
                1,
                "field norm must be rational, got {reduced:?}"
            );
            reduced.coeff(0)
        } else {
            let z = norm.to_complex();
            if z.im.abs() > config.imaginary_tolerance * z.re.abs().max(1.0) {
                warn!(
                    conductor = n,
                    real = z.re,
                    imaginary = z.im,
                    "field norm has a non-negligible imaginary part"
                );
            }
            T::from_real(z.re).unwrap_or_else(|| norm.reduce_to_minimal_conductor().coeff(0))
        };

        let inv_norm = norm.inv().ok_or(CycloError::DivisionByZero)?;
        Ok(out.scale(&(inv_norm * ilead)))
    }

    /// The multiplicative inverse, or `None` for zero.
    #[must_use]
    pub fn inv(&self) -> Option<Self> {
        self.try_inv().ok()
    }

    /// Computes `self · other⁻¹`.
    ///
    /// # Errors
    ///
    /// Returns [`CycloError::DivisionByZero`] if `other` is zero.
    pub fn checked_div<R: CoeffStore<T>>(&self, other: &Cyclotomic<T, R>) -> Result<Self> {
        let inverse = other.try_inv()?;
        Ok(self.mul_with(&inverse, &mut Workspace::new()))
    }
}

macro_rules! div_op {
    ($lhs:ty, $rhs:ty) => {
        impl<T: FieldCoefficient, S: CoeffStore<T>, R: CoeffStore<T>> Div<$rhs> for $lhs {
            type Output = Cyclotomic<T, S>;

            /// # Panics
            ///
            /// Panics if the divisor is zero.
            fn div(self, rhs: $rhs) -> Self::Output {
                let lhs: &Cyclotomic<T, S> = self.borrow();
                let rhs: &Cyclotomic<T, R> = rhs.borrow();
                match lhs.checked_div(rhs) {
                    Ok(quotient) => quotient,
                    Err(err) => panic!("{err}"),
                }
            }
        }
    };
}

div_op!(&Cyclotomic<T, S>, &Cyclotomic<T, R>);
div_op!(&Cyclotomic<T, S>, Cyclotomic<T, R>);
div_op!(Cyclotomic<T, S>, &Cyclotomic<T, R>);
div_op!(Cyclotomic<T, S>, Cyclotomic<T, R>);
