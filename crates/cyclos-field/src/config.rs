//! Tunable thresholds for floating coefficients.
//!
//! Exact coefficient types never consult these.

/// Acceptance window for approximate comparisons.
///
/// A value `a` is accepted as approximately `x` iff
/// `|a - x| <= max(atol, rtol * max(|a|, |x|))`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    /// Absolute tolerance.
    pub atol: f64,
    /// Relative tolerance.
    pub rtol: f64,
}

impl Tolerance {
    /// Tolerance scaled for a sum of `k` rounded terms.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn for_terms(k: usize) -> Self {
        let k = k.max(1) as f64;
        Self {
            atol: k * f64::EPSILON,
            rtol: k * f64::EPSILON.sqrt(),
        }
    }

    /// Largest accepted distance between values of magnitudes `a` and `x`.
    #[must_use]
    pub fn bound(&self, a: f64, x: f64) -> f64 {
        self.atol.max(self.rtol * a.abs().max(x.abs()))
    }

    /// Returns true if `a` lies within tolerance of `x`.
    #[must_use]
    pub fn accepts(&self, a: f64, x: f64) -> bool {
        (a - x).abs() <= self.bound(a, x)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::for_terms(1)
    }
}

/// Configuration for inversion over floating coefficients.
#[derive(Clone, Debug)]
pub struct InversionConfig {
    /// A dominant coefficient smaller than this many epsilons is reported
    /// as ill-conditioned.
    pub ill_conditioned_factor: f64,
    /// Largest imaginary residue of the norm, relative to `max(1, |re|)`,
    /// accepted without a warning.
    pub imaginary_tolerance: f64,
}

impl Default for InversionConfig {
    fn default() -> Self {
        Self {
            ill_conditioned_factor: 16.0,
            imaginary_tolerance: f64::EPSILON.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_window() {
        let tol = Tolerance::for_terms(4);
        assert!(tol.accepts(1.0, 1.0 + 1e-9));
        assert!(!tol.accepts(1.0, 1.001));
        // absolute floor near zero
        assert!(tol.accepts(0.0, 2.0 * f64::EPSILON));
        assert!(!tol.accepts(0.0, 1e-10));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Tolerance::default(), Tolerance::for_terms(1));
        let config = InversionConfig::default();
        assert!((config.ill_conditioned_factor - 16.0).abs() < f64::EPSILON);
        assert!(config.imaginary_tolerance > f64::EPSILON);
    }
}
