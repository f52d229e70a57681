//! Floating approximation of cyclotomic numbers.

use std::f64::consts::TAU;
use std::ops::{Add, Mul, Sub};

use cyclos_rings::Coefficient;

use crate::config::Tolerance;
use crate::cyclotomic::Cyclotomic;
use crate::error::{CycloError, Result};
use crate::store::CoeffStore;

/// A complex number in `f64` precision.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex {
    /// Creates `re + i·im`.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// `exp(2πi·e/n)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn root_of_unity(n: usize, e: usize) -> Self {
        let angle = TAU * (e % n) as f64 / n as f64;
        Self::new(angle.cos(), angle.sin())
    }

    /// The modulus `|z|`.
    #[must_use]
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

impl<T: Coefficient, S: CoeffStore<T>> Cyclotomic<T, S> {
    /// Evaluates `Σ cₑ·exp(2πi·e/n)` in `f64`.
    #[must_use]
    pub fn to_complex(&self) -> Complex {
        let n = self.conductor();
        self.terms().fold(Complex::default(), |acc, (e, c)| {
            acc + Complex::root_of_unity(n, e) * c.to_f64()
        })
    }

    /// Returns the real value of `self`.
    ///
    /// Exact coefficient types are checked exactly; floating ones within
    /// [`Tolerance::for_terms`] of the term count.
    ///
    /// # Errors
    ///
    /// Returns [`CycloError::NotReal`] if `self` has an imaginary part.
    pub fn to_real(&self) -> Result<f64> {
        let z = self.to_complex();
        let real = if T::EXACT {
            self.is_real()
        } else {
            z.im.abs() <= Tolerance::for_terms(self.nnz()).bound(z.re.abs(), 0.0)
        };
        if real {
            Ok(z.re)
        } else {
            Err(CycloError::NotReal { imaginary: z.im })
        }
    }

    /// Approximate comparison with a real scalar, tolerance scaled by the
    /// number of terms.
    #[must_use]
    pub fn approx_eq_scalar(&self, x: f64) -> bool {
        self.approx_eq_scalar_with(x, &Tolerance::for_terms(self.nnz()))
    }

    /// Approximate comparison with a real scalar.
    #[must_use]
    pub fn approx_eq_scalar_with(&self, x: f64, tolerance: &Tolerance) -> bool {
        let z = self.to_complex();
        (z - Complex::new(x, 0.0)).abs() <= tolerance.bound(z.abs(), x.abs())
    }

    /// Approximate comparison of the complex values of two numbers.
    #[must_use]
    pub fn approx_eq<R: CoeffStore<T>>(&self, other: &Cyclotomic<T, R>, tolerance: &Tolerance) -> bool {
        let a = self.to_complex();
        let b = other.to_complex();
        (a - b).abs() <= tolerance.bound(a.abs(), b.abs())
    }
}
