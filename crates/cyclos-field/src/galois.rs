//! Conjugation under power maps `ζₙ ↦ ζₙᵏ`.

use cyclos_integers::number_theory::{gcd, mul_mod, reduce_exponent};
use cyclos_rings::Coefficient;

use crate::cyclotomic::Cyclotomic;
use crate::error::{CycloError, Result};
use crate::store::CoeffStore;

impl<T: Coefficient, S: CoeffStore<T>> Cyclotomic<T, S> {
    /// Applies `ζₙ ↦ ζₙᵏ` for any `k`.
    ///
    /// When `k` is not a unit modulo `n` distinct exponents can collide;
    /// their coefficients accumulate.
    #[must_use]
    pub fn conjugate(&self, k: i64) -> Self {
        self.conjugate_by(reduce_exponent(k, self.conductor()))
    }

    /// [`Cyclotomic::conjugate`] for `k` already reduced modulo the conductor.
    pub(crate) fn conjugate_by(&self, k: usize) -> Self {
        let n = self.conductor();
        Self::from_store(S::from_terms(
            n,
            self.terms().map(|(e, c)| (mul_mod(e, k, n), c.clone())),
        ))
    }

    /// Complex conjugation, `ζₙ ↦ ζₙ⁻¹`.
    #[must_use]
    pub fn complex_conjugate(&self) -> Self {
        self.conjugate(-1)
    }

    /// Applies the Galois automorphism `ζₙ ↦ ζₙᵏ`.
    ///
    /// # Errors
    ///
    /// Returns [`CycloError::NotAnAutomorphism`] unless `gcd(k, n) = 1`.
    pub fn galois_conjugate(&self, k: i64) -> Result<Self> {
        let n = self.conductor();
        let reduced = reduce_exponent(k, n);
        if gcd(reduced, n) != 1 {
            return Err(CycloError::NotAnAutomorphism {
                power: k,
                conductor: n,
            });
        }
        Ok(self.conjugate_by(reduced))
    }
}

#[cfg(test)]
mod tests {
    use cyclos_integers::Rational;

    use super::*;

    fn q(n: i64) -> Rational {
        Rational::from(n)
    }

    #[test]
    fn test_complex_conjugate() {
        let c = Cyclotomic::<Rational>::from_terms(7, [(1, q(2)), (3, q(-1))]);
        let bar = c.complex_conjugate();
        assert_eq!(bar.coeff(6), q(2));
        assert_eq!(bar.coeff(4), q(-1));
        let back = bar.complex_conjugate();
        assert_eq!(back.store(), c.store());
    }

    #[test]
    fn test_non_unit_power_accumulates() {
        let c = Cyclotomic::<Rational>::from_terms(6, [(1, q(1)), (4, q(2))]);
        // 2·1 = 2, 2·4 = 8 ≡ 2
        let image = c.conjugate(2);
        assert_eq!(image.nnz(), 1);
        assert_eq!(image.coeff(2), q(3));
    }

    #[test]
    fn test_galois_conjugate() {
        let c = Cyclotomic::<Rational>::zeta(12);
        assert_eq!(c.galois_conjugate(5).unwrap().coeff(5), q(1));
        assert_eq!(c.galois_conjugate(-7).unwrap().coeff(5), q(1));
        assert_eq!(
            c.galois_conjugate(4).err(),
            Some(CycloError::NotAnAutomorphism {
                power: 4,
                conductor: 12
            })
        );
        // every power is an automorphism of Q
        let one = Cyclotomic::<Rational>::scalar(q(3));
        assert!(one.galois_conjugate(0).is_ok());
    }
}
