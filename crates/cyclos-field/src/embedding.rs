//! Moving numbers between conductors.
//!
//! `ζ_d = ζₙ^(n/d)` for `d | n`, so embedding multiplies exponents by
//! `n/d`. The reverse direction peels one prime off the conductor at a
//! time, and only succeeds when the normal form at `n` is the image of a
//! normal form at `n/p`:
//! - for `ν ≥ 2` every nonzero exponent must be divisible by `p`
//! - for `ν = 1` every full coset `e + ⟨n/p⟩` minus its base must carry a
//!   single repeated coefficient, which collapses to `-c` at the base

use std::borrow::Cow;

use cyclos_basis::{basis, PrimePowerComponent};
use cyclos_rings::Coefficient;
use tracing::trace;

use crate::cyclotomic::Cyclotomic;
use crate::error::{CycloError, Result};
use crate::store::CoeffStore;

impl<T: Coefficient, S: CoeffStore<T>> Cyclotomic<T, S> {
    /// Re-expresses `self` at conductor `m`, which must be a multiple of the
    /// current conductor. The result is not normalized.
    ///
    /// # Panics
    ///
    /// Panics if the conductor does not divide `m`.
    #[must_use]
    pub fn embed(&self, m: usize) -> Self {
        match self.try_embed(m) {
            Ok(embedded) => embedded,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`Cyclotomic::embed`].
    ///
    /// # Errors
    ///
    /// Returns [`CycloError::NotAMultiple`] if the conductor does not divide `m`.
    pub fn try_embed(&self, m: usize) -> Result<Self> {
        let n = self.conductor();
        if m == 0 || m % n != 0 {
            return Err(CycloError::NotAMultiple {
                conductor: n,
                target: m,
            });
        }
        let factor = m / n;
        Ok(Self::from_store(S::from_terms(
            m,
            self.terms().map(|(e, c)| (e * factor, c.clone())),
        )))
    }

    /// Borrows `self` when `m` is already the conductor.
    ///
    /// # Panics
    ///
    /// Panics if the conductor does not divide `m`.
    #[must_use]
    pub fn embedded(&self, m: usize) -> Cow<'_, Self> {
        if m == self.conductor() {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(self.embed(m))
        }
    }

    /// The normal form of `self` at the smallest conductor whose field
    /// contains it.
    #[must_use]
    pub fn reduce_to_minimal_conductor(&self) -> Self {
        let mut current = self.normalized();

        'descend: while current.conductor() > 1 {
            let basis = basis(current.conductor());
            for component in basis.components() {
                if let Some(smaller) = current.descend(component) {
                    current = smaller;
                    continue 'descend;
                }
            }
            break;
        }

        trace!(
            from = self.conductor(),
            to = current.conductor(),
            "reduced to minimal conductor"
        );
        current
    }

    /// Rewrites a normalized number at conductor `n/p`, if it lives there.
    fn descend(&self, component: &PrimePowerComponent) -> Option<Self> {
        let p = component.prime;
        let target = self.conductor() / p;

        if component.exponent >= 2 {
            if self.terms().any(|(e, _)| e % p != 0) {
                return None;
            }
            return Some(Self::from_store(S::from_terms(
                target,
                self.terms().map(|(e, c)| (e / p, c.clone())),
            )));
        }

        let mut store = S::zeroed(target);
        for (e, c) in self.terms() {
            let base = component.coset_base(e);
            debug_assert!(self.store().get(base).is_none());
            let uniform = component
                .relation(base)
                .all(|member| self.store().get(member) == Some(c));
            if !uniform {
                return None;
            }
            if component.top_digit(e) == 1 {
                store.set(base / p, -c.clone());
            }
        }
        Some(Self::from_store(store))
    }
}
