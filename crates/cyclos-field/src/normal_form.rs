//! Reduction to the canonical basis.
//!
//! Each prime-power component `p^ν` of the conductor is handled in turn.
//! A nonzero coefficient `c` at an exponent `e` whose top local digit is 0
//! is removed and `c` is subtracted at each `e + j·n/p`, `j = 1..p`; the
//! targets are admissible for `p` and keep every other prime's local
//! exponent, so one pass per prime suffices.

use std::borrow::Cow;

use cyclos_basis::{basis, Basis};
use cyclos_rings::Coefficient;
use tracing::trace;

use crate::cyclotomic::Cyclotomic;
use crate::store::CoeffStore;

impl<T: Coefficient, S: CoeffStore<T>> Cyclotomic<T, S> {
    /// Returns true if every nonzero exponent lies in the basis.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.is_normalized_in(&basis(self.conductor()))
    }

    fn is_normalized_in(&self, basis: &Basis) -> bool {
        self.terms().all(|(e, _)| basis.contains(e))
    }

    /// Rewrites the coefficients in place so only basis exponents are nonzero.
    ///
    /// Idempotent.
    pub fn normalize(&mut self) {
        let basis = basis(self.conductor());
        if self.is_normalized_in(&basis) {
            return;
        }

        let before = self.nnz();
        for component in basis.components() {
            let forbidden: Vec<usize> = self
                .terms()
                .map(|(e, _)| e)
                .filter(|&e| component.is_forbidden(e))
                .collect();

            for e in forbidden {
                let c = self.store_mut().take(e);
                for target in component.relation(e) {
                    self.store_mut().sub_at(target, c.clone());
                }
            }
        }

        debug_assert!(self.is_normalized_in(&basis));
        trace!(
            conductor = self.conductor(),
            before,
            after = self.nnz(),
            "normalized"
        );
    }

    /// Returns a normalized copy.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut c = self.clone();
        c.normalize();
        c
    }

    /// Borrows `self` if already normalized, otherwise returns a normalized copy.
    #[must_use]
    pub fn normal_view(&self) -> Cow<'_, Self> {
        if self.is_normalized() {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(self.normalized())
        }
    }
}
