//! Equality, hashing, and predicates on the canonical form.
//!
//! Two numbers are equal iff their normal forms agree after embedding both
//! at the lcm of their conductors. Hashing uses the normal form at the
//! minimal conductor, which is the same for every representation of an
//! element, so equal numbers hash alike whatever their conductor.

use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use cyclos_integers::number_theory::lcm;
use cyclos_rings::Coefficient;

use crate::cyclotomic::Cyclotomic;
use crate::store::CoeffStore;

impl<T: Coefficient, S: CoeffStore<T>> Cyclotomic<T, S> {
    /// The normal form at conductor `n`, borrowed when `self` already is one.
    fn canonical_at(&self, n: usize) -> Cow<'_, Self> {
        if n == self.conductor() {
            self.normal_view()
        } else {
            let mut embedded = self.embed(n);
            embedded.normalize();
            Cow::Owned(embedded)
        }
    }

    /// Compares after moving both operands to their lcm conductor and
    /// normal form in place.
    pub fn eq_normalizing<R: CoeffStore<T>>(&mut self, other: &mut Cyclotomic<T, R>) -> bool {
        let n = lcm(self.conductor(), other.conductor());
        if n != self.conductor() {
            *self = self.embed(n);
        }
        if n != other.conductor() {
            *other = other.embed(n);
        }
        self.normalize();
        other.normalize();
        self.terms().eq(other.terms())
    }

    /// Compares with a scalar placed at conductor 1.
    #[must_use]
    pub fn eq_scalar(&self, x: &T) -> bool {
        *self == Self::scalar(x.clone())
    }

    /// True if `self` is the zero element.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.normal_view().nnz() == 0
    }

    /// True if `self` is the multiplicative identity.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.eq_scalar(&T::one())
    }

    /// True if `self` lies in the prime field.
    #[must_use]
    pub fn is_rational(&self) -> bool {
        self.reduce_to_minimal_conductor().conductor() == 1
    }

    /// True if `self` equals its complex conjugate.
    #[must_use]
    pub fn is_real(&self) -> bool {
        *self == self.complex_conjugate()
    }
}

impl<T: Coefficient, S: CoeffStore<T>, R: CoeffStore<T>> PartialEq<Cyclotomic<T, R>>
    for Cyclotomic<T, S>
{
    fn eq(&self, other: &Cyclotomic<T, R>) -> bool {
        if self.conductor() == other.conductor() && self.terms().eq(other.terms()) {
            return true;
        }
        let n = lcm(self.conductor(), other.conductor());
        let a = self.canonical_at(n);
        let b = other.canonical_at(n);
        a.terms().eq(b.terms())
    }
}

impl<T: Coefficient + Eq, S: CoeffStore<T>> Eq for Cyclotomic<T, S> {}

impl<T: Coefficient, S: CoeffStore<T>> Hash for Cyclotomic<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let minimal = self.reduce_to_minimal_conductor();
        minimal.conductor().hash(state);
        for (e, c) in minimal.terms() {
            e.hash(state);
            c.hash_coeff(state);
        }
    }
}
