//! Coefficient storage.
//!
//! A cyclotomic number of conductor `n` maps exponents `0..n` to
//! coefficients. Two layouts implement the same contract:
//! - [`DenseStore`]: a vector of length `n`, O(1) access, O(n) iteration
//! - [`SparseStore`]: an ordered map of the nonzero entries, O(log k)
//!   access, O(k) iteration
//!
//! Both iterate nonzero entries in ascending exponent order, so anything
//! computed from [`CoeffStore::nonzero`] is independent of the layout.
//! Callers reduce exponents modulo the conductor before indexing.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Debug;

use cyclos_rings::Coefficient;

/// Exponent → coefficient storage for one cyclotomic number.
pub trait CoeffStore<T: Coefficient>: Clone + Debug {
    /// Creates an all-zero store for exponents `0..len`.
    fn zeroed(len: usize) -> Self;

    /// Number of addressable exponents (the conductor).
    fn len(&self) -> usize;

    /// Returns the coefficient at `e`, or `None` when it is zero.
    fn get(&self, e: usize) -> Option<&T>;

    /// Overwrites the coefficient at `e`.
    fn set(&mut self, e: usize, value: T);

    /// Adds `value` to the coefficient at `e`.
    fn add_at(&mut self, e: usize, value: T);

    /// Removes the coefficient at `e` and returns it (zero if absent).
    fn take(&mut self, e: usize) -> T;

    /// Iterates `(exponent, coefficient)` over nonzero entries, ascending.
    fn nonzero<'a>(&'a self) -> impl Iterator<Item = (usize, &'a T)>
    where
        T: 'a;

    /// Resets every coefficient to zero.
    fn clear(&mut self);

    /// Applies `f` to every nonzero coefficient in place.
    ///
    /// Entries that become zero read as absent afterwards.
    fn map_nonzero(&mut self, f: impl FnMut(&mut T));

    /// Returns the coefficient at `e`, zero if absent.
    fn coeff(&self, e: usize) -> T {
        self.get(e).cloned().unwrap_or_else(T::zero)
    }

    /// Subtracts `value` from the coefficient at `e`.
    fn sub_at(&mut self, e: usize, value: T) {
        self.add_at(e, -value);
    }

    /// Number of nonzero entries.
    fn nnz(&self) -> usize {
        self.nonzero().count()
    }

    /// Returns true if the store holds no addressable exponents.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces the contents with a copy of `other`, adopting its length.
    fn copy_from<O: CoeffStore<T>>(&mut self, other: &O) {
        *self = Self::zeroed(other.len());
        for (e, value) in other.nonzero() {
            self.set(e, value.clone());
        }
    }

    /// Builds a store of length `len`, accumulating repeated exponents.
    fn from_terms(len: usize, terms: impl IntoIterator<Item = (usize, T)>) -> Self {
        let mut store = Self::zeroed(len);
        for (e, value) in terms {
            store.add_at(e, value);
        }
        store
    }
}

/// Dense coefficient vector indexed by exponent.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseStore<T> {
    coeffs: Vec<T>,
}

impl<T: Coefficient> DenseStore<T> {
    /// Returns the coefficients, including zeros.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.coeffs
    }
}

impl<T: Coefficient> CoeffStore<T> for DenseStore<T> {
    fn zeroed(len: usize) -> Self {
        Self {
            coeffs: vec![T::zero(); len],
        }
    }

    fn len(&self) -> usize {
        self.coeffs.len()
    }

    fn get(&self, e: usize) -> Option<&T> {
        self.coeffs.get(e).filter(|c| !c.is_zero())
    }

    fn set(&mut self, e: usize, value: T) {
        self.coeffs[e] = value;
    }

    fn add_at(&mut self, e: usize, value: T) {
        let slot = &mut self.coeffs[e];
        let current = std::mem::replace(slot, T::zero());
        *slot = current + value;
    }

    fn take(&mut self, e: usize) -> T {
        std::mem::replace(&mut self.coeffs[e], T::zero())
    }

    fn nonzero<'a>(&'a self) -> impl Iterator<Item = (usize, &'a T)>
    where
        T: 'a,
    {
        self.coeffs.iter().enumerate().filter(|(_, c)| !c.is_zero())
    }

    fn clear(&mut self) {
        self.coeffs.fill(T::zero());
    }

    fn map_nonzero(&mut self, mut f: impl FnMut(&mut T)) {
        for c in self.coeffs.iter_mut().filter(|c| !c.is_zero()) {
            f(c);
        }
    }
}

/// Sparse coefficient map holding only nonzero entries.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseStore<T> {
    len: usize,
    terms: BTreeMap<usize, T>,
}

impl<T: Coefficient> CoeffStore<T> for SparseStore<T> {
    fn zeroed(len: usize) -> Self {
        Self {
            len,
            terms: BTreeMap::new(),
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, e: usize) -> Option<&T> {
        self.terms.get(&e)
    }

    fn set(&mut self, e: usize, value: T) {
        debug_assert!(e < self.len, "exponent {e} out of range for length {}", self.len);
        if value.is_zero() {
            self.terms.remove(&e);
        } else {
            self.terms.insert(e, value);
        }
    }

    fn add_at(&mut self, e: usize, value: T) {
        debug_assert!(e < self.len, "exponent {e} out of range for length {}", self.len);
        match self.terms.entry(e) {
            Entry::Occupied(mut entry) => {
                let current = std::mem::replace(entry.get_mut(), T::zero());
                let sum = current + value;
                if sum.is_zero() {
                    entry.remove();
                } else {
                    *entry.get_mut() = sum;
                }
            }
            Entry::Vacant(entry) => {
                if !value.is_zero() {
                    entry.insert(value);
                }
            }
        }
    }

    fn take(&mut self, e: usize) -> T {
        self.terms.remove(&e).unwrap_or_else(T::zero)
    }

    fn nonzero<'a>(&'a self) -> impl Iterator<Item = (usize, &'a T)>
    where
        T: 'a,
    {
        self.terms.iter().map(|(&e, c)| (e, c))
    }

    fn clear(&mut self) {
        self.terms.clear();
    }

    fn map_nonzero(&mut self, mut f: impl FnMut(&mut T)) {
        for c in self.terms.values_mut() {
            f(c);
        }
        self.terms.retain(|_, c| !c.is_zero());
    }

    fn nnz(&self) -> usize {
        self.terms.len()
    }
}
