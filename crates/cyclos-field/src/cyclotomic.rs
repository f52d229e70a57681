//! Cyclotomic numbers.
//!
//! A [`Cyclotomic`] is a conductor `n` together with a coefficient store
//! mapping exponents `0..n` to coefficients; it denotes `Σ cₑ·ζₙᵉ`. Its
//! stored coefficients need not be in normal form, so two different
//! stores can denote the same field element. Everything that depends on a
//! canonical representative goes through the normalizer first.

use std::fmt;
use std::marker::PhantomData;

use cyclos_integers::number_theory::reduce_exponent;
use cyclos_rings::Coefficient;

use crate::store::{CoeffStore, DenseStore, SparseStore};

/// An element of the cyclotomic field `Q(ζₙ)`.
#[derive(Clone)]
pub struct Cyclotomic<T: Coefficient, S: CoeffStore<T> = DenseStore<T>> {
    conductor: usize,
    coeffs: S,
    marker: PhantomData<T>,
}

/// A cyclotomic number backed by a sparse store.
pub type SparseCyclotomic<T> = Cyclotomic<T, SparseStore<T>>;

impl<T: Coefficient, S: CoeffStore<T>> Cyclotomic<T, S> {
    /// Wraps a store; its length is the conductor.
    ///
    /// # Panics
    ///
    /// Panics if the store is empty.
    #[must_use]
    pub fn from_store(coeffs: S) -> Self {
        assert!(!coeffs.is_empty(), "conductor must be positive");
        Self {
            conductor: coeffs.len(),
            coeffs,
            marker: PhantomData,
        }
    }

    /// The additive identity at conductor `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn zero(n: usize) -> Self {
        assert!(n > 0, "conductor must be positive");
        Self::from_store(S::zeroed(n))
    }

    /// The multiplicative identity at conductor `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn one(n: usize) -> Self {
        let mut one = Self::zero(n);
        one.coeffs.set(0, T::one());
        one
    }

    /// The scalar `x` at conductor 1.
    #[must_use]
    pub fn scalar(x: T) -> Self {
        let mut c = Self::zero(1);
        c.coeffs.set(0, x);
        c
    }

    /// The primitive root `ζₙ`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn zeta(n: usize) -> Self {
        Self::root_of_unity(n, 1)
    }

    /// `ζₙᵏ`, with `k` taken modulo `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn root_of_unity(n: usize, k: i64) -> Self {
        let mut c = Self::zero(n);
        c.coeffs.set(reduce_exponent(k, n), T::one());
        c
    }

    /// Builds `Σ cₑ·ζₙᵉ` from coefficients listed for `e = 0, 1, ...`.
    ///
    /// Coefficients past index `n - 1` wrap around and accumulate.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn from_coeffs(n: usize, coeffs: impl IntoIterator<Item = T>) -> Self {
        assert!(n > 0, "conductor must be positive");
        Self::from_store(S::from_terms(
            n,
            coeffs.into_iter().enumerate().map(|(e, c)| (e % n, c)),
        ))
    }

    /// Builds a number from `(exponent, coefficient)` pairs.
    ///
    /// Exponents are reduced modulo `n`; repeated exponents accumulate.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn from_terms(n: usize, terms: impl IntoIterator<Item = (i64, T)>) -> Self {
        assert!(n > 0, "conductor must be positive");
        Self::from_store(S::from_terms(
            n,
            terms.into_iter().map(|(e, c)| (reduce_exponent(e, n), c)),
        ))
    }

    /// Returns the conductor `n`.
    #[must_use]
    pub fn conductor(&self) -> usize {
        self.conductor
    }

    /// Returns the conductor; the number is expressed in `n` powers of `ζₙ`.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.conductor
    }

    /// Returns the stored coefficient of `ζₙᵉ`, `e` taken modulo `n`.
    ///
    /// This reads the raw store; normalize first for a canonical answer.
    #[must_use]
    pub fn coeff(&self, e: i64) -> T {
        self.coeffs.coeff(reduce_exponent(e, self.conductor))
    }

    /// Overwrites the stored coefficient of `ζₙᵉ`, `e` taken modulo `n`.
    pub fn set_coeff(&mut self, e: i64, value: T) {
        let e = reduce_exponent(e, self.conductor);
        self.coeffs.set(e, value);
    }

    /// Iterates the nonzero `(exponent, coefficient)` pairs in ascending order.
    pub fn terms(&self) -> impl Iterator<Item = (usize, &T)> {
        self.coeffs.nonzero()
    }

    /// Number of nonzero stored coefficients.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.coeffs.nnz()
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.coeffs
    }

    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.coeffs
    }

    /// Applies `f` to every coefficient, keeping the conductor.
    pub fn map_coeffs<U: Coefficient, R: CoeffStore<U>>(
        &self,
        mut f: impl FnMut(&T) -> U,
    ) -> Cyclotomic<U, R> {
        Cyclotomic::from_store(R::from_terms(
            self.conductor,
            self.terms().map(|(e, c)| (e, f(c))),
        ))
    }

    /// Copies the coefficients into another store layout.
    #[must_use]
    pub fn convert_store<R: CoeffStore<T>>(&self) -> Cyclotomic<T, R> {
        let mut store = R::zeroed(self.conductor);
        store.copy_from(&self.coeffs);
        Cyclotomic::from_store(store)
    }

    /// Copies into a dense store.
    #[must_use]
    pub fn to_dense(&self) -> Cyclotomic<T> {
        self.convert_store()
    }

    /// Copies into a sparse store.
    #[must_use]
    pub fn to_sparse(&self) -> SparseCyclotomic<T> {
        self.convert_store()
    }
}

impl<T: Coefficient, S: CoeffStore<T>> fmt::Debug for Cyclotomic<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cyclotomic")
            .field("conductor", &self.conductor)
            .field("terms", &self.terms().collect::<Vec<_>>())
            .finish()
    }
}
