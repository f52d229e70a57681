//! Ring operations.
//!
//! Binary operations between different conductors first embed both
//! operands at the lcm. Addition and subtraction accumulate pointwise into
//! the left operand; multiplication convolves the nonzero terms into a
//! dense [`Workspace`] and copies the result into the left operand's store
//! layout. No result is normalized.

use std::borrow::Borrow;
use std::mem;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use cyclos_integers::number_theory::lcm;
use cyclos_rings::{Coefficient, FieldCoefficient};

use crate::cyclotomic::Cyclotomic;
use crate::error::{CycloError, Result};
use crate::store::CoeffStore;

/// Reusable dense accumulation buffer for products.
///
/// The buffer is left zeroed after every use, so a workspace can be shared
/// by any number of multiplications of any conductor.
#[derive(Clone, Debug)]
pub struct Workspace<T> {
    buffer: Vec<T>,
}

impl<T: Coefficient> Workspace<T> {
    /// Creates an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Current capacity in coefficients.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    fn prepare(&mut self, n: usize) -> &mut [T] {
        self.buffer.clear();
        self.buffer.resize(n, T::zero());
        &mut self.buffer
    }

    fn drain(&mut self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.buffer
            .iter_mut()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(e, c)| (e, mem::replace(c, T::zero())))
    }
}

impl<T: Coefficient> Default for Workspace<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Coefficient, S: CoeffStore<T>> Cyclotomic<T, S> {
    /// Adds or subtracts `other` into `self`, embedding both at the lcm.
    pub(crate) fn accumulate<R: CoeffStore<T>>(&mut self, other: &Cyclotomic<T, R>, subtract: bool) {
        let n = lcm(self.conductor(), other.conductor());
        if n != self.conductor() {
            *self = self.embed(n);
        }

        let factor = n / other.conductor();
        let store = self.store_mut();
        for (e, c) in other.terms() {
            if subtract {
                store.sub_at(e * factor, c.clone());
            } else {
                store.add_at(e * factor, c.clone());
            }
        }
    }

    /// Multiplies by `other`, accumulating in `workspace`.
    ///
    /// The result is in `self`'s store layout at the lcm conductor.
    #[must_use]
    pub fn mul_with<R: CoeffStore<T>>(
        &self,
        other: &Cyclotomic<T, R>,
        workspace: &mut Workspace<T>,
    ) -> Self {
        let n = lcm(self.conductor(), other.conductor());
        let fa = n / self.conductor();
        let fb = n / other.conductor();

        let buffer = workspace.prepare(n);
        for (e1, a) in self.terms() {
            for (e2, b) in other.terms() {
                let slot = &mut buffer[(e1 * fa + e2 * fb) % n];
                let current = mem::replace(slot, T::zero());
                *slot = current + a.clone() * b.clone();
            }
        }

        Self::from_store(S::from_terms(n, workspace.drain()))
    }

    /// Adds `r` to the constant coefficient.
    #[must_use]
    pub fn scalar_add(&self, r: T) -> Self {
        let mut out = self.clone();
        out.store_mut().add_at(0, r);
        out
    }

    /// Subtracts `r` from the constant coefficient.
    #[must_use]
    pub fn scalar_sub(&self, r: T) -> Self {
        let mut out = self.clone();
        out.store_mut().sub_at(0, r);
        out
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &T) -> Self {
        let mut out = self.clone();
        out.scale_mut(c);
        out
    }

    /// Multiplies every coefficient by `c` in place.
    pub fn scale_mut(&mut self, c: &T) {
        if c.is_zero() {
            self.store_mut().clear();
            return;
        }
        self.store_mut().map_nonzero(|v| {
            let current = mem::replace(v, T::zero());
            *v = current * c.clone();
        });
    }

    /// Resets every coefficient to zero, keeping the conductor.
    pub fn set_zero(&mut self) {
        self.store_mut().clear();
    }

    /// Divides every coefficient exactly by `d`, after normalizing.
    ///
    /// # Errors
    ///
    /// Returns [`CycloError::DivisionByZero`] if `d` is zero and
    /// [`CycloError::InexactDivision`] if some coefficient has no exact
    /// quotient.
    pub fn div_exact(&self, d: &T) -> Result<Self> {
        if d.is_zero() {
            return Err(CycloError::DivisionByZero);
        }

        let normal = self.normal_view();
        let mut store = S::zeroed(self.conductor());
        for (e, c) in normal.terms() {
            let quotient = c.div_exact(d).ok_or_else(|| CycloError::InexactDivision {
                exponent: e,
                coefficient: format!("{c:?}"),
                divisor: format!("{d:?}"),
            })?;
            store.set(e, quotient);
        }
        Ok(Self::from_store(store))
    }

    /// Raises to a non-negative power by repeated squaring.
    #[must_use]
    pub fn pow(&self, mut exp: u32) -> Self {
        let mut workspace = Workspace::new();
        let mut result = Self::one(self.conductor());
        let mut base = self.clone();

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul_with(&base, &mut workspace);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul_with(&base, &mut workspace);
            }
        }
        result
    }
}

impl<T: FieldCoefficient, S: CoeffStore<T>> Cyclotomic<T, S> {
    /// Divides every coefficient by the scalar `d`.
    ///
    /// # Errors
    ///
    /// Returns [`CycloError::DivisionByZero`] if `d` is zero.
    pub fn scalar_div(&self, d: &T) -> Result<Self> {
        let inverse = d.inv().ok_or(CycloError::DivisionByZero)?;
        Ok(self.scale(&inverse))
    }
}

macro_rules! additive_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $subtract:expr) => {
        impl<T: Coefficient, S: CoeffStore<T>, R: CoeffStore<T>> $assign<&Cyclotomic<T, R>>
            for Cyclotomic<T, S>
        {
            fn $assign_method(&mut self, rhs: &Cyclotomic<T, R>) {
                self.accumulate(rhs, $subtract);
            }
        }

        impl<T: Coefficient, S: CoeffStore<T>, R: CoeffStore<T>> $assign<Cyclotomic<T, R>>
            for Cyclotomic<T, S>
        {
            fn $assign_method(&mut self, rhs: Cyclotomic<T, R>) {
                self.accumulate(&rhs, $subtract);
            }
        }

        impl<T: Coefficient, S: CoeffStore<T>, R: CoeffStore<T>> $op<&Cyclotomic<T, R>>
            for &Cyclotomic<T, S>
        {
            type Output = Cyclotomic<T, S>;

            fn $method(self, rhs: &Cyclotomic<T, R>) -> Self::Output {
                let mut out = self.clone();
                out.accumulate(rhs, $subtract);
                out
            }
        }

        impl<T: Coefficient, S: CoeffStore<T>, R: CoeffStore<T>> $op<Cyclotomic<T, R>>
            for &Cyclotomic<T, S>
        {
            type Output = Cyclotomic<T, S>;

            fn $method(self, rhs: Cyclotomic<T, R>) -> Self::Output {
                let mut out = self.clone();
                out.accumulate(&rhs, $subtract);
                out
            }
        }

        impl<T: Coefficient, S: CoeffStore<T>, R: CoeffStore<T>> $op<&Cyclotomic<T, R>>
            for Cyclotomic<T, S>
        {
            type Output = Cyclotomic<T, S>;

            fn $method(mut self, rhs: &Cyclotomic<T, R>) -> Self::Output {
                self.accumulate(rhs, $subtract);
                self
            }
        }

        impl<T: Coefficient, S: CoeffStore<T>, R: CoeffStore<T>> $op<Cyclotomic<T, R>>
            for Cyclotomic<T, S>
        {
            type Output = Cyclotomic<T, S>;

            fn $method(mut self, rhs: Cyclotomic<T, R>) -> Self::Output {
                self.accumulate(&rhs, $subtract);
                self
            }
        }
    };
}

additive_op!(Add, add, AddAssign, add_assign, false);
additive_op!(Sub, sub, SubAssign, sub_assign, true);

macro_rules! mul_op {
    ($lhs:ty, $rhs:ty) => {
        impl<T: Coefficient, S: CoeffStore<T>, R: CoeffStore<T>> Mul<$rhs> for $lhs {
            type Output = Cyclotomic<T, S>;

            fn mul(self, rhs: $rhs) -> Self::Output {
                let lhs: &Cyclotomic<T, S> = self.borrow();
                let rhs: &Cyclotomic<T, R> = rhs.borrow();
                lhs.mul_with(rhs, &mut Workspace::new())
            }
        }
    };
}

mul_op!(&Cyclotomic<T, S>, &Cyclotomic<T, R>);
mul_op!(&Cyclotomic<T, S>, Cyclotomic<T, R>);
mul_op!(Cyclotomic<T, S>, &Cyclotomic<T, R>);
mul_op!(Cyclotomic<T, S>, Cyclotomic<T, R>);

// The product is built in a fresh buffer before it replaces `self`.
impl<T: Coefficient, S: CoeffStore<T>, R: CoeffStore<T>> MulAssign<&Cyclotomic<T, R>>
    for Cyclotomic<T, S>
{
    fn mul_assign(&mut self, rhs: &Cyclotomic<T, R>) {
        let product = self.mul_with(rhs, &mut Workspace::new());
        *self = product;
    }
}

impl<T: Coefficient, S: CoeffStore<T>, R: CoeffStore<T>> MulAssign<Cyclotomic<T, R>>
    for Cyclotomic<T, S>
{
    fn mul_assign(&mut self, rhs: Cyclotomic<T, R>) {
        *self *= &rhs;
    }
}

impl<T: Coefficient, S: CoeffStore<T>> Neg for Cyclotomic<T, S> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.store_mut().map_nonzero(|v| {
            let current = mem::replace(v, T::zero());
            *v = -current;
        });
        self
    }
}

impl<T: Coefficient, S: CoeffStore<T>> Neg for &Cyclotomic<T, S> {
    type Output = Cyclotomic<T, S>;

    fn neg(self) -> Cyclotomic<T, S> {
        -self.clone()
    }
}
