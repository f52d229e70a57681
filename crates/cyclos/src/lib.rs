//! # Cyclos
//!
//! Exact arithmetic with roots of unity.
//!
//! A [`Cyclotomic`](field::Cyclotomic) number is a sum `Σ cₑ·ζₙᵉ` with
//! rational, integer, or floating coefficients. Numbers of different
//! conductors mix freely; equality and hashing see through the many
//! representations of one field element.
//!
//! ## Features
//!
//! - **Exact scalars**: arbitrary precision integers and rationals
//! - **Canonical form**: top-digit basis with memoized bases per conductor
//! - **Field operations**: inversion through products of Galois conjugates
//! - **Two layouts**: dense and sparse coefficient stores
//!
//! ## Quick Start
//!
//! ```rust
//! use cyclos::prelude::*;
//!
//! let a: Cyclotomic<Rational> = Cyclotomic::from_terms(7, [(0, Rational::from(1)), (1, Rational::from(1))]);
//! let inv = a.try_inv().unwrap();
//! assert!((&a * &inv).is_one());
//!
//! let sum: Cyclotomic<Rational> = Cyclotomic::from_terms(5, (1..5).map(|e| (e, Rational::from(1))));
//! assert!(sum.eq_scalar(&Rational::from(-1)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use cyclos_basis as basis;
pub use cyclos_field as field;
pub use cyclos_integers as integers;
pub use cyclos_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use cyclos_basis::{basis, Basis, BasisCache};
    pub use cyclos_field::{
        CoeffStore, Complex, CycloError, Cyclotomic, DenseStore, InversionConfig, SparseCyclotomic,
        SparseStore, Tolerance, Workspace,
    };
    pub use cyclos_integers::{Integer, Rational};
    pub use cyclos_rings::{Coefficient, FieldCoefficient};
}
