//! # cyclos-field
//!
//! Exact arithmetic in cyclotomic fields `Q(ζₙ)`.
//!
//! This crate provides:
//! - Dense and sparse coefficient stores behind one trait
//! - Reduction to the canonical basis and to the minimal conductor
//! - Ring operations across conductors and store layouts
//! - Galois conjugation and inversion through the field norm
//! - Equality and hashing consistent with the canonical form
//!
//! ## Canonical form
//!
//! Numbers are not kept normalized. Arithmetic works on whatever
//! representation it is given; equality, hashing, and the predicates
//! compare normal forms computed on copies. Use
//! [`Cyclotomic::eq_normalizing`] or [`Cyclotomic::normalize`] to move an
//! operand into normal form in place.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod complex;
pub mod config;
pub mod cyclotomic;
pub mod embedding;
pub mod equality;
pub mod error;
pub mod galois;
pub mod inverse;
pub mod normal_form;
pub mod store;

#[cfg(test)]
mod proptests;

pub use arith::Workspace;
pub use complex::Complex;
pub use config::{InversionConfig, Tolerance};
pub use cyclotomic::{Cyclotomic, SparseCyclotomic};
pub use error::{CycloError, Result};
pub use store::{CoeffStore, DenseStore, SparseStore};
