//! # cyclos-basis
//!
//! The canonical spanning sets of cyclotomic fields.
//!
//! This crate provides:
//! - The top-digit basis of `Q(ζₙ)` in terms of exponents of `ζₙ`
//! - The prime-power decomposition of a conductor, carrying the linear
//!   relations the normalizer rewrites with
//! - A read-mostly cache keyed by conductor
//!
//! ## Design Principles
//!
//! - **Tensor structure**: `Q(ζₙ) = ⊗ Q(ζ_{p^ν})`, so admissibility of an
//!   exponent is decided one prime power at a time
//! - **Publish once**: cached bases are shared as `Arc<Basis>` and never
//!   mutated after insertion

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cache;
pub mod top_digit;

#[cfg(test)]
mod proptests;

pub use cache::{basis, BasisCache};
pub use top_digit::{Basis, PrimePowerComponent};
