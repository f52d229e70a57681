//! # cyclos-rings
//!
//! Coefficient structures for cyclotomic arithmetic.
//!
//! A cyclotomic number is a finite sum `Σ cₑ·ζₙᵉ`; this crate describes
//! what the coefficients `cₑ` must support.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Coefficient          (ring: Integer, i64, Rational, f64)
//!  └── FieldCoefficient (field: Rational, f64)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod floats;
pub mod integers;
pub mod rationals;
pub mod traits;

pub use traits::{Coefficient, FieldCoefficient};
