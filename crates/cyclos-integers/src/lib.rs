//! # cyclos-integers
//!
//! Exact scalar arithmetic for the cyclos cyclotomic engine.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//! - Word-sized number theory on conductors (`number_theory`)
//!
//! Conductors are plain `usize` values; everything that manipulates
//! exponents modulo a conductor lives in [`number_theory`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod number_theory;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
