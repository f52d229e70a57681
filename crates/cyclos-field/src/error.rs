//! Errors raised by cyclotomic arithmetic.

use thiserror::Error;

/// Errors that can occur during cyclotomic arithmetic.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CycloError {
    /// Inversion of zero, or division by a zero scalar.
    #[error("division by zero")]
    DivisionByZero,

    /// `ζ ↦ ζᵏ` is not an automorphism when `k` shares a factor with the conductor.
    #[error("power {power} is not a unit modulo conductor {conductor}")]
    NotAnAutomorphism {
        /// The requested power.
        power: i64,
        /// The conductor of the operand.
        conductor: usize,
    },

    /// Exact division left a remainder in some coefficient.
    #[error("coefficient {coefficient} at exponent {exponent} is not divisible by {divisor}")]
    InexactDivision {
        /// Exponent of the offending coefficient.
        exponent: usize,
        /// The coefficient, rendered with `Debug`.
        coefficient: String,
        /// The divisor, rendered with `Debug`.
        divisor: String,
    },

    /// Conversion to a real number of a value with an imaginary part.
    #[error("value has imaginary part {imaginary}")]
    NotReal {
        /// The imaginary part of the approximation.
        imaginary: f64,
    },

    /// Embedding into a conductor that is not a multiple of the current one.
    #[error("conductor {conductor} does not divide {target}")]
    NotAMultiple {
        /// The current conductor.
        conductor: usize,
        /// The requested conductor.
        target: usize,
    },
}

/// Result type for cyclotomic operations.
pub type Result<T> = std::result::Result<T, CycloError>;
