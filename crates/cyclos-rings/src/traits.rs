//! Coefficient traits.
//!
//! These traits are the contract between the cyclotomic engine and the
//! numeric type its coefficients live in.

use std::fmt::Debug;
use std::hash::Hasher;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// A commutative ring usable as the coefficient type of a cyclotomic number.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
///
/// Floating implementations satisfy these only approximately; `EXACT`
/// tells the engine which regime it is in.
pub trait Coefficient:
    Clone
    + PartialEq
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// True when arithmetic carries no rounding error.
    const EXACT: bool;

    /// Embeds a machine integer.
    fn from_i64(n: i64) -> Self;

    /// Returns the nearest `f64`.
    fn to_f64(&self) -> f64;

    /// Size used to pick the dominant coefficient of a number.
    fn magnitude(&self) -> f64 {
        self.to_f64().abs()
    }

    /// Divides exactly.
    ///
    /// Returns `None` if `divisor` is zero or the quotient does not exist
    /// in this type.
    fn div_exact(&self, divisor: &Self) -> Option<Self>;

    /// Feeds the value into a hasher.
    ///
    /// Values that compare equal must hash equally; this is what lets
    /// floating types take part in hashing at all.
    fn hash_coeff<H: Hasher>(&self, state: &mut H);
}

/// A coefficient type that is a field.
pub trait FieldCoefficient: Coefficient + Div<Output = Self> {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Machine epsilon for floating types, `None` for exact ones.
    fn epsilon() -> Option<f64>;

    /// Converts an approximate real value.
    ///
    /// Exact types refuse, since the value would not be exact.
    fn from_real(x: f64) -> Option<Self>;
}
