//! The top-digit basis of a cyclotomic field.
//!
//! For `n = Π p^ν` the field `Q(ζₙ)` is the tensor product of the fields
//! `Q(ζ_{p^ν})`, and `ζₙᵉ` factors as a product of `p^ν`-th roots of unity
//! with local exponents
//!
//! ```text
//! a_p(e) = e · (n / p^ν)⁻¹  mod p^ν
//! ```
//!
//! In each factor the basis keeps exactly the local exponents whose top
//! base-`p` digit (weight `p^(ν-1)`) is nonzero: `p - 1` choices of that
//! digit for odd `p`, one choice for `p = 2`, and free lower digits. This
//! gives `φ(p^ν)` local exponents per prime and `φ(n)` in total.
//!
//! For odd primes this is the index set of the Zumbroich basis. For `p = 2`
//! Zumbroich keeps the local exponents with top digit 0 instead, so this
//! basis is `{2, 3}` at conductor 4 where Zumbroich's is `{0, 1}`. Both
//! span the field; the top-digit rule lets every prime share one rewrite.
//!
//! An exponent with top digit 0 for some `p` is rewritten through
//!
//! ```text
//! ζₙᵉ = -Σ_{j=1}^{p-1} ζₙ^(e + j·n/p)
//! ```
//!
//! which raises that digit to `1..p-1` and leaves every other prime's local
//! exponent untouched, because `n/p ≡ 0 (mod q^μ)` for the other prime
//! powers `q^μ`.

use cyclos_integers::number_theory::{euler_phi, factor, mod_inverse, mul_mod};
use smallvec::SmallVec;

/// One prime-power factor `p^ν ‖ n` of a conductor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimePowerComponent {
    /// The prime `p`.
    pub prime: usize,
    /// The multiplicity `ν` of `p` in the conductor.
    pub exponent: u32,
    /// `p^ν`.
    pub prime_power: usize,
    /// `n / p^ν`, the complementary factor.
    pub complement: usize,
    /// `n / p`, the exponent of a primitive `p`-th root of unity.
    pub step: usize,
    conductor: usize,
    /// `complement⁻¹ mod p^ν`.
    unit: usize,
    /// `p^(ν-1)`, the weight of the top local digit.
    top_weight: usize,
}

impl PrimePowerComponent {
    fn new(conductor: usize, prime: usize, exponent: u32) -> Self {
        let prime_power = prime.pow(exponent);
        let complement = conductor / prime_power;
        let unit = mod_inverse(complement % prime_power, prime_power)
            .unwrap_or_else(|| unreachable!("{complement} is coprime to {prime_power}"));

        Self {
            prime,
            exponent,
            prime_power,
            complement,
            step: conductor / prime,
            conductor,
            unit,
            top_weight: prime_power / prime,
        }
    }

    /// The local exponent `a_p(e)` of `ζₙᵉ` in `Q(ζ_{p^ν})`.
    #[must_use]
    pub fn local_exponent(&self, e: usize) -> usize {
        mul_mod(e % self.prime_power, self.unit, self.prime_power)
    }

    /// The top base-`p` digit of the local exponent.
    #[must_use]
    pub fn top_digit(&self, e: usize) -> usize {
        self.local_exponent(e) / self.top_weight
    }

    /// True when `e` must be rewritten before it can appear in normal form.
    #[must_use]
    pub fn is_forbidden(&self, e: usize) -> bool {
        self.top_digit(e) == 0
    }

    /// The exponents `e + j·n/p` for `j = 1..p`.
    ///
    /// `ζₙᵉ` equals minus the sum of the roots at these exponents.
    pub fn relation(&self, e: usize) -> impl Iterator<Item = usize> + '_ {
        (1..self.prime).map(move |j| (e + j * self.step) % self.conductor)
    }

    /// The member of `e`'s coset `e + ⟨n/p⟩` whose top local digit is 0.
    #[must_use]
    pub fn coset_base(&self, e: usize) -> usize {
        let shift = mul_mod(self.top_digit(e), self.step, self.conductor);
        (e + self.conductor - shift) % self.conductor
    }
}

/// The top-digit basis of `Q(ζₙ)` for one conductor.
#[derive(Clone, Debug)]
pub struct Basis {
    conductor: usize,
    /// Basis exponents in ascending order.
    exponents: Vec<usize>,
    /// Membership indexed by exponent.
    members: Vec<bool>,
    components: SmallVec<[PrimePowerComponent; 4]>,
}

impl Basis {
    /// Computes the basis for conductor `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "conductor must be positive");

        let components: SmallVec<[PrimePowerComponent; 4]> = factor(n)
            .into_iter()
            .map(|(p, nu)| PrimePowerComponent::new(n, p, nu))
            .collect();

        let members: Vec<bool> = (0..n)
            .map(|e| components.iter().all(|c| !c.is_forbidden(e)))
            .collect();
        let exponents: Vec<usize> = (0..n).filter(|&e| members[e]).collect();

        debug_assert_eq!(exponents.len(), euler_phi(n));

        Self {
            conductor: n,
            exponents,
            members,
            components,
        }
    }

    /// Returns the conductor.
    #[must_use]
    pub fn conductor(&self) -> usize {
        self.conductor
    }

    /// Returns the basis exponents in ascending order.
    #[must_use]
    pub fn exponents(&self) -> &[usize] {
        &self.exponents
    }

    /// Returns the dimension φ(n).
    #[must_use]
    pub fn len(&self) -> usize {
        self.exponents.len()
    }

    /// Always false; every field has a nonempty basis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Returns true if `ζₙᵉ` is a basis element.
    ///
    /// Exponents are taken modulo the conductor.
    #[must_use]
    pub fn contains(&self, e: usize) -> bool {
        self.members[e % self.conductor]
    }

    /// The prime-power decomposition of the conductor, ascending by prime.
    #[must_use]
    pub fn components(&self) -> &[PrimePowerComponent] {
        &self.components
    }

    /// True when `i` shares no factor with the conductor.
    ///
    /// Exactly these `i` give Galois automorphisms `ζₙ ↦ ζₙⁱ`.
    #[must_use]
    pub fn is_unit(&self, i: usize) -> bool {
        self.components.iter().all(|c| i % c.prime != 0)
    }
}
