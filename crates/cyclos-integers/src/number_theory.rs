//! Word-sized number theory on conductors and exponents.
//!
//! Conductors of cyclotomic fields are small enough to fit a machine word,
//! so these helpers work on `usize` and widen to `u128` where a product of
//! two residues could overflow.

/// Computes the greatest common divisor.
#[must_use]
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Computes the least common multiple.
///
/// Returns 0 if either argument is 0.
#[must_use]
pub fn lcm(a: usize, b: usize) -> usize {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Factors `n` into `(prime, exponent)` pairs with ascending primes.
///
/// Trial division; `factor(1)` is empty.
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn factor(mut n: usize) -> Vec<(usize, u32)> {
    assert!(n > 0, "cannot factor zero");
    let mut factors = Vec::new();

    let mut p = 2;
    while p * p <= n {
        if n % p == 0 {
            let mut e = 0;
            while n % p == 0 {
                n /= p;
                e += 1;
            }
            factors.push((p, e));
        }
        p += if p == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push((n, 1));
    }

    factors
}

/// Euler's totient φ(n).
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn euler_phi(n: usize) -> usize {
    factor(n)
        .into_iter()
        .map(|(p, e)| (p - 1) * p.pow(e - 1))
        .product()
}

/// Computes `a⁻¹ mod m` with the extended Euclidean algorithm.
///
/// Returns `None` when `gcd(a, m) != 1`. Every residue is its own inverse
/// modulo 1, so `mod_inverse(a, 1)` is `Some(0)`.
#[must_use]
pub fn mod_inverse(a: usize, m: usize) -> Option<usize> {
    if m == 1 {
        return Some(0);
    }

    let m_signed = i128::try_from(m).ok()?;
    let mut t = 0i128;
    let mut new_t = 1i128;
    let mut r = m_signed;
    let mut new_r = i128::try_from(a % m).ok()?;

    while new_r != 0 {
        let quotient = r / new_r;
        (t, new_t) = (new_t, t - quotient * new_t);
        (r, new_r) = (new_r, r - quotient * new_r);
    }

    if r != 1 {
        return None;
    }

    usize::try_from(t.rem_euclid(m_signed)).ok()
}

/// Computes `a · b mod m` without intermediate overflow.
///
/// # Panics
///
/// Panics if `m` is zero.
#[must_use]
pub fn mul_mod(a: usize, b: usize, m: usize) -> usize {
    assert!(m > 0, "modulus must be positive");
    let product = (a as u128) * (b as u128) % (m as u128);
    // product < m, so it fits back into usize
    product as usize
}

/// Reduces a signed exponent into `[0, m)`.
///
/// # Panics
///
/// Panics if `m` is zero.
#[must_use]
pub fn reduce_exponent(e: i64, m: usize) -> usize {
    assert!(m > 0, "modulus must be positive");
    let residue = i128::from(e).rem_euclid(m as i128);
    // residue < m
    residue as usize
}
