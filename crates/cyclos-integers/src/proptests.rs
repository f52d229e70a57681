//! Property-based tests for exact scalars and conductor number theory.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::number_theory::{euler_phi, factor, gcd, lcm, mod_inverse};
    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn conductor() -> impl Strategy<Value = usize> {
        1usize..2000usize
    }

    proptest! {
        #[test]
        fn exact_division_inverts_multiplication(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let product = &a * &b;
            prop_assert_eq!(product.checked_div_exact(&b), Some(a));
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(
                &a * &(&b + &c),
                &(&a * &b) + &(&a * &c)
            );
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let inv = a.checked_recip().expect("non-zero rational has an inverse");
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_sub_self_is_zero(num in small_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn factorization_multiplies_back(n in conductor()) {
            let product: usize = factor(n).into_iter().map(|(p, e)| p.pow(e)).product();
            prop_assert_eq!(product, n);
        }

        #[test]
        fn phi_counts_units(n in 1usize..300usize) {
            let units = (0..n).filter(|&k| gcd(k, n) == 1).count();
            prop_assert_eq!(euler_phi(n), units);
        }

        #[test]
        fn gcd_times_lcm(a in conductor(), b in conductor()) {
            prop_assert_eq!(gcd(a, b) * lcm(a, b), a * b);
        }

        #[test]
        fn inverse_exists_exactly_for_units(a in 0usize..500usize, m in 2usize..500usize) {
            match mod_inverse(a, m) {
                Some(inv) => prop_assert_eq!(a * inv % m, 1),
                None => prop_assert!(gcd(a, m) != 1),
            }
        }
    }
}
