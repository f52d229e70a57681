//! Property-based tests for the top-digit basis.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use cyclos_integers::number_theory::{euler_phi, gcd};

    use crate::Basis;

    fn conductor() -> impl Strategy<Value = usize> {
        1usize..400usize
    }

    proptest! {
        #[test]
        fn dimension_is_totient(n in conductor()) {
            prop_assert_eq!(Basis::new(n).len(), euler_phi(n));
        }

        #[test]
        fn membership_matches_exponents(n in conductor()) {
            let basis = Basis::new(n);
            let listed: Vec<usize> = (0..n).filter(|&e| basis.contains(e)).collect();
            prop_assert_eq!(listed.as_slice(), basis.exponents());
        }

        #[test]
        fn units_are_coprime_residues(n in conductor(), i in 0usize..400usize) {
            let basis = Basis::new(n);
            prop_assert_eq!(basis.is_unit(i), gcd(i, n) == 1);
        }

        #[test]
        fn components_multiply_to_conductor(n in conductor()) {
            let basis = Basis::new(n);
            let product: usize = basis.components().iter().map(|c| c.prime_power).product();
            prop_assert_eq!(product, n);
            for c in basis.components() {
                prop_assert_eq!(c.prime_power * c.complement, n);
                prop_assert_eq!(c.step * c.prime, n);
            }
        }

        #[test]
        fn forbidden_exponents_rewrite_into_admissible_ones(n in 2usize..200usize) {
            let basis = Basis::new(n);
            for c in basis.components() {
                for e in 0..n {
                    let targets: Vec<usize> = c.relation(e).collect();
                    prop_assert_eq!(targets.len(), c.prime - 1);
                    if c.is_forbidden(e) {
                        prop_assert!(targets.iter().all(|&t| !c.is_forbidden(t)));
                    }
                }
            }
        }
    }
}
