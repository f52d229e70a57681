//! Property-based tests for cyclotomic arithmetic.

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use proptest::prelude::*;

    use cyclos_integers::Rational;

    use crate::config::Tolerance;
    use crate::cyclotomic::{Cyclotomic, SparseCyclotomic};

    type Q = Cyclotomic<Rational>;

    fn conductor() -> impl Strategy<Value = usize> {
        prop::sample::select(vec![1usize, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 15])
    }

    // Strategy for numbers with a handful of small terms
    fn cyclotomic() -> impl Strategy<Value = Q> {
        conductor().prop_flat_map(|n| {
            proptest::collection::vec((0i64..60i64, -9i64..10i64), 0..5).prop_map(move |terms| {
                Q::from_terms(n, terms.into_iter().map(|(e, c)| (e, Rational::from(c))))
            })
        })
    }

    // Small coefficients keep the conjugate product well-conditioned in f64
    fn float_cyclotomic() -> impl Strategy<Value = Cyclotomic<f64>> {
        prop::sample::select(vec![3usize, 4, 5, 7, 8, 12]).prop_flat_map(|n| {
            proptest::collection::vec((0i64..24i64, -3i64..4i64), 1..4).prop_map(move |terms| {
                Cyclotomic::from_terms(n, terms.into_iter().map(|(e, c)| (e, c as f64)))
            })
        })
    }

    fn nonzero_cyclotomic() -> impl Strategy<Value = Q> {
        cyclotomic().prop_filter("number must be non-zero", |c| !c.is_zero())
    }

    fn hash_of(c: &Q) -> u64 {
        let mut hasher = DefaultHasher::new();
        c.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        // Field axioms, up to canonical equality

        #[test]
        fn add_associative(a in cyclotomic(), b in cyclotomic(), c in cyclotomic()) {
            prop_assert_eq!(&a + &(&b + &c), &(&a + &b) + &c);
        }

        #[test]
        fn mul_commutative(a in cyclotomic(), b in cyclotomic()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_associative(a in cyclotomic(), b in cyclotomic(), c in cyclotomic()) {
            prop_assert_eq!(&a * &(&b * &c), &(&a * &b) * &c);
        }

        #[test]
        fn distributive(a in cyclotomic(), b in cyclotomic(), c in cyclotomic()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn additive_inverse(a in cyclotomic()) {
            prop_assert!((&a + &(-&a)).is_zero());
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn inverse_multiplies_to_one(a in nonzero_cyclotomic()) {
            let inv = a.try_inv().unwrap();
            prop_assert!((&a * &inv).is_one());
        }

        #[test]
        fn float_inverse_multiplies_to_one(f in float_cyclotomic()) {
            let exact: Q = f.map_coeffs(|c: &f64| Rational::from(*c as i64));
            prop_assume!(!exact.is_zero());
            let inv = f.try_inv().unwrap();
            prop_assert!((&f * &inv).approx_eq_scalar_with(1.0, &Tolerance::for_terms(64)));
        }

        // Canonical form

        #[test]
        fn normalize_idempotent(a in cyclotomic()) {
            let once = a.normalized();
            let twice = once.normalized();
            prop_assert!(once.terms().eq(twice.terms()));
        }

        #[test]
        fn embedding_preserves_value(a in cyclotomic(), k in 1usize..5usize) {
            let m = a.conductor() * k;
            prop_assert_eq!(a.embed(m), a.clone());
            prop_assert_eq!(hash_of(&a.embed(m)), hash_of(&a));
        }

        #[test]
        fn minimal_conductor_divides(a in cyclotomic()) {
            let reduced = a.reduce_to_minimal_conductor();
            prop_assert_eq!(a.conductor() % reduced.conductor(), 0);
            prop_assert!(reduced.is_normalized());
            prop_assert_eq!(&reduced, &a);
        }

        #[test]
        fn equal_implies_equal_hash(a in cyclotomic(), b in cyclotomic()) {
            // a + b - b is a different representation of a
            let c = &(&a + &b) - &b;
            prop_assert_eq!(&c, &a);
            prop_assert_eq!(hash_of(&c), hash_of(&a));
        }

        #[test]
        fn store_layouts_agree(a in cyclotomic(), b in cyclotomic()) {
            let sa: SparseCyclotomic<Rational> = a.to_sparse();
            let dense = &a * &b;
            let sparse = &sa * &b;
            let sparse_as_dense = sparse.to_dense();
            let mixed = &a * &b.to_sparse();
            prop_assert_eq!(dense.store(), sparse_as_dense.store());
            prop_assert_eq!(sparse_as_dense.store(), mixed.store());
        }

        // Galois action

        #[test]
        fn complex_conjugation_is_involution(a in cyclotomic()) {
            prop_assert!(a.complex_conjugate().complex_conjugate().terms().eq(a.terms()));
        }

        #[test]
        fn galois_conjugation_is_multiplicative(a in cyclotomic(), b in cyclotomic(), k in 1i64..60i64) {
            let n = (&a * &b).conductor();
            let a = a.embed(n);
            let b = b.embed(n);
            if let (Ok(sa), Ok(sb)) = (a.galois_conjugate(k), b.galois_conjugate(k)) {
                prop_assert_eq!((&a * &b).galois_conjugate(k).unwrap(), &sa * &sb);
            }
        }

        #[test]
        fn norm_times_conjugate_is_real(a in cyclotomic()) {
            prop_assert!((&a * &a.complex_conjugate()).is_real());
        }
    }
}
