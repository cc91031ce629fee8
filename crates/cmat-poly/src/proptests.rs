//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use cmat_complex::{Complex, ComputeForm};

    use crate::polynomial::Polynomial;
    use crate::roots::RootFinderConfig;

    const FORM: ComputeForm = ComputeForm::Cartesian;

    // Small Gaussian-integer coefficients
    fn small_coeff() -> impl Strategy<Value = Complex> {
        (-9i32..10, -9i32..10)
            .prop_map(|(re, im)| Complex::from_cartesian(f64::from(re), f64::from(im)))
    }

    // Polynomials of degree 0-4
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Polynomial::from_coefficients)
    }

    fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // Divisors with a unit leading coefficient keep division exact.
    fn monic_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 0..=3).prop_map(|mut coefficients| {
            coefficients.push(Complex::ONE);
            Polynomial::from_coefficients(coefficients)
        })
    }

    // Up to three distinct integer roots
    fn distinct_roots() -> impl Strategy<Value = Vec<i32>> {
        proptest::sample::subsequence((-5i32..6).collect::<Vec<_>>(), 1..=3)
    }

    // One or two distinct integer roots, each repeated up to three times
    fn repeated_roots() -> impl Strategy<Value = Vec<i32>> {
        proptest::sample::subsequence((-3i32..4).collect::<Vec<_>>(), 1..=2)
            .prop_flat_map(|distinct| {
                let len = distinct.len();
                (Just(distinct), proptest::collection::vec(1usize..=3, len))
            })
            .prop_map(|(distinct, multiplicities)| {
                distinct
                    .into_iter()
                    .zip(multiplicities)
                    .flat_map(|(root, m)| std::iter::repeat(root).take(m))
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_sub_inverts_add(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).sub(&b), a);
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b, FORM), b.mul(&a, FORM));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let lhs = a.mul(&b.add(&c), FORM);
            let rhs = a.mul(&b, FORM).add(&a.mul(&c, FORM));
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn poly_degree_of_product(a in nonzero_poly(), b in nonzero_poly()) {
            let product = a.mul(&b, FORM);
            prop_assert_eq!(product.degree(), Some(a.degree().unwrap() + b.degree().unwrap()));
        }

        #[test]
        fn poly_division_identity(a in small_poly(), b in monic_poly()) {
            let (q, r) = a.div_rem(&b, FORM).unwrap();
            prop_assert_eq!(q.mul(&b, FORM).add(&r), a);
            if let Some(rd) = r.degree() {
                prop_assert!(rd < b.degree().unwrap());
            }
        }

        #[test]
        fn poly_substitute_is_homomorphism(a in small_poly(), b in small_poly(), x in small_coeff()) {
            let sum = a.add(&b).substitute(&x, FORM);
            prop_assert_eq!(sum, a.substitute(&x, FORM).add(&b.substitute(&x, FORM)));
        }

        #[test]
        fn poly_recovers_integer_roots(roots in distinct_roots()) {
            let p = roots.iter().fold(Polynomial::constant(1), |acc, &r| {
                acc.mul(&Polynomial::linear_monic(r), FORM)
            });
            let mut found = p.find_roots(&RootFinderConfig::default());
            prop_assert_eq!(found.len(), roots.len());
            for root in &found {
                prop_assert!(p.substitute(root, FORM).abs() < 1e-6);
            }
            found.sort_by(|a, b| a.real().total_cmp(&b.real()));
            let expected: Vec<Complex> = roots.iter().copied().map(Complex::from).collect();
            prop_assert_eq!(found, expected);
        }

        #[test]
        fn poly_recovers_repeated_integer_roots(roots in repeated_roots()) {
            let p = roots.iter().fold(Polynomial::constant(1), |acc, &r| {
                acc.mul(&Polynomial::linear_monic(r), FORM)
            });
            let mut found = p.find_roots(&RootFinderConfig::default());
            found.sort_by(|a, b| a.real().total_cmp(&b.real()));
            let expected: Vec<Complex> = roots.iter().copied().map(Complex::from).collect();
            prop_assert_eq!(found, expected);
        }
    }
}
