//! Property-based tests for complex arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Complex, ComputeForm};

    // Gaussian integers keep every exact result representable.
    fn small_complex() -> impl Strategy<Value = Complex> {
        (-20i32..20i32, -20i32..20i32)
            .prop_map(|(re, im)| Complex::from_cartesian(f64::from(re), f64::from(im)))
    }

    fn nonzero_complex() -> impl Strategy<Value = Complex> {
        small_complex().prop_filter("must be non-zero", |z| !z.is_zero())
    }

    fn any_form() -> impl Strategy<Value = ComputeForm> {
        prop_oneof![Just(ComputeForm::Polar), Just(ComputeForm::Cartesian)]
    }

    proptest! {
        #[test]
        fn add_commutative(a in small_complex(), b in small_complex()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn add_then_subtract(a in small_complex(), b in small_complex()) {
            prop_assert_eq!((a + b) - b, a);
        }

        #[test]
        fn polar_matches_cartesian_product(a in small_complex(), b in small_complex()) {
            prop_assert_eq!(
                a.multiply(&b, ComputeForm::Polar),
                a.multiply(&b, ComputeForm::Cartesian)
            );
        }

        #[test]
        fn divide_inverts_multiply(
            a in small_complex(),
            b in nonzero_complex(),
            form in any_form()
        ) {
            let product = a.multiply(&b, form);
            prop_assert_eq!(product.divide(&b, form), a);
        }

        #[test]
        fn reciprocal_is_inverse(a in nonzero_complex(), form in any_form()) {
            prop_assert_eq!(a.multiply(&a.reciprocal(form), form), Complex::ONE);
        }

        #[test]
        fn polar_power_matches_cartesian(a in small_complex(), n in 0i32..4) {
            prop_assert_eq!(
                a.powi(n, ComputeForm::Polar),
                a.powi(n, ComputeForm::Cartesian)
            );
        }

        #[test]
        fn conjugate_product_is_real(a in small_complex()) {
            let product = a * a.conjugate();
            prop_assert!(product.is_real());
            prop_assert_eq!(product, Complex::from_real(a.abs() * a.abs()));
        }

        #[test]
        fn polar_and_cartesian_agree(a in small_complex()) {
            let (r, theta) = a.polar();
            prop_assert_eq!(Complex::from_polar(r, theta), a);
        }
    }
}
