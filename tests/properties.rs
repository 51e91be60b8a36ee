//! Property-based tests for value coercions and arithmetic.

use std::cmp::Ordering;

use condex::{Variant, evaluate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn boolean_coercion_of_numbers(n in any::<f64>()) {
        let once = Variant::Number(n).coerce_boolean();
        let expected = if n != 0.0 { 1.0 } else { 0.0 };

        prop_assert_eq!(once.as_number(), expected);
        prop_assert_eq!(once.coerce_boolean(), once.clone());
    }

    #[test]
    fn integral_numbers_print_without_fraction(n in -1_000_000i32..1_000_000) {
        let value = Variant::from(n);
        prop_assert_eq!(value.as_string(), n.to_string());
    }

    #[test]
    fn numbers_survive_string_round_trip(n in -1.0e12f64..1.0e12) {
        let text = Variant::Number(n).to_string();
        prop_assert_eq!(Variant::from(text).as_number(), n);
    }

    #[test]
    fn number_comparison_is_antisymmetric(a in any::<f64>(), b in any::<f64>()) {
        let left = Variant::Number(a);
        let right = Variant::Number(b);

        prop_assert_eq!(left.compare_to(&left), Ordering::Equal);
        prop_assert_eq!(left.compare_to(&right), right.compare_to(&left).reverse());
    }

    #[test]
    fn numeric_add_commutes(a in -1.0e9f64..1.0e9, b in -1.0e9f64..1.0e9) {
        let left = Variant::Number(a);
        let right = Variant::Number(b);

        prop_assert_eq!(left.add(&right), right.add(&left));
    }

    #[test]
    fn strings_other_than_false_are_true(s in "[a-zA-Z ]{0,8}") {
        prop_assume!(!s.eq_ignore_ascii_case("false"));
        prop_assert!(Variant::from(s.as_str()).as_boolean());
    }

    #[test]
    fn evaluated_arithmetic_matches_rust(a in -1000i32..1000, b in -1000i32..1000, c in 1i32..100) {
        let source = format!("{a} + {b} * {c} - {a} % {c}");
        let expected = f64::from(a) + f64::from(b) * f64::from(c) - f64::from(a) % f64::from(c);

        prop_assert_eq!(evaluate(&source).unwrap(), Variant::Number(expected));
    }
}
