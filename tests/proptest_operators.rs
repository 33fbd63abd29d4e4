use curtain::{Operator, is_condition_met};
use proptest::prelude::*;

proptest! {
    /// The raw entry point is total: any combination of strings is a valid
    /// input and must never panic.
    #[test]
    fn never_panics_on_arbitrary_input(
        field in any::<String>(),
        op in any::<String>(),
        value in any::<String>(),
    ) {
        let _ = is_condition_met(&field, &op, &value);
    }

    /// Anything outside the closed operator set fails closed.
    #[test]
    fn unknown_operator_is_always_false(
        field in any::<String>(),
        op in "[a-z_]{1,12}",
        value in any::<String>(),
    ) {
        prop_assume!(op.parse::<Operator>().is_err());
        prop_assert!(!is_condition_met(&field, &op, &value));
    }

    /// Each negative operator is the exact complement of its positive twin.
    #[test]
    fn negation_pairs(field in any::<String>(), value in any::<String>()) {
        prop_assert_ne!(
            Operator::Equals.is_met(&field, &value),
            Operator::NotEquals.is_met(&field, &value)
        );
        prop_assert_ne!(
            Operator::Contains.is_met(&field, &value),
            Operator::NotContains.is_met(&field, &value)
        );
        prop_assert_ne!(
            Operator::IsEmpty.is_met(&field, &value),
            Operator::NotEmpty.is_met(&field, &value)
        );
    }

    /// A value cannot be both greater and less than the same bound.
    #[test]
    fn ordering_is_mutually_exclusive(field in "-?[0-9]{1,5}", value in "-?[0-9]{1,5}") {
        let gt = Operator::GreaterThan.is_met(&field, &value);
        let lt = Operator::LessThan.is_met(&field, &value);
        prop_assert!(!(gt && lt));
    }

    #[test]
    fn equals_agrees_with_string_equality(field in "[a-z]{0,4}", value in "[a-z]{0,4}") {
        prop_assert_eq!(Operator::Equals.is_met(&field, &value), field == value);
    }

    /// Emptiness checks never look at the stored operand.
    #[test]
    fn emptiness_ignores_the_operand(field in any::<String>(), value in any::<String>()) {
        prop_assert_eq!(
            Operator::IsEmpty.is_met(&field, &value),
            Operator::IsEmpty.is_met(&field, "")
        );
    }

    /// Numeric operators refuse non-numeric field values outright.
    #[test]
    fn non_numeric_field_never_orders(value in any::<String>()) {
        prop_assert!(!Operator::GreaterThan.is_met("not a number", &value));
        prop_assert!(!Operator::LessThan.is_met("not a number", &value));
    }
}
