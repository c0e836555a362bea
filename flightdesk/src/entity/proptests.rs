//! Property-based tests for field rules and record construction.

use super::fields::{
    check_phone, IntRule, TextRule, CUSTOMER_FIRST_NAME, PILOT_NAME, PLANE_AGE, PLANE_MAKE,
    PLANE_MODEL, PLANE_SEATS, TECHNICIAN_NAME,
};
use super::NewPlane;
use proptest::prelude::*;

fn text_rules() -> impl Strategy<Value = TextRule> {
    prop_oneof![
        Just(PLANE_MAKE),
        Just(PLANE_MODEL),
        Just(PILOT_NAME),
        Just(TECHNICIAN_NAME),
        Just(CUSTOMER_FIRST_NAME),
    ]
}

fn int_rules() -> impl Strategy<Value = IntRule> {
    prop_oneof![Just(PLANE_AGE), Just(PLANE_SEATS)]
}

proptest! {
    // Values within the length limit are accepted, longer ones rejected
    #[test]
    fn text_rule_length_limit(rule in text_rules(), len in 0usize..300) {
        let value = "x".repeat(len);
        let accepted = rule.check(&value).is_ok();
        let expected = len <= rule.max_chars && (len > 0 || !rule.required);
        prop_assert_eq!(accepted, expected);
    }

    // Multi-byte input is measured in characters
    #[test]
    fn text_rule_counts_chars_not_bytes(len in 1usize..=32) {
        let value = "é".repeat(len);
        prop_assert!(PLANE_MAKE.check(&value).is_ok());
    }

    // Integer rules are inclusive at both ends
    #[test]
    fn int_rule_inclusive_bounds(rule in int_rules(), value in -20_000i64..20_000) {
        let accepted = rule.check(value).is_ok();
        prop_assert_eq!(accepted, value >= rule.min && value <= rule.max);
        prop_assert_eq!(accepted, rule.contains(value));
    }

    // Rejections always name the field and carry a message
    #[test]
    fn rejection_names_field(rule in int_rules(), value in 10_000i64..1_000_000) {
        let err = rule.check(value).unwrap_err();
        prop_assert_eq!(err.field.as_str(), rule.field);
        prop_assert!(err.message.starts_with(rule.label));
    }

    // Any ten ASCII digits form a valid phone number
    #[test]
    fn phone_accepts_ten_digits(phone in "[0-9]{10}") {
        prop_assert!(check_phone(&phone).is_ok());
    }

    // Other lengths of digits are rejected
    #[test]
    fn phone_rejects_other_lengths(phone in "[0-9]{1,9}|[0-9]{11,15}") {
        prop_assert!(check_phone(&phone).is_err());
    }

    // Planes keep the values they were built from
    #[test]
    fn plane_preserves_fields(
        make in "[A-Za-z]{1,32}",
        model in "[A-Za-z0-9-]{1,64}",
        age in 0i64..=9999,
        seats in 1i64..=499
    ) {
        let plane = NewPlane::new(make.clone(), model.clone(), age, seats).unwrap();
        prop_assert_eq!(plane.make(), make.as_str());
        prop_assert_eq!(plane.model(), model.as_str());
        prop_assert_eq!(plane.age(), age);
        prop_assert_eq!(plane.seats(), seats);
    }
}
