//! Property-based tests for the date builder.

use super::{days_in_month, is_leap_year, FlightDate, MAX_YEAR, MIN_YEAR};
use chrono::NaiveDate;
use proptest::prelude::*;

fn valid_ymd() -> impl Strategy<Value = (i32, u32, u32)> {
    (MIN_YEAR..=MAX_YEAR, 1u32..=12).prop_flat_map(|(y, m)| {
        (Just(y), Just(m), 1u32..=days_in_month(y, m))
    })
}

proptest! {
    // Every in-range component triple builds a date
    #[test]
    fn valid_components_build((y, m, d) in valid_ymd()) {
        let date = FlightDate::from_ymd(y, m, d).unwrap();
        prop_assert_eq!((date.year(), date.month(), date.day()), (y, m, d));
    }

    // Display is always ten characters of zero padded YYYY-MM-DD
    #[test]
    fn display_is_zero_padded((y, m, d) in valid_ymd()) {
        let text = FlightDate::from_ymd(y, m, d).unwrap().to_string();
        prop_assert_eq!(text.len(), 10);
        prop_assert_eq!(text.clone(), format!("{y:04}-{m:02}-{d:02}"));
        prop_assert_eq!(text.parse::<FlightDate>().unwrap(), FlightDate::from_ymd(y, m, d).unwrap());
    }

    // Our month lengths agree with chrono's calendar
    #[test]
    fn month_lengths_match_chrono(y in MIN_YEAR..=MAX_YEAR, m in 1u32..=12) {
        let days = days_in_month(y, m);
        prop_assert!(NaiveDate::from_ymd_opt(y, m, days).is_some());
        prop_assert!(NaiveDate::from_ymd_opt(y, m, days + 1).is_none());
    }

    // Years outside the accepted window are rejected
    #[test]
    fn out_of_range_years_rejected(y in prop_oneof![0i32..MIN_YEAR, (MAX_YEAR + 1)..100_000]) {
        prop_assert!(FlightDate::from_ymd(y, 1, 1).is_err());
    }

    // Months outside 1..=12 are rejected
    #[test]
    fn out_of_range_months_rejected(m in 13u32..1000) {
        prop_assert!(FlightDate::from_ymd(2020, m, 1).is_err());
        prop_assert!(FlightDate::from_ymd(2020, 0, 1).is_err());
    }

    // February 29 exists exactly in leap years
    #[test]
    fn february_29_only_in_leap_years(y in MIN_YEAR..=MAX_YEAR) {
        prop_assert_eq!(FlightDate::from_ymd(y, 2, 29).is_ok(), is_leap_year(y));
    }
}
