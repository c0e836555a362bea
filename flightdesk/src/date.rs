//! Calendar dates entered one component at a time.
//!
//! A [`FlightDate`] is built from a year, month and day that are each
//! checked on their own, so an interactive prompt can re-ask for just the
//! component that was wrong. Dates always format as zero padded
//! `YYYY-MM-DD`, which is also how they are stored.

#[cfg(test)]
mod proptests;

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::entity::ValidationError;

/// Smallest accepted year.
pub const MIN_YEAR: i32 = 1000;
/// Largest accepted year.
pub const MAX_YEAR: i32 = 9999;

/// Returns `true` for Gregorian leap years.
///
/// # Examples
///
/// ```
/// use flightdesk::date::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`. Returns 0 for an invalid month.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// A validated calendar date between the years 1000 and 9999.
///
/// # Examples
///
/// ```
/// use flightdesk::date::FlightDate;
///
/// let date = FlightDate::from_ymd(2024, 3, 5).unwrap();
/// assert_eq!(date.to_string(), "2024-03-05");
///
/// assert!(FlightDate::from_ymd(2023, 2, 29).is_err());
/// assert!(FlightDate::from_ymd(2024, 2, 29).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FlightDate(NaiveDate);

impl FlightDate {
    /// Builds a date from its components.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first component that is out
    /// of range.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        let year = Self::check_year(i64::from(year))?;
        let month = Self::check_month(i64::from(month))?;
        let day = Self::check_day(year, month, i64::from(day))?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ValidationError::new("date", format!("{year}-{month}-{day} is not a date.")))
    }

    /// Checks a year component.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the year is outside 1000..=9999.
    pub fn check_year(year: i64) -> Result<i32, ValidationError> {
        i32::try_from(year)
            .ok()
            .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
            .ok_or_else(|| ValidationError::new("year", format!("{year} is not a year.")))
    }

    /// Checks a month component.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the month is outside 1..=12.
    pub fn check_month(month: i64) -> Result<u32, ValidationError> {
        u32::try_from(month)
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or_else(|| ValidationError::new("month", format!("{month} is not a month.")))
    }

    /// Checks a day component against the month it belongs to.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the day does not exist in that month.
    pub fn check_day(year: i32, month: u32, day: i64) -> Result<u32, ValidationError> {
        u32::try_from(day)
            .ok()
            .filter(|d| *d >= 1 && *d <= days_in_month(year, month))
            .ok_or_else(|| {
                ValidationError::new("day", format!("{month}/{day} is not a valid day."))
            })
    }

    /// Year component.
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month component, 1 through 12.
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of the month.
    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// The underlying `chrono` date.
    #[must_use]
    pub const fn as_naive_date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for FlightDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for FlightDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::new("date", format!("'{s}' is not a YYYY-MM-DD date."));
        let mut parts = s.trim().splitn(3, '-');
        let mut next = || -> Result<i64, ValidationError> {
            parts
                .next()
                .and_then(|p| p.parse::<i64>().ok())
                .ok_or_else(malformed)
        };
        let (year, month, day) = (next()?, next()?, next()?);
        let year = Self::check_year(year)?;
        let month = Self::check_month(month)?;
        let day = Self::check_day(year, month, day)?;
        Self::from_ymd(year, month, day)
    }
}

impl TryFrom<NaiveDate> for FlightDate {
    type Error = ValidationError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_ymd(date.year(), date.month(), date.day())
    }
}

impl From<FlightDate> for NaiveDate {
    fn from(date: FlightDate) -> Self {
        date.0
    }
}

impl TryFrom<String> for FlightDate {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FlightDate> for String {
    fn from(date: FlightDate) -> Self {
        date.to_string()
    }
}

impl ToSql for FlightDate {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for FlightDate {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: ValidationError| FromSqlError::Other(Box::new(e)))
    }
}
