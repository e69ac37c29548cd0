//! Calendar helpers for schedules: French month names, month arithmetic
//! and academic years.

use chrono::{Datelike, Days, NaiveDate};

use crate::shared::errors::DomainError;

const MONTH_NAMES: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

/// Day of the month monthly installments fall due on
pub const MONTHLY_DUE_DAY: u32 = 5;

/// First month of the academic year
pub const ACADEMIC_YEAR_START_MONTH: u32 = 9;

/// French name of a month (1-12); out of range values yield an empty string
#[must_use]
pub fn month_name(month: u32) -> &'static str {
    usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|i| MONTH_NAMES.get(i))
        .copied()
        .unwrap_or("")
}

/// "Novembre 2025"
#[must_use]
pub fn month_label(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

/// Calendar year in which the academic year containing `date` started
#[must_use]
pub fn academic_year_start(date: NaiveDate) -> i32 {
    if date.month() >= ACADEMIC_YEAR_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    }
}

/// `(year, month)` shifted forward by `offset` months
#[must_use]
pub fn shift_month(year: i32, month: u32, offset: u32) -> (i32, u32) {
    let index = month - 1 + offset;
    // index / 12 is at most u32::MAX / 12, which fits in i32
    let years = i32::try_from(index / 12).unwrap_or(i32::MAX);
    (year.saturating_add(years), index % 12 + 1)
}

/// A given day of a month
///
/// # Errors
///
/// Returns `DomainError::Validation` when the date does not exist.
pub fn day_of_month(year: i32, month: u32, day: u32) -> Result<NaiveDate, DomainError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DomainError::Validation(format!("invalid date {year}-{month:02}-{day:02}")))
}

/// `date` plus a number of days
///
/// # Errors
///
/// Returns `DomainError::Validation` when the result is out of range.
pub fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate, DomainError> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| DomainError::Validation(format!("date out of range: {date} + {days} days")))
}

/// Number of calendar months touched from `start` to `end`, both included
#[must_use]
pub fn months_between_inclusive(start: NaiveDate, end: NaiveDate) -> i32 {
    month_index(end) - month_index(start) + 1
}

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + i32::try_from(date.month0()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "Janvier");
        assert_eq!(month_name(12), "Décembre");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
        assert_eq!(month_label(2025, 11), "Novembre 2025");
    }

    #[test]
    fn test_academic_year_start() {
        assert_eq!(academic_year_start(date(2025, 9, 1)), 2025);
        assert_eq!(academic_year_start(date(2025, 12, 31)), 2025);
        assert_eq!(academic_year_start(date(2026, 1, 10)), 2025);
        assert_eq!(academic_year_start(date(2026, 8, 31)), 2025);
    }

    #[test]
    fn test_shift_month_wraps_year() {
        assert_eq!(shift_month(2025, 9, 0), (2025, 9));
        assert_eq!(shift_month(2025, 9, 4), (2026, 1));
        assert_eq!(shift_month(2025, 12, 13), (2027, 1));
    }

    #[test]
    fn test_months_between_inclusive() {
        assert_eq!(months_between_inclusive(date(2025, 10, 15), date(2025, 10, 30)), 1);
        assert_eq!(months_between_inclusive(date(2025, 10, 15), date(2025, 12, 1)), 3);
        assert_eq!(months_between_inclusive(date(2025, 11, 1), date(2026, 2, 28)), 4);
    }
}
