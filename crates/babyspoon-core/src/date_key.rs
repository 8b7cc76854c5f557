// ABOUTME: YYYY-MM-DD date-key parsing and formatting on local calendar dates
// ABOUTME: Builds dates from parsed year/month/day integers, never through timezone parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! Date keys.
//!
//! Meal-plan dates are persisted as `YYYY-MM-DD` strings that denote a local
//! calendar date. Parsing splits the key into three integer components and
//! constructs a [`NaiveDate`] from them, so no UTC conversion can shift the
//! day.

use chrono::{Duration, Local, NaiveDate};

use crate::errors::{AppError, AppResult};

/// Parse a `YYYY-MM-DD` key into a calendar date.
///
/// Returns `None` when the key does not have three numeric components, when
/// any component is zero, or when the components do not form a real date.
#[must_use]
pub fn parse_date_key(date_key: &str) -> Option<NaiveDate> {
    let mut parts = date_key.trim().split('-');
    let year: i32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() || year == 0 || month == 0 || day == 0 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a date key, reporting malformed input as an error.
///
/// # Errors
///
/// Returns `InvalidDateKey` if the key cannot be parsed.
pub fn require_date_key(date_key: &str) -> AppResult<NaiveDate> {
    parse_date_key(date_key).ok_or_else(|| AppError::invalid_date_key(date_key))
}

/// Format a calendar date as a zero-padded `YYYY-MM-DD` key
#[must_use]
pub fn to_date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date on the local wall clock
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// The date `days` calendar days before `date`
#[must_use]
pub fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    date - Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_key() {
        assert_eq!(
            parse_date_key("2026-01-03"),
            NaiveDate::from_ymd_opt(2026, 1, 3)
        );
        assert_eq!(
            parse_date_key("2026-1-3"),
            NaiveDate::from_ymd_opt(2026, 1, 3)
        );
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        for key in ["", "2026", "2026-01", "2026-00-10", "abcd-ef-gh", "2026-02-30", "2026-01-02-03"] {
            assert_eq!(parse_date_key(key), None, "{key} should not parse");
        }
    }

    #[test]
    fn test_format_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7);
        assert_eq!(date.map(to_date_key).as_deref(), Some("2026-03-07"));
    }

    #[test]
    fn test_days_before_crosses_month_boundary() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2);
        let expected = NaiveDate::from_ymd_opt(2026, 2, 23);
        assert_eq!(date.map(|d| days_before(d, 7)), expected);
    }
}
