//! Date of birth parsing and age arithmetic.
//!
//! Both the validator and the generator interpret the raw date string through
//! [`parse_birth_date`], so a date accepted by validation is always usable by
//! generation.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Date-only layouts tried in order after ISO 8601.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Date-time layouts without an offset.
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Calendar years a date of birth may fall in.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Parses a raw date of birth into a calendar date.
///
/// Accepts `yyyy-MM-dd`, RFC 3339 date-times, offset-free ISO date-times,
/// `yyyy/MM/dd`, `MM/dd/yyyy`, and `dd.MM.yyyy`. Surrounding whitespace is
/// ignored. Date-times keep the calendar date as written. Years outside
/// `1..=9999`, including zero and signed years, are rejected.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pseudo_ssn::parse_birth_date;
///
/// assert_eq!(parse_birth_date("1990-01-15"), NaiveDate::from_ymd_opt(1990, 1, 15));
/// assert_eq!(parse_birth_date("15.01.1990"), NaiveDate::from_ymd_opt(1990, 1, 15));
/// assert_eq!(parse_birth_date("invalid-date"), None);
/// assert_eq!(parse_birth_date("0000-02-29"), None);
/// ```
#[must_use]
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|date_time| date_time.date_naive())
        })
        .or_else(|| {
            DATE_TIME_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(trimmed, format)
                    .ok()
                    .map(|date_time| date_time.date())
            })
        })
        .filter(|date| YEAR_RANGE.contains(&date.year()))
}

/// Returns the age in whole years on `today` for someone born on `birth`.
///
/// The year difference is reduced by one when the birthday has not yet
/// occurred in `today`'s year. Birth dates after `today` yield negative ages.
#[must_use]
pub(crate) fn age_in_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years - 1
    } else {
        years
    }
}
