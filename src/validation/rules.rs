use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::str::FromStr;

use crate::models::{Context, TransactionType};
use crate::types::Amount;

pub const MIN_DESCRIPTION_LENGTH: usize = 3;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// True iff `value` is a finite number greater than zero.
pub fn is_positive_number(value: &str) -> bool {
    Amount::from_str(value).is_ok()
}

pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

/// True iff the trimmed description has at least `MIN_DESCRIPTION_LENGTH` characters.
pub fn is_valid_description(value: &str) -> bool {
    value.trim().chars().count() >= MIN_DESCRIPTION_LENGTH
}

/// Case-sensitive: only `income` and `expense` are accepted.
pub fn is_valid_type(value: &str) -> bool {
    TransactionType::from_str(value).is_ok()
}

pub fn is_valid_context(value: &str) -> bool {
    Context::from_str(value).is_ok()
}

/// Parses a calendar date, accepting ISO dates and ISO date-times (the time
/// of day is discarded).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if value.is_empty() {
        return None;
    }

    DATE_FORMATS.iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|date_time| date_time.date_naive()))
        .or_else(|| {
            DATE_TIME_FORMATS.iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|date_time| date_time.date())
        })
}
