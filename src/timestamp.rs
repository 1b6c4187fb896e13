//! ISO-8601 timestamp layout matching.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// Four layouts: seconds with/without a fractional part, crossed with a
// `Z` suffix vs a numeric UTC offset. Digit-position constraints only
// (month tens 0-1, day tens 0-3, hour tens 0-2, minute/second tens
// 0-5); no calendar validation, so "2020-02-31T00:00:00Z" passes.
static SECONDS_Z: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-[01]\d-[0-3]\dT[0-2]\d:[0-5]\d:[0-5]\dZ$").unwrap()
});
static SECONDS_OFFSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-[01]\d-[0-3]\dT[0-2]\d:[0-5]\d:[0-5]\d[+-][0-2]\d:[0-5]\d$").unwrap()
});
static FRACTIONAL_Z: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-[01]\d-[0-3]\dT[0-2]\d:[0-5]\d:[0-5]\d\.\d+Z$").unwrap()
});
static FRACTIONAL_OFFSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-[01]\d-[0-3]\dT[0-2]\d:[0-5]\d:[0-5]\d\.\d+[+-][0-2]\d:[0-5]\d$").unwrap()
});

/// Checks for a string matching one of the four ISO-8601 date-time
/// layouts. A pattern matcher, not a calendar validator: it accepts
/// some calendar-invalid strings and rejects a lowercase `z` suffix.
/// Returns false for any non-string value; never fails.
pub fn is_iso_date_time_string(x: &Value) -> bool {
    match x.as_str() {
        Some(s) => {
            SECONDS_Z.is_match(s)
                || SECONDS_OFFSET.is_match(s)
                || FRACTIONAL_Z.is_match(s)
                || FRACTIONAL_OFFSET.is_match(s)
        }
        None => false,
    }
}
