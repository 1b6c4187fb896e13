//! Derived and comparison predicates.
//!
//! The comparison predicates validate their *reference* argument and
//! fail on a wrong kind; a wrong-kind *subject* is always `Ok(false)`.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::errors::{ArgumentError, CheckResult};
use crate::kind::Kind;

use super::primitive::{is_array, is_not_zero_length, is_string};

pub fn is_populated_array(x: &Value) -> bool {
    is_array(x) && is_not_zero_length(x)
}

pub fn is_populated_string(x: &Value) -> bool {
    is_string(x) && is_not_zero_length(x)
}

/// Checks for an object with at least one key. A key whose value is
/// null still counts: population is a property of the key set, not of
/// the values.
pub fn is_populated_object(x: &Value) -> bool {
    x.as_object().is_some_and(|m| !m.is_empty())
}

/// Checks for an object carrying every property named in `props`.
///
/// `props` must be an array of strings or the call fails.
///
/// Presence is checked by key enumeration, not by "is the value
/// non-null": `{"foo": null}` still has `foo`.
pub fn is_object_with_expected_props(x: &Value, props: &Value) -> CheckResult<bool> {
    let names = props
        .as_array()
        .ok_or(ArgumentError::PropsNotStringArray)?;
    let mut expected = Vec::with_capacity(names.len());
    for name in names {
        expected.push(name.as_str().ok_or(ArgumentError::PropsNotStringArray)?);
    }

    let obj = match x.as_object() {
        Some(obj) => obj,
        None => return Ok(false),
    };
    Ok(expected.iter().all(|name| obj.contains_key(*name)))
}

/// Checks for a number greater than `reference`.
///
/// Fails if `reference` is not a number; a non-number subject is
/// `Ok(false)`.
pub fn is_number_greater_than(x: &Value, reference: &Value) -> CheckResult<bool> {
    let bound = reference.as_f64().ok_or(ArgumentError::ReferenceNotNumber {
        actual: Kind::of(reference),
    })?;
    Ok(x.as_f64().is_some_and(|n| n > bound))
}

/// Checks for a number less than `reference`.
///
/// Fails if `reference` is not a number; a non-number subject is
/// `Ok(false)`.
pub fn is_number_less_than(x: &Value, reference: &Value) -> CheckResult<bool> {
    let bound = reference.as_f64().ok_or(ArgumentError::ReferenceNotNumber {
        actual: Kind::of(reference),
    })?;
    Ok(x.as_f64().is_some_and(|n| n < bound))
}

fn as_date_time(x: &Value) -> Option<DateTime<FixedOffset>> {
    x.as_str().and_then(|s| DateTime::parse_from_rfc3339(s).ok())
}

/// Checks for a date after `reference`. Instants compare, so offsets
/// normalize: `10:00+02:00` equals `08:00Z`.
///
/// Fails if `reference` is not a date value; a non-date subject is
/// `Ok(false)`. Equal instants are `Ok(false)`.
pub fn is_date_greater_than(x: &Value, reference: &Value) -> CheckResult<bool> {
    let bound = as_date_time(reference).ok_or(ArgumentError::ReferenceNotDate {
        actual: Kind::of(reference),
    })?;
    Ok(as_date_time(x).is_some_and(|d| d > bound))
}

/// Checks for a date before `reference`. Same contract as
/// [`is_date_greater_than`].
pub fn is_date_less_than(x: &Value, reference: &Value) -> CheckResult<bool> {
    let bound = as_date_time(reference).ok_or(ArgumentError::ReferenceNotDate {
        actual: Kind::of(reference),
    })?;
    Ok(as_date_time(x).is_some_and(|d| d < bound))
}
