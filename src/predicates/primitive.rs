//! Primitive kind predicates.
//!
//! Thin wrappers over the value's kind; each returns plain `bool` and
//! never fails.

use chrono::DateTime;
use serde_json::Value;

pub fn is_array(x: &Value) -> bool {
    x.is_array()
}

pub fn is_boolean(x: &Value) -> bool {
    x.is_boolean()
}

pub fn is_null(x: &Value) -> bool {
    x.is_null()
}

pub fn is_not_null(x: &Value) -> bool {
    !x.is_null()
}

/// Checks for a number. NaN is excluded by construction:
/// `serde_json::Number` cannot represent it.
pub fn is_number(x: &Value) -> bool {
    x.is_number()
}

pub fn is_string(x: &Value) -> bool {
    x.is_string()
}

/// Checks for an object (e.g. `{"message": "hi"}`). Returns false for
/// null and arrays, on both surfaces.
pub fn is_object(x: &Value) -> bool {
    x.is_object()
}

/// Checks for a date value: a string that parses as an RFC 3339
/// date-time.
pub fn is_date(x: &Value) -> bool {
    x.as_str()
        .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok())
}

/// Checks for an integer: any number with a zero fractional part, so
/// `5.0` counts.
pub fn is_integer(x: &Value) -> bool {
    match x {
        Value::Number(n) => {
            n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
        }
        _ => false,
    }
}

/// Checks for a float: a number whose floor differs from itself, so
/// `5.0` is not a float and `12.32` is. Complement of [`is_integer`]
/// within numbers.
pub fn is_float(x: &Value) -> bool {
    match x {
        Value::Number(n) => !n.is_i64() && !n.is_u64() && n.as_f64().is_some_and(|f| f.floor() != f),
        _ => false,
    }
}

/// Checks for a non-empty string or array; every other kind is false.
pub fn is_not_zero_length(x: &Value) -> bool {
    match x {
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        _ => false,
    }
}
