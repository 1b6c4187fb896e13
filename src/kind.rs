//! Runtime kind classification for JSON values.
//!
//! The classifier is a closed enum so the structural matcher's type
//! comparison is a plain variant-equality check, never reflection.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The coarse runtime kind of a JSON value.
///
/// `Number` is a single kind: the classifier never splits integers from
/// floats, so a type-checked match treats `23` and `23.5` as the same
/// kind. The finer split lives in `is_integer`/`is_float`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Classifies a value. Total: every JSON value has exactly one kind.
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns the kind name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classifies_every_variant() {
        assert_eq!(Kind::of(&json!(null)), Kind::Null);
        assert_eq!(Kind::of(&json!(true)), Kind::Bool);
        assert_eq!(Kind::of(&json!(12)), Kind::Number);
        assert_eq!(Kind::of(&json!("hi")), Kind::String);
        assert_eq!(Kind::of(&json!([1, 2])), Kind::Array);
        assert_eq!(Kind::of(&json!({ "a": 1 })), Kind::Object);
    }

    #[test]
    fn test_integers_and_floats_share_a_kind() {
        assert_eq!(Kind::of(&json!(23)), Kind::of(&json!(23.5)));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Kind::Null.name(), "null");
        assert_eq!(Kind::Bool.name(), "bool");
        assert_eq!(Kind::Number.name(), "number");
        assert_eq!(Kind::String.name(), "string");
        assert_eq!(Kind::Array.name(), "array");
        assert_eq!(Kind::Object.name(), "object");
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(format!("{}", Kind::Object), "object");
    }
}
