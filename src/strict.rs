//! The strict call surface.
//!
//! Same predicate set as the crate root; the only behavioral difference
//! is the structural matcher's `check_type` default, which is on here.
//! Explicit options always win on either surface.

use serde_json::Value;

use crate::errors::CheckResult;

pub use crate::matcher::{is_object_like_with, MatchOptions};
pub use crate::predicates::*;
pub use crate::timestamp::is_iso_date_time_string;

/// Strict-surface matcher: type checking on unless overridden.
pub fn is_object_like(subject: &Value, template: &Value) -> CheckResult<bool> {
    is_object_like_with(subject, template, &MatchOptions::strict())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    #[test]
    fn test_strict_checks_types_by_default() {
        let template = json!({ "age": 23, "name": "Bob" });

        let wrong_kind = json!({ "age": "no type checking", "name": "Alice" });
        assert_eq!(super::is_object_like(&wrong_kind, &template), Ok(false));

        let right_kind = json!({ "age": 99, "name": "Xavier" });
        assert_eq!(super::is_object_like(&right_kind, &template), Ok(true));
    }

    #[test]
    fn test_explicit_options_override_the_default() {
        let template = json!({ "age": 23 });
        let wrong_kind = json!({ "age": "oops" });

        let opted_out = crate::MatchOptions::strict().with_check_type(false);
        assert_eq!(
            super::is_object_like_with(&wrong_kind, &template, &opted_out),
            Ok(true)
        );
    }

    #[test]
    fn test_other_predicates_are_unchanged() {
        assert!(!super::is_date(&json!(1)));
        assert!(super::is_date(&json!("2020-03-01T00:00:00Z")));
        assert!(super::is_integer(&json!(1)));
        assert!(!super::is_integer(&json!(1.009234323423)));
    }
}
