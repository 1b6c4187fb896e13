//! Structural template matching.

use serde_json::{Map, Value};

use crate::errors::{ArgumentError, CheckResult};
use crate::kind::Kind;
use crate::trace::Tracer;

use super::MatchOptions;

/// Decides whether `subject` looks like `template`.
///
/// `template` must be a JSON object or the call fails with
/// [`ArgumentError::TemplateNotObject`]; null, arrays, and scalars are
/// all rejected. A non-object `subject` is a normal `Ok(false)`:
/// classifying arbitrary input is the whole job, so a wrong-kind
/// subject is never an error.
///
/// Three checks, combined by AND:
/// - presence: every template key is a key of `subject`, by key
///   enumeration, so a key deliberately set to null still counts;
/// - extra props: unless `allow_extra_props`, the key counts match
///   exactly;
/// - type: when `check_type`, each template property's [`Kind`] matches
///   the subject's value for that key. Kinds only, never deep equality.
pub fn is_object_like_with(
    subject: &Value,
    template: &Value,
    options: &MatchOptions,
) -> CheckResult<bool> {
    let template_obj = template
        .as_object()
        .ok_or(ArgumentError::TemplateNotObject {
            actual: Kind::of(template),
        })?;

    if options.debug {
        let subject_repr = subject.to_string();
        let template_repr = template.to_string();
        let options_repr = format!("{options:?}");
        Tracer::trace(
            "object_like_input",
            &[
                ("options", &options_repr),
                ("subject", &subject_repr),
                ("template", &template_repr),
            ],
        );
    }

    let subject_obj = match subject.as_object() {
        Some(obj) => obj,
        None => {
            if options.debug {
                Tracer::trace(
                    "object_like_result",
                    &[("reason", "subject is not an object"), ("result", "false")],
                );
            }
            return Ok(false);
        }
    };

    let props_present = template_obj.keys().all(|key| subject_obj.contains_key(key));
    let no_extra_props = options.allow_extra_props || subject_obj.len() == template_obj.len();
    let types_match = !options.check_type || kinds_match(subject_obj, template_obj);
    let result = props_present && no_extra_props && types_match;

    if options.debug {
        Tracer::trace(
            "object_like_result",
            &[
                ("no_extra_props", bool_str(no_extra_props)),
                ("props_present", bool_str(props_present)),
                ("result", bool_str(result)),
                ("types_match", bool_str(types_match)),
            ],
        );
    }

    Ok(result)
}

/// Loose-surface matcher: `check_type` defaults off.
pub fn is_object_like(subject: &Value, template: &Value) -> CheckResult<bool> {
    is_object_like_with(subject, template, &MatchOptions::default())
}

/// Kind comparison for every template key present in `subject`. Keys
/// missing from `subject` are the presence check's problem, not a type
/// mismatch.
fn kinds_match(subject: &Map<String, Value>, template: &Map<String, Value>) -> bool {
    template.iter().all(|(key, expected)| match subject.get(key) {
        Some(actual) => Kind::of(actual) == Kind::of(expected),
        None => true,
    })
}

fn bool_str(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}
