//! Argument errors for predicates that take auxiliary arguments.

use crate::kind::Kind;
use thiserror::Error;

/// Result type for predicates that validate an auxiliary argument.
pub type CheckResult<T> = Result<T, ArgumentError>;

/// A malformed *auxiliary* argument.
///
/// The one rule that holds across the whole library: a wrong-kind
/// subject is a normal `false`, a wrong-kind reference, template, or
/// props argument is a caller error and fails the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("expected reference value to be a number, got {actual}")]
    ReferenceNotNumber { actual: Kind },

    #[error("expected reference value to be an RFC 3339 date-time string, got {actual}")]
    ReferenceNotDate { actual: Kind },

    #[error("expected template to be a non-null, non-array object, got {actual}")]
    TemplateNotObject { actual: Kind },

    #[error("expected props to be an array of strings")]
    PropsNotStringArray,
}
