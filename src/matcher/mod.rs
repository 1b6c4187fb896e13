//! Structural matching of a value against a template object.
//!
//! One parameterized implementation backs both call surfaces; the loose
//! and strict `is_object_like` wrappers differ only in their
//! [`MatchOptions`] defaults.

mod options;
mod structural;

pub use options::MatchOptions;
pub use structural::{is_object_like, is_object_like_with};
