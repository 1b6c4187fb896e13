//! Per-call configuration for the structural matcher.

use serde::{Deserialize, Serialize};

/// Options for [`is_object_like_with`](super::is_object_like_with).
///
/// An immutable record constructed fresh per call; there is no shared
/// default instance. Field names are camelCase on the wire so options
/// may arrive as JSON, e.g. `{"allowExtraProps": true}`; absent fields
/// take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchOptions {
    /// Tolerate subject keys beyond those in the template. Default
    /// false: key counts must match exactly.
    pub allow_extra_props: bool,
    /// Compare each property's kind against the template's. Default
    /// false; the strict surface flips it via [`MatchOptions::strict`].
    pub check_type: bool,
    /// Emit trace lines for each intermediate decision. Never affects
    /// the result. Default false.
    pub debug: bool,
}

impl MatchOptions {
    /// Defaults for the strict surface: type checking on.
    pub fn strict() -> Self {
        Self {
            check_type: true,
            ..Self::default()
        }
    }

    /// Returns these options with `allow_extra_props` replaced.
    pub fn with_allow_extra_props(mut self, allow: bool) -> Self {
        self.allow_extra_props = allow;
        self
    }

    /// Returns these options with `check_type` replaced.
    pub fn with_check_type(mut self, check: bool) -> Self {
        self.check_type = check;
        self
    }

    /// Returns these options with `debug` replaced.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
