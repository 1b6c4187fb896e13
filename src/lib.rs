//! kindcheck - runtime kind and shape predicates for JSON values
//!
//! Every predicate is a pure, synchronous, side-effect-free function
//! over [`serde_json::Value`]. Inputs are never mutated and never
//! retained; calls are independent and safe to run concurrently.
//!
//! One rule holds everywhere: a wrong-kind *subject* is a normal
//! `false`, a wrong-kind *auxiliary* argument (comparison reference,
//! template, props list) is an [`ArgumentError`].
//!
//! Two call surfaces share one implementation. The crate root is the
//! loose surface, where [`is_object_like`] does not type-check by
//! default; [`strict`] exposes the same predicates with type checking
//! on by default. Either default can be overridden per call through
//! [`is_object_like_with`] and [`MatchOptions`].

pub mod errors;
pub mod kind;
pub mod matcher;
pub mod predicates;
pub mod strict;
pub mod timestamp;
pub mod trace;

pub use errors::{ArgumentError, CheckResult};
pub use kind::Kind;
pub use matcher::{is_object_like, is_object_like_with, MatchOptions};
pub use predicates::*;
pub use timestamp::is_iso_date_time_string;
