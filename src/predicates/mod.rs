//! The predicate set shared by the loose and strict surfaces.

mod derived;
mod primitive;

pub use derived::{
    is_date_greater_than, is_date_less_than, is_number_greater_than, is_number_less_than,
    is_object_with_expected_props, is_populated_array, is_populated_object, is_populated_string,
};
pub use primitive::{
    is_array, is_boolean, is_date, is_float, is_integer, is_not_null, is_not_zero_length, is_null,
    is_number, is_object, is_string,
};

/// Alias for [`is_date_greater_than`].
pub use derived::is_date_greater_than as is_date_after;
/// Alias for [`is_date_less_than`].
pub use derived::is_date_less_than as is_date_before;
