// src/prelude.rs
//! Everything a call site needs to guard its arguments.
//!
//! ```
//! use argguard::prelude::*;
//!
//! fn open_pool(size: usize, name: Option<&str>) -> GuardResult<(usize, &str)> {
//!     let size = check_value_range(size, 1, 64, "size")?;
//!     let name = check_not_null(name, "name").context("opening pool")?;
//!     Ok((size, check_not_blank(name, "name")?))
//! }
//!
//! assert_eq!(open_pool(8, Some("db")).unwrap(), (8, "db"));
//! assert!(open_pool(8, None).unwrap_err().is_null_reference());
//! ```

pub use argguard_domain::{
    ArgumentName, Constraint, ErrorContext, ErrorKind, GuardError, GuardResult, HasZero,
    LogRejection, NullSubject, Slot,
    RuntimeType, TypeDescriptor, check_access_index, check_assignable_to_type,
    check_each_exact_value, check_each_max_value, check_each_min_value, check_each_negative,
    check_each_not_exact_value, check_each_not_negative, check_each_not_positive,
    check_each_positive, check_each_value_range, check_exact_size, check_exact_value,
    check_finite, check_index_and_count, check_insert_index, check_instance_of,
    check_instance_of_type, check_length_range, check_max_length, check_max_size,
    check_max_value, check_min_length, check_min_size, check_min_value, check_negative,
    check_not_blank, check_not_empty, check_not_empty_str, check_not_exact_value, check_not_nan,
    check_not_negative, check_not_null, check_not_null_elements, check_not_positive,
    check_positive, check_size_range, check_value_range,
};
#[cfg(feature = "temporal")]
pub use argguard_domain::{check_not_in_future, check_not_in_future_at, check_not_in_past, check_not_in_past_at};
