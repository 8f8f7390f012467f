//! Guard families for argument validation.
//!
//! Each guard checks one precondition and either hands the value back
//! unchanged or returns a [`GuardError`]. Absent values, collections, elements
//! and type descriptors are reported as [`ErrorKind::NullReference`] before any
//! comparison runs; every other failure is an [`ErrorKind::InvalidArgument`].

pub mod collection;
pub mod constraint;
pub mod reference;
pub mod report;
pub mod scalar;
pub mod sign;
#[cfg(feature = "temporal")]
pub mod temporal;
pub mod text;

pub use argguard_shared_kernel::{
    ArgumentName, ErrorContext, ErrorKind, GuardError, GuardResult, NullSubject,
};
pub use collection::{
    Slot, check_access_index, check_each_exact_value, check_each_max_value, check_each_min_value,
    check_each_negative, check_each_not_exact_value, check_each_not_negative,
    check_each_not_positive, check_each_positive, check_each_value_range, check_exact_size,
    check_index_and_count, check_insert_index, check_max_size, check_min_size, check_not_empty,
    check_not_null_elements, check_size_range,
};
pub use constraint::Constraint;
pub use reference::{
    RuntimeType, TypeDescriptor, check_assignable_to_type, check_instance_of,
    check_instance_of_type, check_not_null,
};
pub use report::LogRejection;
pub use scalar::{
    check_exact_value, check_finite, check_max_value, check_min_value, check_negative,
    check_not_exact_value, check_not_nan, check_not_negative, check_not_positive, check_positive,
    check_value_range,
};
pub use sign::HasZero;
#[cfg(feature = "temporal")]
pub use temporal::{check_not_in_future, check_not_in_future_at, check_not_in_past, check_not_in_past_at};
pub use text::{check_length_range, check_max_length, check_min_length, check_not_blank, check_not_empty_str};
