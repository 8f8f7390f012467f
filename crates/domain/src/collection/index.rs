// crates/domain/src/collection/index.rs
use argguard_shared_kernel::{ArgumentName, GuardResult};

use crate::constraint::Constraint;

/// Passes when `index` addresses an existing element (`index < len`).
pub fn check_access_index<'n, T>(
    values: &[T],
    index: usize,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<usize> {
    Constraint::LessThan(values.len()).check(index, &name.into())
}

/// Passes when `index` is a valid insertion point (`index <= len`).
pub fn check_insert_index<'n, T>(
    values: &[T],
    index: usize,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<usize> {
    Constraint::AtMost(values.len()).check(index, &name.into())
}

/// Passes when `values[index..index + count]` is in bounds.
pub fn check_index_and_count<'i, 'c, T>(
    values: &[T],
    index: usize,
    count: usize,
    index_name: impl Into<ArgumentName<'i>>,
    count_name: impl Into<ArgumentName<'c>>,
) -> GuardResult<(usize, usize)> {
    let index = check_insert_index(values, index, index_name)?;
    let count = Constraint::AtMost(values.len() - index).check(count, &count_name.into())?;
    Ok((index, count))
}
