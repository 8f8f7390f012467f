// crates/domain/src/collection/size.rs
use argguard_shared_kernel::{ArgumentName, GuardError, GuardResult, NullSubject};

use crate::constraint::Constraint;

fn check_len<'a, T>(
    values: Option<&'a [T]>,
    name: &ArgumentName<'_>,
    constraint: &Constraint<usize>,
) -> GuardResult<&'a [T]> {
    let values = values.ok_or_else(|| GuardError::null_reference(name, NullSubject::Collection))?;
    let len = values.len();
    if constraint.admits(&len) {
        Ok(values)
    } else {
        Err(GuardError::invalid_argument(
            name,
            format!("of length {len}"),
            format!("of length {constraint}"),
        ))
    }
}

pub fn check_not_empty<'a, 'n, T>(
    values: Option<&'a [T]>,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a [T]> {
    check_len(values, &name.into(), &Constraint::AtLeast(1))
}

pub fn check_min_size<'a, 'n, T>(
    values: Option<&'a [T]>,
    min: usize,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a [T]> {
    check_len(values, &name.into(), &Constraint::AtLeast(min))
}

pub fn check_max_size<'a, 'n, T>(
    values: Option<&'a [T]>,
    max: usize,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a [T]> {
    check_len(values, &name.into(), &Constraint::AtMost(max))
}

/// Passes when `min <= len <= max`; an inverted range rejects every length.
pub fn check_size_range<'a, 'n, T>(
    values: Option<&'a [T]>,
    min: usize,
    max: usize,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a [T]> {
    check_len(values, &name.into(), &Constraint::Within { min, max })
}

pub fn check_exact_size<'a, 'n, T>(
    values: Option<&'a [T]>,
    expected: usize,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a [T]> {
    check_len(values, &name.into(), &Constraint::EqualTo(expected))
}
