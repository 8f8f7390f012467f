//! Guards over string slices. Lengths are counted in `char`s.

use argguard_shared_kernel::{ArgumentName, GuardError, GuardResult};

use crate::constraint::Constraint;

pub fn check_not_empty_str<'a, 'n>(value: &'a str, name: impl Into<ArgumentName<'n>>) -> GuardResult<&'a str> {
    if value.is_empty() {
        Err(GuardError::invalid_argument(&name.into(), "\"\"", "non-empty"))
    } else {
        Ok(value)
    }
}

/// Rejects empty and whitespace-only strings.
pub fn check_not_blank<'a, 'n>(value: &'a str, name: impl Into<ArgumentName<'n>>) -> GuardResult<&'a str> {
    if value.trim().is_empty() {
        Err(GuardError::invalid_argument(&name.into(), format!("{value:?}"), "non-blank"))
    } else {
        Ok(value)
    }
}

fn check_char_count<'a>(
    value: &'a str,
    name: &ArgumentName<'_>,
    constraint: &Constraint<usize>,
) -> GuardResult<&'a str> {
    let len = value.chars().count();
    if constraint.admits(&len) {
        Ok(value)
    } else {
        Err(GuardError::invalid_argument(
            name,
            format!("{value:?} of length {len}"),
            format!("of length {constraint}"),
        ))
    }
}

pub fn check_min_length<'a, 'n>(
    value: &'a str,
    min: usize,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a str> {
    check_char_count(value, &name.into(), &Constraint::AtLeast(min))
}

pub fn check_max_length<'a, 'n>(
    value: &'a str,
    max: usize,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a str> {
    check_char_count(value, &name.into(), &Constraint::AtMost(max))
}

pub fn check_length_range<'a, 'n>(
    value: &'a str,
    min: usize,
    max: usize,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a str> {
    check_char_count(value, &name.into(), &Constraint::Within { min, max })
}
