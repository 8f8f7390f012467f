// crates/domain/src/collection/each.rs
use std::fmt;

use argguard_shared_kernel::{ArgumentName, GuardError, GuardResult, NullSubject};

use super::slot::Slot;
use crate::{constraint::Constraint, sign::HasZero};

/// Rejects an absent collection or any absent element; returns the same slice.
pub fn check_not_null_elements<'a, 'n, S>(
    values: Option<&'a [S]>,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a [S]>
where
    S: Slot,
{
    present_elements(values, &name.into())
}

fn present_elements<'a, S: Slot>(values: Option<&'a [S]>, name: &ArgumentName<'_>) -> GuardResult<&'a [S]> {
    let values = values.ok_or_else(|| GuardError::null_reference(name, NullSubject::Collection))?;
    match values.iter().position(|slot| slot.value().is_none()) {
        Some(index) => Err(GuardError::null_reference(name, NullSubject::Element { index })),
        None => Ok(values),
    }
}

/// Null pass over the whole sequence first, then the first element the
/// constraint rejects.
fn check_each<'a, S>(
    values: Option<&'a [S]>,
    name: &ArgumentName<'_>,
    constraint: &Constraint<S::Value>,
) -> GuardResult<&'a [S]>
where
    S: Slot,
    S::Value: PartialOrd + fmt::Display,
{
    let values = present_elements(values, name)?;
    let rejected = values
        .iter()
        .enumerate()
        .find_map(|(index, slot)| slot.value().filter(|value| !constraint.admits(value)).map(|value| (index, value)));

    match rejected {
        Some((index, value)) => Err(GuardError::invalid_argument(&name.element(index), value, constraint)),
        None => Ok(values),
    }
}

pub fn check_each_positive<'a, 'n, S>(
    values: Option<&'a [S]>,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a [S]>
where
    S: Slot,
    S::Value: HasZero + PartialOrd + fmt::Display,
{
    check_each(values, &name.into(), &Constraint::positive())
}

pub fn check_each_not_positive<'a, 'n, S>(
    values: Option<&'a [S]>,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a [S]>
where
    S: Slot,
    S::Value: HasZero + PartialOrd + fmt::Display,
{
    check_each(values, &name.into(), &Constraint::not_positive())
}

pub fn check_each_negative<'a, 'n, S>(
    values: Option<&'a [S]>,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a [S]>
where
    S: Slot,
    S::Value: HasZero + PartialOrd + fmt::Display,
{
    check_each(values, &name.into(), &Constraint::negative())
}

pub fn check_each_not_negative<'a, 'n, S>(
    values: Option<&'a [S]>,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a [S]>
where
    S: Slot,
    S::Value: HasZero + PartialOrd + fmt::Display,
{
    check_each(values, &name.into(), &Constraint::not_negative())
}

pub fn check_each_min_value<'a, 'n, S>(
    values: Option<&'a [S]>,
    min: S::Value,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a [S]>
where
    S: Slot,
    S::Value: PartialOrd + fmt::Display,
{
    check_each(values, &name.into(), &Constraint::AtLeast(min))
}

pub fn check_each_max_value<'a, 'n, S>(
    values: Option<&'a [S]>,
    max: S::Value,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a [S]>
where
    S: Slot,
    S::Value: PartialOrd + fmt::Display,
{
    check_each(values, &name.into(), &Constraint::AtMost(max))
}

pub fn check_each_value_range<'a, 'n, S>(
    values: Option<&'a [S]>,
    min: S::Value,
    max: S::Value,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a [S]>
where
    S: Slot,
    S::Value: PartialOrd + fmt::Display,
{
    check_each(values, &name.into(), &Constraint::Within { min, max })
}

pub fn check_each_exact_value<'a, 'n, S>(
    values: Option<&'a [S]>,
    expected: S::Value,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a [S]>
where
    S: Slot,
    S::Value: PartialOrd + fmt::Display,
{
    check_each(values, &name.into(), &Constraint::EqualTo(expected))
}

pub fn check_each_not_exact_value<'a, 'n, S>(
    values: Option<&'a [S]>,
    forbidden: S::Value,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'a [S]>
where
    S: Slot,
    S::Value: PartialOrd + fmt::Display,
{
    check_each(values, &name.into(), &Constraint::NotEqualTo(forbidden))
}
