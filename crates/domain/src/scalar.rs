//! Guards over a single ordered value: sign, bounds, range and exact value.
//!
//! Every guard returns its input unchanged on success so it can be used inline:
//!
//! ```
//! use argguard_domain::scalar::{check_positive, check_value_range};
//!
//! let workers = check_positive(4_usize, "workers")?;
//! let ratio = check_value_range(0.25, 0.0, 1.0, "ratio")?;
//! assert_eq!((workers, ratio), (4, 0.25));
//! # Ok::<(), argguard_domain::GuardError>(())
//! ```

use std::fmt;

use argguard_shared_kernel::{ArgumentName, GuardError, GuardResult};
use num_traits::Float;

use crate::{constraint::Constraint, sign::HasZero};

pub fn check_positive<'n, T>(value: T, name: impl Into<ArgumentName<'n>>) -> GuardResult<T>
where
    T: HasZero + PartialOrd + fmt::Display,
{
    Constraint::positive().check(value, &name.into())
}

pub fn check_not_positive<'n, T>(value: T, name: impl Into<ArgumentName<'n>>) -> GuardResult<T>
where
    T: HasZero + PartialOrd + fmt::Display,
{
    Constraint::not_positive().check(value, &name.into())
}

pub fn check_negative<'n, T>(value: T, name: impl Into<ArgumentName<'n>>) -> GuardResult<T>
where
    T: HasZero + PartialOrd + fmt::Display,
{
    Constraint::negative().check(value, &name.into())
}

pub fn check_not_negative<'n, T>(value: T, name: impl Into<ArgumentName<'n>>) -> GuardResult<T>
where
    T: HasZero + PartialOrd + fmt::Display,
{
    Constraint::not_negative().check(value, &name.into())
}

/// Passes when `value >= min`.
pub fn check_min_value<'n, T>(value: T, min: T, name: impl Into<ArgumentName<'n>>) -> GuardResult<T>
where
    T: PartialOrd + fmt::Display,
{
    Constraint::AtLeast(min).check(value, &name.into())
}

/// Passes when `value <= max`.
pub fn check_max_value<'n, T>(value: T, max: T, name: impl Into<ArgumentName<'n>>) -> GuardResult<T>
where
    T: PartialOrd + fmt::Display,
{
    Constraint::AtMost(max).check(value, &name.into())
}

/// Passes when `min <= value <= max`.
///
/// The bounds are not validated against each other; with `min > max` no value
/// passes.
pub fn check_value_range<'n, T>(
    value: T,
    min: T,
    max: T,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<T>
where
    T: PartialOrd + fmt::Display,
{
    Constraint::Within { min, max }.check(value, &name.into())
}

pub fn check_exact_value<'n, T>(
    value: T,
    expected: T,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<T>
where
    T: PartialOrd + fmt::Display,
{
    Constraint::EqualTo(expected).check(value, &name.into())
}

pub fn check_not_exact_value<'n, T>(
    value: T,
    forbidden: T,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<T>
where
    T: PartialOrd + fmt::Display,
{
    Constraint::NotEqualTo(forbidden).check(value, &name.into())
}

/// Rejects NaN and both infinities.
pub fn check_finite<'n, T>(value: T, name: impl Into<ArgumentName<'n>>) -> GuardResult<T>
where
    T: Float + fmt::Display,
{
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GuardError::invalid_argument(&name.into(), value, "finite"))
    }
}

pub fn check_not_nan<'n, T>(value: T, name: impl Into<ArgumentName<'n>>) -> GuardResult<T>
where
    T: Float + fmt::Display,
{
    if value.is_nan() {
        Err(GuardError::invalid_argument(&name.into(), value, "a number"))
    } else {
        Ok(value)
    }
}
