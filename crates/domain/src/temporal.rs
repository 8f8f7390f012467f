//! Guards over `chrono` instants and durations.
//!
//! Timestamps and durations are ordered, so the generic bound guards in
//! [`crate::scalar`] and [`crate::collection`] apply to them directly. This
//! module adds the zero point for `TimeDelta` and the clock-relative checks.

use std::fmt;

use argguard_shared_kernel::{ArgumentName, GuardError, GuardResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::{
    collection::{Slot, slot::impl_present_slot},
    sign::HasZero,
};

impl HasZero for TimeDelta {
    #[inline]
    fn zero() -> Self {
        TimeDelta::zero()
    }
}

impl<Tz: TimeZone> Slot for DateTime<Tz> {
    type Value = Self;

    fn value(&self) -> Option<&Self> {
        Some(self)
    }
}

impl_present_slot!(NaiveDate, NaiveDateTime, NaiveTime, TimeDelta);

/// Passes when `value` is not later than the current UTC time.
pub fn check_not_in_future<'n, Tz>(
    value: DateTime<Tz>,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<DateTime<Tz>>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    check_not_in_future_at(value, Utc::now(), name)
}

/// Passes when `value` is not later than `now`.
pub fn check_not_in_future_at<'n, Tz>(
    value: DateTime<Tz>,
    now: DateTime<Utc>,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<DateTime<Tz>>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if value.with_timezone(&Utc) <= now {
        Ok(value)
    } else {
        Err(GuardError::invalid_argument(&name.into(), &value, format!("not after {now}")))
    }
}

/// Passes when `value` is not earlier than the current UTC time.
pub fn check_not_in_past<'n, Tz>(
    value: DateTime<Tz>,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<DateTime<Tz>>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    check_not_in_past_at(value, Utc::now(), name)
}

pub fn check_not_in_past_at<'n, Tz>(
    value: DateTime<Tz>,
    now: DateTime<Utc>,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<DateTime<Tz>>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if value.with_timezone(&Utc) >= now {
        Ok(value)
    } else {
        Err(GuardError::invalid_argument(&name.into(), &value, format!("not before {now}")))
    }
}
