use argguard::prelude::*;
use chrono::{NaiveDate, TimeDelta, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn dates_use_chronological_bounds() {
    let start = date(2024, 1, 1);
    let end = date(2024, 12, 31);
    assert_eq!(check_value_range(date(2024, 6, 1), start, end, "day").unwrap(), date(2024, 6, 1));
    assert!(check_min_value(date(2023, 12, 31), start, "day").is_err());
    assert!(check_max_value(end, end, "day").is_ok());
}

#[test]
fn date_collections_are_checked_element_wise() {
    let days = [Some(date(2024, 2, 29)), Some(date(2025, 3, 1))];
    let err = check_each_max_value(Some(&days[..]), date(2024, 12, 31), "days").unwrap_err();
    assert_eq!(err.argument_name(), Some("days[1]"));
}

#[test]
fn durations_support_sign_guards_element_wise() {
    let timeouts = [TimeDelta::seconds(1), TimeDelta::zero()];
    assert!(check_each_not_negative(Some(&timeouts[..]), "timeouts").is_ok());
    assert!(check_each_positive(Some(&timeouts[..]), "timeouts").is_err());
}

#[test]
fn future_timestamps_are_rejected_against_reference() {
    let now = Utc::now();
    assert!(check_not_in_future_at(now - TimeDelta::minutes(1), now, "issued_at").is_ok());
    let err = check_not_in_future_at(now + TimeDelta::minutes(1), now, "issued_at").unwrap_err();
    assert!(err.to_string().contains("must be not after"));
    assert!(check_not_in_past_at(now - TimeDelta::minutes(1), now, "expires_at").is_err());
}
