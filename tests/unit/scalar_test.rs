use argguard::prelude::*;

#[test]
fn min_value_bound_is_inclusive() {
    assert_eq!(check_min_value(5, 5, "n").unwrap(), 5);
    assert!(check_min_value(4, 5, "n").is_err());
}

#[test]
fn max_value_bound_is_inclusive() {
    assert_eq!(check_max_value(5, 5, "n").unwrap(), 5);
    assert!(check_max_value(6, 5, "n").is_err());
}

#[test]
fn inverted_range_rejects_every_value() {
    for value in [0_i32, 1, 5, 9, 10] {
        let err = check_value_range(value, 9, 1, "n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn range_message_embeds_both_bounds() {
    let err = check_value_range(7.5, 0.0, 1.0, "ratio").unwrap_err();
    assert_eq!(err.to_string(), "Argument 'ratio' must be within [0, 1], but was 7.5");
}

#[test]
fn guards_compose_inline() {
    fn scaled(factor: i64) -> GuardResult<i64> {
        Ok(check_positive(factor, "factor")? * 10)
    }

    assert_eq!(scaled(3).unwrap(), 30);
    assert!(scaled(0).is_err());
}

#[test]
fn every_primitive_shares_the_same_guard() {
    assert!(check_positive(1_u8, "v").is_ok());
    assert!(check_positive(1_u16, "v").is_ok());
    assert!(check_positive(1_u32, "v").is_ok());
    assert!(check_positive(1_u64, "v").is_ok());
    assert!(check_positive(1_usize, "v").is_ok());
    assert!(check_positive(1_i16, "v").is_ok());
    assert!(check_positive(1_isize, "v").is_ok());
    assert!(check_positive(0.5_f32, "v").is_ok());
    assert!(check_positive('1', "v").is_ok());
    assert!(check_not_positive(0_u128, "v").is_ok());
}

#[test]
fn context_wraps_guard_failure() {
    let err = check_negative(3, "delta").context("applying adjustment").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        err.to_string(),
        "applying adjustment: Argument 'delta' must be < 0, but was 3"
    );
}
