use argguard::prelude::*;

#[test]
fn empty_collection_passes() {
    let empty: Vec<i32> = Vec::new();
    assert!(check_each_positive(Some(empty.as_slice()), "xs").is_ok());
}

#[test]
fn one_negative_element_fails() {
    let values = vec![1, -1];
    let err = check_each_positive(Some(values.as_slice()), "xs").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.argument_name(), Some("xs[1]"));
}

#[test]
fn null_element_is_a_null_reference() {
    let values = vec![Some(1), None];
    let err = check_each_positive(Some(values.as_slice()), "xs").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullReference);
}

#[test]
fn null_collection_is_a_null_reference() {
    let err = check_each_positive::<Option<i32>>(None, "xs").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullReference);
    assert!(matches!(err, GuardError::NullReference { subject: NullSubject::Collection, .. }));
}

#[test]
fn every_element_guard_accepts_matching_sequences() {
    let values = [2, 2, 2];
    let slice = Some(&values[..]);
    assert!(check_each_not_positive(Some(&[0, -1][..]), "xs").is_ok());
    assert!(check_each_negative(Some(&[-3, -1][..]), "xs").is_ok());
    assert!(check_each_not_negative(Some(&[0, 4][..]), "xs").is_ok());
    assert!(check_each_min_value(slice, 2, "xs").is_ok());
    assert!(check_each_max_value(slice, 2, "xs").is_ok());
    assert!(check_each_value_range(slice, 1, 3, "xs").is_ok());
    assert!(check_each_exact_value(slice, 2, "xs").is_ok());
    assert!(check_each_not_exact_value(slice, 3, "xs").is_ok());
}

#[test]
fn boxed_optional_elements_are_supported() {
    let values: Vec<Box<Option<u32>>> = vec![Box::new(Some(3)), Box::new(None)];
    let err = check_not_null_elements(Some(values.as_slice()), "boxed").unwrap_err();
    assert!(matches!(err, GuardError::NullReference { subject: NullSubject::Element { index: 1 }, .. }));
}

#[test]
fn size_and_index_guards_compose() {
    let buffer = vec![0_u8; 8];
    let buffer = check_size_range(Some(buffer.as_slice()), 4, 16, "buffer").unwrap();
    let (start, len) = check_index_and_count(buffer, 6, 2, "start", "len").unwrap();
    assert_eq!(&buffer[start..start + len], &[0, 0]);
    assert!(check_access_index(buffer, 8, "i").is_err());
}

#[test]
fn borrowed_strings_are_checked_by_value() {
    let names = vec!["bob", "carol"];
    assert!(check_not_null_elements(Some(names.as_slice()), "names").is_ok());
    assert!(check_each_min_value(Some(names.as_slice()), "alice", "names").is_ok());
    let err = check_each_not_exact_value(Some(names.as_slice()), "carol", "names").unwrap_err();
    assert_eq!(err.argument_name(), Some("names[1]"));
}
