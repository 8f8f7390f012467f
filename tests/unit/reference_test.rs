use argguard::prelude::*;

trait Animal: RuntimeType + std::fmt::Debug {}

#[derive(Debug)]
struct Dog {
    name: &'static str,
}

#[derive(Debug)]
struct Cat;

impl RuntimeType for Dog {
    fn runtime_type(&self) -> TypeDescriptor {
        TypeDescriptor::of::<Dog>().extends(TypeDescriptor::of::<dyn Animal>())
    }
}

impl RuntimeType for Cat {
    fn runtime_type(&self) -> TypeDescriptor {
        TypeDescriptor::of::<Cat>().extends(TypeDescriptor::of::<dyn Animal>())
    }
}

impl Animal for Dog {}
impl Animal for Cat {}

#[test]
fn string_literal_is_instance_of_str() {
    let checked = check_instance_of_type(Some("x"), Some(&TypeDescriptor::of::<str>()), "v").unwrap();
    assert_eq!(checked, "x");
}

#[test]
fn string_literal_is_not_instance_of_integer() {
    let err = check_instance_of_type(Some("x"), Some(&TypeDescriptor::of::<i32>()), "v").unwrap_err();
    assert!(matches!(err, GuardError::TypeMismatch { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn absent_value_is_a_null_reference() {
    let err = check_instance_of_type::<str>(None, Some(&TypeDescriptor::of::<str>()), "v").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullReference);
}

#[test]
fn implementor_is_instance_of_its_interface() {
    let dog = Dog { name: "rex" };
    let animal = TypeDescriptor::of::<dyn Animal>();
    let checked = check_instance_of_type(Some(&dog), Some(&animal), "pet").unwrap();
    assert_eq!(checked.name, "rex");
    assert!(check_instance_of_type(Some(&dog), Some(&TypeDescriptor::of::<String>()), "pet").is_err());
}

#[test]
fn assignability_follows_declared_supertypes() {
    let dog = Dog { name: "rex" }.runtime_type();
    let animal = TypeDescriptor::of::<dyn Animal>();
    assert!(check_assignable_to_type(Some(&dog), Some(&animal), "t").is_ok());
    assert!(check_assignable_to_type(Some(&animal), Some(&dog), "t").is_err());
}

#[test]
fn trait_objects_are_checked_by_their_runtime_type() {
    let pets: Vec<Box<dyn Animal>> = vec![Box::new(Dog { name: "rex" }), Box::new(Cat)];
    let dog = TypeDescriptor::of::<Dog>();
    let animal = TypeDescriptor::of::<dyn Animal>();

    let is_dog: Vec<bool> = pets
        .iter()
        .map(|pet| check_instance_of_type::<dyn Animal>(Some(pet.as_ref()), Some(&dog), "pet").is_ok())
        .collect();
    assert_eq!(is_dog, [true, false]);

    for pet in &pets {
        assert!(check_instance_of_type::<dyn Animal>(Some(pet.as_ref()), Some(&animal), "pet").is_ok());
    }

    let err = check_instance_of_type::<dyn Animal>(Some(pets[1].as_ref()), Some(&dog), "pet").unwrap_err();
    assert!(matches!(err, GuardError::TypeMismatch { .. }));
    assert!(err.to_string().contains("Cat`"));
}
