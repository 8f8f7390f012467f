//! Null and type-compatibility guards.

pub mod type_descriptor;

use std::any::{Any, type_name};

use argguard_shared_kernel::{ArgumentName, GuardError, GuardResult, NullSubject};

pub use type_descriptor::{RuntimeType, TypeDescriptor};

/// Unwraps `value`, rejecting `None` as a null reference.
pub fn check_not_null<'n, T>(value: Option<T>, name: impl Into<ArgumentName<'n>>) -> GuardResult<T> {
    value.ok_or_else(|| GuardError::null_reference(&name.into(), NullSubject::Value))
}

/// Passes when the runtime type of `value` is `expected` or declares it as a
/// supertype. Both nulls are checked before the types are compared.
pub fn check_instance_of_type<'v, 'n, V>(
    value: Option<&'v V>,
    expected: Option<&TypeDescriptor>,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'v V>
where
    V: RuntimeType + ?Sized,
{
    let name = name.into();
    let value = value.ok_or_else(|| GuardError::null_reference(&name, NullSubject::Value))?;
    let expected = expected.ok_or_else(|| GuardError::null_reference(&name, NullSubject::Type))?;

    let actual = value.runtime_type();
    if actual.is_assignable_to(expected) {
        Ok(value)
    } else {
        Err(GuardError::type_mismatch(&name, actual.name(), expected.name()))
    }
}

/// Downcasts a type-erased value to `T`; only the exact concrete type matches.
///
/// `dyn Any` cannot name its concrete type, so a rejection states the
/// requirement only.
pub fn check_instance_of<'v, 'n, T: Any>(
    value: Option<&'v dyn Any>,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<&'v T> {
    let name = name.into();
    let value = value.ok_or_else(|| GuardError::null_reference(&name, NullSubject::Value))?;
    value.downcast_ref::<T>().ok_or_else(|| {
        GuardError::invalid_argument(
            &name,
            "a value of another type",
            format_args!("an instance of `{}`", type_name::<T>()),
        )
    })
}

/// Passes when `source` is `destination` or declares it as a supertype.
pub fn check_assignable_to_type<'n>(
    source: Option<&TypeDescriptor>,
    destination: Option<&TypeDescriptor>,
    name: impl Into<ArgumentName<'n>>,
) -> GuardResult<()> {
    let name = name.into();
    let (Some(source), Some(destination)) = (source, destination) else {
        return Err(GuardError::null_reference(&name, NullSubject::Type));
    };

    if source.is_assignable_to(destination) {
        Ok(())
    } else {
        Err(GuardError::type_mismatch(&name, source.name(), destination.name()))
    }
}
