// crates/domain/src/reference/type_descriptor.rs
use std::{
    any::{TypeId, type_name},
    fmt,
    hash::{Hash, Hasher},
};

/// Runtime identity of a type plus the supertypes it may be viewed as.
///
/// Rust has no inheritance, so "is a subtype of" is declared explicitly with
/// [`TypeDescriptor::extends`]. Interfaces are described by their trait
/// object type, e.g. `TypeDescriptor::of::<dyn std::error::Error>()`.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
    supertypes: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            supertypes: Vec::new(),
        }
    }

    #[must_use]
    pub fn extends(mut self, supertype: TypeDescriptor) -> Self {
        self.supertypes.push(supertype);
        self
    }

    pub const fn id(&self) -> TypeId {
        self.id
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn supertypes(&self) -> &[TypeDescriptor] {
        &self.supertypes
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Identity, or assignability through any declared supertype chain.
    pub fn is_assignable_to(&self, target: &TypeDescriptor) -> bool {
        self.id == target.id || self.supertypes.iter().any(|supertype| supertype.is_assignable_to(target))
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Values that can report their runtime type.
///
/// `&T` and `Box<T>` are transparent: they report the pointee, so a
/// `Box<i32>` is an instance of `i32` and not of `Box<i32>`. `Vec<T>` reports
/// itself.
pub trait RuntimeType {
    fn runtime_type(&self) -> TypeDescriptor;
}

macro_rules! impl_runtime_type {
    ($($t:ty),* $(,)?) => {
        $(
            impl RuntimeType for $t {
                fn runtime_type(&self) -> TypeDescriptor {
                    TypeDescriptor::of::<$t>()
                }
            }
        )*
    };
}

impl_runtime_type!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, bool, str, String,
);

impl<T: 'static> RuntimeType for Vec<T> {
    fn runtime_type(&self) -> TypeDescriptor {
        TypeDescriptor::of::<Vec<T>>()
    }
}

impl<T: RuntimeType + ?Sized> RuntimeType for &T {
    fn runtime_type(&self) -> TypeDescriptor {
        (**self).runtime_type()
    }
}

impl<T: RuntimeType + ?Sized> RuntimeType for Box<T> {
    fn runtime_type(&self) -> TypeDescriptor {
        (**self).runtime_type()
    }
}
