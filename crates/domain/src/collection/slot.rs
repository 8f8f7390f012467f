// crates/domain/src/collection/slot.rs

/// A sequence element that may be absent.
///
/// `Option<T>` is absent when `None`. Plain values and borrowed references are
/// always present; a `&T` element is compared as `&T`, so `[&str]` is checked
/// against a `&str` bound. `Box<S>` defers to the boxed slot.
pub trait Slot {
    type Value;

    fn value(&self) -> Option<&Self::Value>;
}

impl<T> Slot for Option<T> {
    type Value = T;

    #[inline]
    fn value(&self) -> Option<&T> {
        self.as_ref()
    }
}

impl<'a, T: ?Sized> Slot for &'a T {
    type Value = &'a T;

    #[inline]
    fn value(&self) -> Option<&&'a T> {
        Some(self)
    }
}

impl<S: Slot + ?Sized> Slot for Box<S> {
    type Value = S::Value;

    #[inline]
    fn value(&self) -> Option<&S::Value> {
        (**self).value()
    }
}

macro_rules! impl_present_slot {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::collection::Slot for $t {
                type Value = Self;

                #[inline]
                fn value(&self) -> Option<&Self> {
                    Some(self)
                }
            }
        )*
    };
}

pub(crate) use impl_present_slot;

impl_present_slot!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, bool, String,
);
