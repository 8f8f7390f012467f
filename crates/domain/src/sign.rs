//! Zero points for the sign guards.

use num_traits::Zero;

use crate::constraint::Constraint;

/// Types with a distinguished zero that sign checks compare against.
pub trait HasZero {
    fn zero() -> Self;
}

macro_rules! impl_has_zero_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl HasZero for $t {
                #[inline]
                fn zero() -> Self {
                    <$t as Zero>::zero()
                }
            }
        )*
    };
}

impl_has_zero_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl HasZero for char {
    #[inline]
    fn zero() -> Self {
        '\0'
    }
}

impl<T: HasZero> Constraint<T> {
    pub fn positive() -> Self {
        Self::GreaterThan(T::zero())
    }

    pub fn not_positive() -> Self {
        Self::AtMost(T::zero())
    }

    pub fn negative() -> Self {
        Self::LessThan(T::zero())
    }

    pub fn not_negative() -> Self {
        Self::AtLeast(T::zero())
    }
}
