//! Comparison bounds shared by the scalar and collection guards.

use std::fmt;

use argguard_shared_kernel::{ArgumentName, GuardError, GuardResult};

/// A single comparison against caller-supplied operand(s).
///
/// Operands are taken as given: `Within { min, max }` with `min > max` is an
/// unsatisfiable range that admits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint<T> {
    GreaterThan(T),
    LessThan(T),
    AtLeast(T),
    AtMost(T),
    Within { min: T, max: T },
    EqualTo(T),
    NotEqualTo(T),
}

impl<T: PartialOrd> Constraint<T> {
    #[inline]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::GreaterThan(bound) => value > bound,
            Self::LessThan(bound) => value < bound,
            Self::AtLeast(min) => value >= min,
            Self::AtMost(max) => value <= max,
            Self::Within { min, max } => value >= min && value <= max,
            Self::EqualTo(expected) => value == expected,
            Self::NotEqualTo(forbidden) => value != forbidden,
        }
    }
}

impl<T: PartialOrd + fmt::Display> Constraint<T> {
    /// Returns `value` untouched when admitted.
    pub fn check(&self, value: T, name: &ArgumentName<'_>) -> GuardResult<T> {
        self.verify(&value, name)?;
        Ok(value)
    }

    pub fn verify(&self, value: &T, name: &ArgumentName<'_>) -> GuardResult<()> {
        if self.admits(value) {
            Ok(())
        } else {
            Err(GuardError::invalid_argument(name, value, self))
        }
    }
}

impl<T: fmt::Display> fmt::Display for Constraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GreaterThan(bound) => write!(f, "> {bound}"),
            Self::LessThan(bound) => write!(f, "< {bound}"),
            Self::AtLeast(min) => write!(f, ">= {min}"),
            Self::AtMost(max) => write!(f, "<= {max}"),
            Self::Within { min, max } => write!(f, "within [{min}, {max}]"),
            Self::EqualTo(expected) => write!(f, "== {expected}"),
            Self::NotEqualTo(forbidden) => write!(f, "!= {forbidden}"),
        }
    }
}
