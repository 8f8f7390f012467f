// src/lib.rs
//! Guard clauses for argument validation.
//!
//! Guards validate one precondition and return the checked value unchanged,
//! so they compose inline with `?`. See [`prelude`] for the full surface.

pub mod prelude;
pub mod version;

pub use argguard_domain::{collection, constraint, reference, report, scalar, sign, text};
#[cfg(feature = "temporal")]
pub use argguard_domain::temporal;
pub use argguard_shared_kernel::{
    ArgumentName, ErrorContext, ErrorKind, GuardError, GuardResult, NullSubject, error,
    value_objects,
};
pub use version::VERSION;
