// crates/shared-kernel/src/lib.rs
pub use error::{ErrorContext, ErrorKind, GuardError, GuardResult, NullSubject};

pub mod error;
pub mod value_objects;

pub use value_objects::ArgumentName;
