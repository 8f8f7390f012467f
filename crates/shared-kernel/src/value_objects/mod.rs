// crates/shared-kernel/src/value_objects/mod.rs
pub mod argument_name;

pub use argument_name::ArgumentName;
