// src/version.rs
//! Version string of the guard library, kept in sync with `Cargo.toml`.

/// Library version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
