//! Caller-side logging of rejected arguments.
//!
//! Guards themselves never log. Call sites that want a trail opt in:
//!
//! ```
//! use argguard_domain::{report::LogRejection, scalar::check_positive};
//!
//! let rejected = check_positive(-1, "amount").log_rejection();
//! assert!(rejected.is_err());
//! ```

use argguard_shared_kernel::GuardResult;
use log::Level;

pub const LOG_TARGET: &str = "argguard";

pub trait LogRejection: Sized {
    /// Logs a rejection at `warn` and hands the result back untouched.
    fn log_rejection(self) -> Self {
        self.log_rejection_at(Level::Warn)
    }

    fn log_rejection_at(self, level: Level) -> Self;
}

impl<T> LogRejection for GuardResult<T> {
    fn log_rejection_at(self, level: Level) -> Self {
        if let Err(err) = &self {
            log::log!(target: LOG_TARGET, level, "rejected argument ({:?}): {err}", err.kind());
        }
        self
    }
}
