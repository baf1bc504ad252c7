//! `tracing` integration for outcomes (requires the `tracing` feature).
//!
//! The methods here emit one event describing the payload and hand the
//! outcome back unchanged, so they can sit anywhere in a combinator chain.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::TraceOutcome;
//! use outcome_rail::Outcome;
//!
//! let loaded = Outcome::<u32, &str>::err("config missing")
//!     .trace_err("loading config")
//!     .unwrap_or(8080);
//! assert_eq!(loaded, 8080);
//! ```

use core::fmt::Debug;

use crate::outcome::Outcome;

/// Logs outcomes through `tracing` without altering them.
pub trait TraceOutcome: Sized {
    /// Emits a `WARN` event with `message` and the error payload if the
    /// outcome failed.
    fn trace_err(self, message: &str) -> Self;

    /// Emits a `DEBUG` event with `message` and the value if the outcome
    /// succeeded.
    fn trace_ok(self, message: &str) -> Self;
}

impl<V: Debug, E: Debug> TraceOutcome for Outcome<V, E> {
    fn trace_err(self, message: &str) -> Self {
        self.inspect_err(|error| tracing::warn!(error = ?error, "{}", message))
    }

    fn trace_ok(self, message: &str) -> Self {
        self.inspect(|value| tracing::debug!(value = ?value, "{}", message))
    }
}
