//! Extension traits around [`Outcome`](crate::Outcome).
//!
//! - [`IntoOutcome`]: lifts `Result` and `Option` into an outcome
//! - [`TraceOutcome`]: emits `tracing` events from inside a chain (feature `tracing`)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//!
//! let outcome = Some(5).ok_or_outcome("empty");
//! assert_eq!(outcome.unwrap_or(0), 5);
//! ```

pub mod into_outcome;
#[cfg(feature = "tracing")]
pub mod trace_outcome;

pub use into_outcome::IntoOutcome;
#[cfg(feature = "tracing")]
pub use trace_outcome::TraceOutcome;
