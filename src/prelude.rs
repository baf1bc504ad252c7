//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! let combined: Outcome<Vec<i32>, &str> = all([ok(1), ok(2)]);
//! assert_eq!(combined.map(|v| v.len()), Outcome::Ok(2));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`attempt!`]
//! - **Types**: [`Outcome`], [`UnwrapError`]
//! - **Functions**: [`ok`], [`err`], [`all`]
//! - **Traits**: [`IntoOutcome`], and `TraceOutcome` with the `tracing` feature

pub use crate::attempt;

pub use crate::aggregate::all;
pub use crate::outcome::{err, ok, Outcome};
pub use crate::unwrap_error::UnwrapError;

pub use crate::traits::IntoOutcome;
#[cfg(feature = "tracing")]
pub use crate::traits::TraceOutcome;
