//! A two-variant outcome type for fallible computations, with a fail-fast
//! combinator surface.
//!
//! [`Outcome<V, E>`](Outcome) is either `Ok(V)` or `Err(E)`. Combinators
//! transform either side, chain further fallible steps, collapse both sides
//! into one value, and aggregate many outcomes into one. The first failure
//! always wins; errors are never accumulated.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use outcome_rail::{err, ok, Outcome};
//!
//! let chain: Outcome<i32, &str> = ok(1).and_then(|x| ok(x + 1)).and_then(|y| ok(y + 1));
//! assert_eq!(chain.unwrap_or(-1), 3);
//!
//! let broken: Outcome<i32, &str> = ok(1).and_then(|_| err("boom")).and_then(|y: i32| ok(y + 1));
//! assert_eq!(broken.unwrap_or(-1), -1);
//! ```
//!
//! ## Aggregation
//!
//! ```
//! use outcome_rail::{all, err, ok, Outcome};
//!
//! let combined: Outcome<Vec<i32>, &str> = all([ok(1), err("a"), ok(2), err("b")]);
//! assert_eq!(combined, Outcome::Err("a"));
//! ```
//!
//! ## Interop with `Result`
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//!
//! fn port(raw: &str) -> Result<u16, String> {
//!     raw.parse::<u16>()
//!         .into_outcome()
//!         .map_err(|e| e.to_string())
//!         .into_result()
//! }
//!
//! assert_eq!(port("80"), Ok(80));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// First-failure aggregation of many outcomes
pub mod aggregate;
/// Conversions between Outcome, Result, and Option
pub mod convert;
/// The `attempt!` early-return macro
pub mod macros;
/// The Outcome type and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for lifting and tracing outcomes
pub mod traits;
/// Abort payload raised by `Outcome::unwrap`
pub mod unwrap_error;

pub use aggregate::all;
pub use outcome::{err, ok, Outcome};
pub use traits::*;
pub use unwrap_error::UnwrapError;
