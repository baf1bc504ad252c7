//! Conversion helpers between `Outcome`, `Result`, and `Option`.
//!
//! These adapters make it straightforward to adopt `outcome-rail` at the edge
//! of code that already speaks `Result`, and to hand outcomes back to APIs
//! (or the `?` operator) that expect one.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_ok());
//!
//! let back: Result<i32, &str> = outcome_to_result(Outcome::err("failed"));
//! assert_eq!(back, Err("failed"));
//! ```

use crate::outcome::Outcome;

/// Converts a `Result` into an `Outcome`, keeping the variant and payload.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(result_to_outcome(Err::<i32, _>("failed")), Outcome::Err("failed"));
/// ```
#[inline]
pub fn result_to_outcome<V, E>(result: Result<V, E>) -> Outcome<V, E> {
    match result {
        Ok(value) => Outcome::Ok(value),
        Err(error) => Outcome::Err(error),
    }
}

/// Converts an `Outcome` into a `Result`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::ok(1)), Ok(1));
/// ```
#[inline]
pub fn outcome_to_result<V, E>(outcome: Outcome<V, E>) -> Result<V, E> {
    outcome.into_result()
}

/// Converts an `Option` into an `Outcome`, using `error` for `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(option_to_outcome(Some(3), "missing"), Outcome::Ok(3));
/// assert_eq!(option_to_outcome(None::<i32>, "missing"), Outcome::Err("missing"));
/// ```
#[inline]
pub fn option_to_outcome<V, E>(option: Option<V>, error: E) -> Outcome<V, E> {
    match option {
        Some(value) => Outcome::Ok(value),
        None => Outcome::Err(error),
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        result_to_outcome(result)
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}
