//! Extension trait for lifting standard library types into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//! use outcome_rail::Outcome;
//!
//! let parsed = "42".parse::<i32>().into_outcome();
//! assert_eq!(parsed.map_err(|_| ()), Outcome::Ok(42));
//! ```

use crate::outcome::Outcome;

/// Conversion of `Result`-like values into an [`Outcome`].
///
/// Implemented for `Result<V, E>` (keeps the error) and for `Option<V>` with
/// a unit error. Use [`ok_or_outcome`](IntoOutcome::ok_or_outcome) to pick
/// the error an empty `Option` should turn into.
pub trait IntoOutcome<V, E> {
    /// Converts `self` into an outcome.
    fn into_outcome(self) -> Outcome<V, E>;

    /// Converts `self`, replacing any failure with `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::IntoOutcome;
    /// use outcome_rail::Outcome;
    ///
    /// let missing: Option<u32> = None;
    /// assert_eq!(missing.ok_or_outcome("no user"), Outcome::Err("no user"));
    /// ```
    fn ok_or_outcome<E2>(self, error: E2) -> Outcome<V, E2>
    where
        Self: Sized,
    {
        self.into_outcome().map_err(|_| error)
    }
}

impl<V, E> IntoOutcome<V, E> for Result<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        Outcome::from(self)
    }
}

impl<V> IntoOutcome<V, ()> for Option<V> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, ()> {
        crate::convert::option_to_outcome(self, ())
    }
}
