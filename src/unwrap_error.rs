//! Abort payload for [`Outcome::unwrap`](crate::Outcome::unwrap).
//!
//! An `UnwrapError` signals a contract violation: the caller asserted that an
//! outcome succeeded and it did not. It is not a domain error and carries the
//! rendered outcome only, never the original error value.
use alloc::format;
use alloc::string::String;
use core::fmt::{self, Debug, Display};

/// Error raised when a failed [`Outcome`](crate::Outcome) is unwrapped.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let failure = Outcome::<i32, &str>::err("boom").try_unwrap().unwrap_err();
/// assert_eq!(failure.rendered(), r#"[Err: "boom"]"#);
/// assert_eq!(
///     failure.to_string(),
///     r#"called `Outcome::unwrap()` on [Err: "boom"]"#
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnwrapError {
    rendered: String,
}

impl UnwrapError {
    pub(crate) fn from_error<E: Debug>(error: &E) -> Self {
        Self { rendered: format!("[Err: {:?}]", error) }
    }

    /// Returns the rendering of the outcome that was unwrapped.
    #[must_use]
    #[inline]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl Display for UnwrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "called `Outcome::unwrap()` on {}", self.rendered)
    }
}

impl core::error::Error for UnwrapError {}
