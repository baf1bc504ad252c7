//! The [`Outcome`] type and its combinator surface.
//!
//! An `Outcome<V, E>` is either `Ok(V)` or `Err(E)`. Every combinator consumes
//! the outcome and returns a new one (or a plain value), so an instance never
//! changes variant after construction.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{err, ok, Outcome};
//!
//! let total: Outcome<i32, &str> = ok(1)
//!     .and_then(|x| ok(x + 1))
//!     .and_then(|y| ok(y + 1));
//! assert_eq!(total.unwrap_or(-1), 3);
//!
//! let failed: Outcome<i32, &str> = ok(1)
//!     .and_then(|_| err("boom"))
//!     .and_then(|y: i32| ok(y + 1));
//! assert_eq!(failed.unwrap_or(-1), -1);
//! ```
use core::convert::Infallible;
use core::fmt::{self, Debug, Display};
use core::hash::{Hash, Hasher};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::unwrap_error::UnwrapError;

pub mod iter;

/// Outcome of a fallible computation: a success value or an error payload.
///
/// An `Outcome` stops at the first failure: once it is `Err`, every
/// value-side combinator passes the error through untouched. Errors are
/// never accumulated.
///
/// Equality compares the variant and the payload, so `Ok(42) != Err(42)`.
/// Hashing only feeds the payload to the hasher; `Ok(x)` and `Err(x)` collide
/// but never compare equal. Ordering places every `Ok` before every `Err`.
///
/// # Serde Support
///
/// With the `serde` feature, `Outcome` serializes externally tagged, as
/// `{"Ok": value}` or `{"Err": error}`.
///
/// # Type Parameters
///
/// * `V` - The success value type
/// * `E` - The error payload type
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let good = Outcome::<i32, &str>::ok(42);
/// assert!(good.is_ok());
///
/// let bad = Outcome::<i32, &str>::err("failure");
/// assert!(bad.is_err());
/// assert_ne!(Outcome::<i32, i32>::ok(42), Outcome::err(42));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug)]
pub enum Outcome<V, E> {
    Ok(V),
    Err(E),
}

/// Wraps `value` in the success variant.
///
/// The error type is left to inference, so the result unifies with any
/// `Outcome<V, E>` the call site expects.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ok, Outcome};
///
/// let parsed: Outcome<u8, String> = ok(7);
/// assert_eq!(parsed, Outcome::Ok(7));
/// ```
#[inline]
pub fn ok<V, E>(value: V) -> Outcome<V, E> {
    Outcome::Ok(value)
}

/// Wraps `error` in the failure variant, leaving the value type to inference.
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, Outcome};
///
/// let missing: Outcome<u8, &str> = err("missing");
/// assert_eq!(missing, Outcome::Err("missing"));
/// ```
#[inline]
pub fn err<V, E>(error: E) -> Outcome<V, E> {
    Outcome::Err(error)
}

impl<V, E> Outcome<V, E> {
    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::ok(42);
    /// assert_eq!(o.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn ok(value: V) -> Self {
        Self::Ok(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::err("failure");
    /// assert_eq!(o.into_error(), Some("failure"));
    /// ```
    #[inline]
    pub fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Returns `true` for the success variant.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` for the failure variant.
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if the outcome is `Ok` and the value satisfies `pred`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, ()>::ok(4).is_ok_and(|v| v % 2 == 0));
    /// assert!(!Outcome::<i32, ()>::err(()).is_ok_and(|_| true));
    /// ```
    #[must_use]
    #[inline]
    pub fn is_ok_and<F>(self, pred: F) -> bool
    where
        F: FnOnce(V) -> bool,
    {
        match self {
            Self::Ok(value) => pred(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if the outcome is `Err` and the error satisfies `pred`.
    #[must_use]
    #[inline]
    pub fn is_err_and<F>(self, pred: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => pred(error),
        }
    }

    /// Borrows both payloads, producing an `Outcome<&V, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Mutably borrows both payloads, producing an `Outcome<&mut V, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut V, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the success value.
    ///
    /// `f` runs exactly once when the outcome is `Ok`; an `Err` is returned
    /// with the same payload and `f` is never called.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from `V` to `V2`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(100).map(|v| v + 1), Outcome::Ok(101));
    /// assert_eq!(Outcome::<i32, &str>::err("failure").map(|v| v + 1), Outcome::Err("failure"));
    /// ```
    #[inline]
    pub fn map<V2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> V2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the error payload, leaving a success untouched.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the error from `E` to `E2`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mapped = Outcome::<i32, &str>::err("failure").map_err(|e| format!("{e}-mapped"));
    /// assert_eq!(mapped, Outcome::Err("failure-mapped".to_string()));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Transforms whichever payload is present while keeping the variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::err("failure").bimap(|v| v + 1, |e| e.len());
    /// assert_eq!(o, Outcome::Err(7));
    /// ```
    #[inline]
    pub fn bimap<V2, E2, F, G>(self, on_ok: F, on_err: G) -> Outcome<V2, E2>
    where
        F: FnOnce(V) -> V2,
        G: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(on_ok(value)),
            Self::Err(error) => Outcome::Err(on_err(error)),
        }
    }

    /// Collapses both branches into a single plain value.
    ///
    /// Exactly one of the two functions is invoked, matching the variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(100).fold(|v| v + 1, |_| -1), 101);
    /// assert_eq!(Outcome::<i32, &str>::err("failure").fold(|v| v + 1, |_| -1), -1);
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(V) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Calls `f` with a reference to the success value and returns `self`.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error payload and returns `self`.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            f(error);
        }
        self
    }

    /// Chains a computation that may fail (flat-map on the success branch).
    ///
    /// On `Ok` the outcome of `f` is returned as is. On `Err` the same error
    /// payload is carried over to the new value type and `f` is not called.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next step
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 {
    ///         Outcome::ok(n / 2)
    ///     } else {
    ///         Outcome::err("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::ok(8).and_then(half).and_then(half), Outcome::Ok(2));
    /// assert_eq!(Outcome::ok(6).and_then(half).and_then(half), Outcome::Err("odd"));
    /// ```
    #[inline]
    pub fn and_then<V2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Outcome<V2, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a recovery step on the error branch (flat-map on the failure).
    ///
    /// On `Err` the outcome of `f` is returned as is; an `Ok` is carried over
    /// to the new error type and `f` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let recovered = Outcome::<i32, &str>::err("failure").or_else(|_| Outcome::<i32, ()>::ok(2));
    /// assert_eq!(recovered, Outcome::Ok(2));
    ///
    /// let kept = Outcome::<i32, &str>::ok(1).or_else(|_| Outcome::<i32, ()>::ok(2));
    /// assert_eq!(kept, Outcome::Ok(1));
    /// ```
    #[inline]
    pub fn or_else<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> Outcome<V, E2>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    /// Returns the success value, or `default` on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(100).unwrap_or(-1), 100);
    /// assert_eq!(Outcome::<i32, &str>::err("failure").unwrap_or(-1), -1);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: V) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value, or derives a fallback from the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let len = Outcome::<usize, &str>::err("four").unwrap_or_else(|e| e.len());
    /// assert_eq!(len, 4);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Returns the success value, or `V::default()` on failure.
    #[must_use]
    #[inline]
    pub fn unwrap_or_default(self) -> V
    where
        V: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => V::default(),
        }
    }

    /// Extracts the success value, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Extracts the error payload, if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Converts into a standard library [`Result`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(1).into_result(), Ok(1));
    /// assert_eq!(Outcome::<i32, &str>::err("no").into_result(), Err("no"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<V, E: Debug> Outcome<V, E> {
    /// Extracts the success value, or returns an [`UnwrapError`] describing
    /// the failed outcome.
    ///
    /// This is the non-panicking form of [`unwrap`](Outcome::unwrap), for
    /// callers that propagate with `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(42).try_unwrap().ok(), Some(42));
    ///
    /// let failure = Outcome::<i32, &str>::err("boom").try_unwrap().unwrap_err();
    /// assert!(failure.to_string().contains("boom"));
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<V, UnwrapError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(UnwrapError::from_error(&error)),
        }
    }

    /// Extracts the success value for call sites that already know the
    /// outcome succeeded.
    ///
    /// # Panics
    ///
    /// Panics with the message of an [`UnwrapError`] if the outcome is `Err`.
    /// The message renders the outcome, including its error payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(42).unwrap(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// Outcome::<i32, i32>::err(42).unwrap();
    /// ```
    #[track_caller]
    #[inline]
    pub fn unwrap(self) -> V {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(failure) => {
                #[cfg(feature = "tracing")]
                tracing::error!(outcome = failure.rendered(), "unwrap on a failed outcome");
                panic!("{}", failure)
            }
        }
    }
}

impl<V> Outcome<V, Infallible> {
    /// Extracts the value of an outcome that cannot fail.
    #[must_use]
    #[inline]
    pub fn into_ok(self) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Err(never) => match never {},
        }
    }

    /// Reinterprets an infallible outcome at any error type.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::convert::Infallible;
    /// use outcome_rail::Outcome;
    ///
    /// let sure: Outcome<i32, Infallible> = Outcome::ok(3);
    /// let widened: Outcome<i32, String> = sure.widen_err();
    /// assert_eq!(widened, Outcome::Ok(3));
    /// ```
    #[inline]
    pub fn widen_err<E>(self) -> Outcome<V, E> {
        Outcome::Ok(self.into_ok())
    }
}

impl<E> Outcome<Infallible, E> {
    /// Extracts the error of an outcome that cannot succeed.
    #[must_use]
    #[inline]
    pub fn into_err(self) -> E {
        match self {
            Self::Ok(never) => match never {},
            Self::Err(error) => error,
        }
    }

    /// Reinterprets an always-failing outcome at any value type.
    #[inline]
    pub fn widen_ok<V>(self) -> Outcome<V, E> {
        Outcome::Err(self.into_err())
    }
}

impl<V: Hash, E: Hash> Hash for Outcome<V, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Ok(value) => value.hash(state),
            Self::Err(error) => error.hash(state),
        }
    }
}

impl<V: Display, E: Display> Display for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "[Ok: {}]", value),
            Self::Err(error) => write!(f, "[Err: {}]", error),
        }
    }
}
