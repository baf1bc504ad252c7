//! First-failure aggregation of many outcomes into one.
//!
//! [`all`] and the [`FromIterator`] impl pull elements in order and stop at
//! the first `Err`. Elements after it are never pulled from the source
//! iterator, so a lazily mapped iterator does no further work.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{all, err, ok, Outcome};
//!
//! let good: Outcome<Vec<i32>, &str> = all([ok(1), ok(2), ok(3)]);
//! assert_eq!(good, Outcome::Ok(vec![1, 2, 3]));
//!
//! let bad: Outcome<Vec<i32>, &str> = all([ok(1), err("a"), ok(2), err("b")]);
//! assert_eq!(bad, Outcome::Err("a"));
//! ```
use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::outcome::Outcome;

/// Combines outcomes into one, keeping the first error in iteration order.
///
/// Returns `Ok` with every success value (same length and order as the
/// input) when no element failed. An empty input yields `Ok(vec![])`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{all, Outcome};
///
/// let none: Outcome<Vec<i32>, &str> = all(Vec::new());
/// assert_eq!(none, Outcome::Ok(vec![]));
/// ```
#[inline]
pub fn all<V, E, I>(outcomes: I) -> Outcome<Vec<V>, E>
where
    I: IntoIterator<Item = Outcome<V, E>>,
{
    outcomes.into_iter().collect()
}

impl<V, E> Outcome<Vec<V>, E> {
    /// Associated form of [`all`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let combined = Outcome::all([Outcome::<i32, &str>::ok(1), Outcome::ok(2)]);
    /// assert_eq!(combined, Outcome::Ok(vec![1, 2]));
    /// ```
    #[inline]
    pub fn all<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Outcome<V, E>>,
    {
        all(outcomes)
    }
}

/// Collects success values until the first failure.
///
/// Works for any target collection, e.g. `Outcome<Vec<_>, _>`,
/// `Outcome<String, _>` or a `SmallVec`.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let parsed: Outcome<Vec<u8>, String> = ["1", "2", "x"]
///     .iter()
///     .map(|s| Outcome::from(s.parse::<u8>().map_err(|e| e.to_string())))
///     .collect();
/// assert!(parsed.is_err());
/// ```
impl<V, E, C> FromIterator<Outcome<V, E>> for Outcome<C, E>
where
    C: FromIterator<V>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<V, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: C = FirstFailure {
            iter: iter.into_iter(),
            failure: &mut failure,
        }
        .collect();

        match failure {
            Some(error) => Outcome::Err(error),
            None => Outcome::Ok(collected),
        }
    }
}

/// Yields success values and parks the first error in `failure`.
struct FirstFailure<'a, I, E> {
    iter: I,
    failure: &'a mut Option<E>,
}

impl<I, V, E> Iterator for FirstFailure<'_, I, E>
where
    I: Iterator<Item = Outcome<V, E>>,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        if self.failure.is_some() {
            return None;
        }
        match self.iter.next()? {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(error) => {
                *self.failure = Some(error);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failure.is_some() {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I, V, E> FusedIterator for FirstFailure<'_, I, E> where I: Iterator<Item = Outcome<V, E>> {}
