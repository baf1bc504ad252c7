//! Macros for working with [`Outcome`](crate::Outcome) in function bodies.
//!
//! - [`macro@crate::attempt`] - Unwraps an `Ok` or returns the `Err` from the
//!   enclosing function, converting the error with `From` on the way out.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{attempt, ok, Outcome};
//!
//! fn sum(a: Outcome<i32, &'static str>, b: Outcome<i32, &'static str>) -> Outcome<i32, String> {
//!     let a = attempt!(a);
//!     let b = attempt!(b);
//!     ok(a + b)
//! }
//!
//! assert_eq!(sum(ok(1), ok(2)), Outcome::Ok(3));
//! assert_eq!(sum(ok(1), Outcome::err("nope")), Outcome::Err("nope".to_string()));
//! ```

/// Evaluates an [`Outcome`](crate::Outcome), yielding its value or returning
/// its error early.
///
/// This plays the role of the `?` operator, which cannot be implemented for
/// `Outcome` on stable Rust. The error is passed through [`From::from`], so a
/// function may return a wider error type than the outcomes it consumes.
///
/// # Syntax
///
/// - `attempt!(expr)` - `expr` must evaluate to an `Outcome<V, E>`
///
/// # Examples
///
/// ```rust
/// use outcome_rail::{attempt, err, ok, Outcome};
///
/// fn parse_port(raw: &str) -> Outcome<u16, String> {
///     let port: u16 = attempt!(Outcome::from(raw.parse::<u16>().map_err(|e| e.to_string())));
///     if port == 0 {
///         return err("port must be non-zero".to_string());
///     }
///     ok(port)
/// }
///
/// assert_eq!(parse_port("8080"), Outcome::Ok(8080));
/// assert!(parse_port("http").is_err());
/// ```
#[macro_export]
macro_rules! attempt {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Ok(value) => value,
            $crate::Outcome::Err(error) => {
                return $crate::Outcome::Err(::core::convert::From::from(error));
            }
        }
    };
}
