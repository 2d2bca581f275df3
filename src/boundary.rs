//! Boundary adapter between external collaborators and the algebra
//!
//! Inside a pipeline, failures are values. External collaborators (lookups,
//! I/O, third-party code) may instead panic, or report defects through their
//! own `Result` types. The functions here are the single place where those
//! defects are intercepted and converted into [`Outcome::Failure`]; nothing
//! else in this crate catches panics.
//!
//! ```
//! use faultline::boundary::from_throwing;
//! use faultline::Outcome;
//!
//! fn accept_positive_evens(n: i32) -> i32 {
//!     if n % 2 == 0 { n } else { panic!("Received Odd Value") }
//! }
//!
//! let even = from_throwing(|| accept_positive_evens(4), |fault| fault.to_string());
//! assert_eq!(even, Outcome::Success(4));
//!
//! let odd = from_throwing(|| accept_positive_evens(3), |fault| fault.to_string());
//! assert_eq!(odd, Outcome::Failure("Received Odd Value".to_string()));
//! ```
//!
//! Every call wraps exactly one collaborator invocation and runs it on the
//! caller's thread. [`from_throwing_future`] does the same for a future the
//! caller already built; driving that future is up to the caller's executor.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::Outcome;

const NON_STRING_PAYLOAD: &str = "panic with a non-string payload";

/// The cause of a panic caught at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Create a fault with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Fault {
            message: message.into(),
        }
    }

    /// Build a fault from a panic payload as returned by
    /// [`std::panic::catch_unwind`].
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => payload
                .downcast_ref::<&'static str>()
                .map(|s| (*s).to_string())
                .unwrap_or_else(|| NON_STRING_PAYLOAD.to_string()),
        };
        Fault { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Fault {}

/// Why a [`from_fallible`] call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError<X> {
    /// The collaborator returned `Err`.
    Returned(X),
    /// The collaborator panicked.
    Panicked(Fault),
}

impl<X: fmt::Display> fmt::Display for BoundaryError<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryError::Returned(error) => write!(f, "collaborator failed: {}", error),
            BoundaryError::Panicked(fault) => write!(f, "collaborator panicked: {}", fault),
        }
    }
}

impl<X: StdError + 'static> StdError for BoundaryError<X> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            BoundaryError::Returned(error) => Some(error),
            BoundaryError::Panicked(fault) => Some(fault),
        }
    }
}

/// Call a collaborator that may panic, converting a panic into a failure.
///
/// Returns `Success(f())` when `f` returns normally. When `f` panics, the
/// panic is caught, described as a [`Fault`] and passed to `on_error`, whose
/// result becomes the `Failure`.
///
/// Anything `f` borrows mutably may be left partially updated when it
/// panics, and the caller sees that state once the `Failure` is returned.
///
/// ```
/// use faultline::boundary::from_throwing;
/// use faultline::Outcome;
///
/// assert_eq!(from_throwing(|| 42, |_| "wrapped"), Outcome::Success(42));
/// assert_eq!(
///     from_throwing(|| -> i32 { panic!("lookup aborted") }, |_| "wrapped"),
///     Outcome::Failure("wrapped")
/// );
/// ```
pub fn from_throwing<T, E, F, H>(f: F, on_error: H) -> Outcome<T, E>
where
    F: FnOnce() -> T,
    H: FnOnce(Fault) -> E,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(on_error(caught(payload))),
    }
}

/// Call a collaborator that reports defects through `Result` and may also
/// panic. Both are converted into a failure through `on_error`.
///
/// ```
/// use faultline::boundary::{from_fallible, BoundaryError};
/// use faultline::Outcome;
///
/// let parsed = from_fallible(|| "12".parse::<i32>(), |e| e.to_string());
/// assert_eq!(parsed, Outcome::Success(12));
///
/// let bad = from_fallible(|| "x".parse::<i32>(), |e| match e {
///     BoundaryError::Returned(_) => "not a number",
///     BoundaryError::Panicked(_) => "parser crashed",
/// });
/// assert_eq!(bad, Outcome::Failure("not a number"));
/// ```
pub fn from_fallible<T, X, E, F, H>(f: F, on_error: H) -> Outcome<T, E>
where
    F: FnOnce() -> Result<T, X>,
    H: FnOnce(BoundaryError<X>) -> E,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Outcome::Success(value),
        Ok(Err(error)) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("collaborator returned an error; converted to failure");
            Outcome::Failure(on_error(BoundaryError::Returned(error)))
        }
        Err(payload) => Outcome::Failure(on_error(BoundaryError::Panicked(caught(payload)))),
    }
}

/// Await a caller-supplied future, converting a panic while polling it into
/// a failure.
///
/// The future is polled by whatever executor awaits the returned future;
/// this function never spawns or schedules work.
///
/// ```
/// use faultline::boundary::from_throwing_future;
/// use faultline::Outcome;
///
/// # tokio_test::block_on(async {
/// async fn add_ten(n: i32) -> i32 {
///     n + 10
/// }
///
/// let result = from_throwing_future(add_ten(1), |fault| fault.to_string()).await;
/// assert_eq!(result, Outcome::Success(11));
/// # });
/// ```
pub async fn from_throwing_future<Fut, T, E, H>(future: Fut, on_error: H) -> Outcome<T, E>
where
    Fut: Future<Output = T>,
    H: FnOnce(Fault) -> E,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(on_error(caught(payload))),
    }
}

fn caught(payload: Box<dyn Any + Send>) -> Fault {
    let fault = Fault::from_panic(payload);
    #[cfg(feature = "tracing")]
    tracing::warn!(fault = %fault, "collaborator panicked; converted to failure");
    fault
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum LookupError {
        OddValue,
        Unknown(String),
    }

    fn accept_positive_evens(n: i32) -> i32 {
        if n % 2 == 0 {
            n
        } else if n < 0 {
            panic!("Received Negative Value")
        } else {
            panic!("Received Odd Value")
        }
    }

    #[test]
    fn test_success_passes_value_through() {
        let result: Outcome<i32, &str> = from_throwing(|| 42, |_| "wrapped");
        assert_eq!(result, Outcome::Success(42));
    }

    #[test]
    fn test_panic_becomes_failure() {
        let result = from_throwing(|| -> i32 { panic!("boom") }, |_| "wrapped");
        assert_eq!(result, Outcome::Failure("wrapped"));
    }

    #[test]
    fn test_on_error_receives_panic_message() {
        let result = from_throwing(
            || accept_positive_evens(3),
            |fault| match fault.message() {
                "Received Odd Value" => LookupError::OddValue,
                other => LookupError::Unknown(other.to_string()),
            },
        );
        assert_eq!(result, Outcome::Failure(LookupError::OddValue));

        let result = from_throwing(
            || accept_positive_evens(-3),
            |fault| match fault.message() {
                "Received Odd Value" => LookupError::OddValue,
                other => LookupError::Unknown(other.to_string()),
            },
        );
        assert_eq!(
            result,
            Outcome::Failure(LookupError::Unknown("Received Negative Value".to_string()))
        );
    }

    #[test]
    fn test_on_error_not_called_on_success() {
        let mut called = false;
        let result = from_throwing(|| 2, |_| called = true);
        assert!(result.is_ok());
        assert!(!called);
    }

    #[test]
    fn test_formatted_panic_message() {
        let result = from_throwing(|| -> i32 { panic!("code {}", 7) }, |fault| fault);
        assert_eq!(result, Outcome::Failure(Fault::new("code 7")));
    }

    #[test]
    fn test_non_string_payload() {
        let result = from_throwing(|| -> i32 { std::panic::panic_any(17_u8) }, |fault| fault);
        let message = result.failure().map(|f| f.to_string());
        assert_eq!(message.get_or_else(String::new()), NON_STRING_PAYLOAD);
    }

    #[test]
    fn test_from_fallible_distinguishes_causes() {
        let returned: Outcome<i32, BoundaryError<String>> =
            from_fallible(|| Err("nope".to_string()), |e| e);
        assert_eq!(returned, Outcome::Failure(BoundaryError::Returned("nope".to_string())));

        let panicked: Outcome<i32, BoundaryError<String>> =
            from_fallible(|| -> Result<i32, String> { panic!("crashed") }, |e| e);
        assert_eq!(panicked, Outcome::Failure(BoundaryError::Panicked(Fault::new("crashed"))));

        let fine: Outcome<i32, BoundaryError<String>> = from_fallible(|| Ok(1), |e| e);
        assert_eq!(fine, Outcome::Success(1));
    }

    #[test]
    fn test_boundary_error_display_and_source() {
        let err: BoundaryError<std::num::ParseIntError> =
            BoundaryError::Returned("x".parse::<i32>().unwrap_err());
        assert!(err.to_string().starts_with("collaborator failed: "));
        assert!(err.source().is_some());

        let panicked: BoundaryError<std::num::ParseIntError> =
            BoundaryError::Panicked(Fault::new("boom"));
        assert_eq!(panicked.to_string(), "collaborator panicked: boom");
    }

    #[test]
    fn test_captured_state_is_left_as_the_panic_found_it() {
        let mut imported = Vec::new();
        let result = from_throwing(
            || {
                for n in [2, 4, 5, 6] {
                    imported.push(accept_positive_evens(n));
                }
            },
            |fault| fault.to_string(),
        );
        assert_eq!(result, Outcome::Failure("Received Odd Value".to_string()));
        assert_eq!(imported, vec![2, 4]);
    }

    #[tokio::test]
    async fn test_future_success() {
        let result = from_throwing_future(async { 5 }, |_| "wrapped").await;
        assert_eq!(result, Outcome::Success(5));
    }

    async fn aborting_lookup() -> i32 {
        panic!("async lookup aborted")
    }

    #[tokio::test]
    async fn test_future_panic_becomes_failure() {
        let result = from_throwing_future(aborting_lookup(), |fault| fault.to_string()).await;
        assert_eq!(result, Outcome::Failure("async lookup aborted".to_string()));
    }
}
