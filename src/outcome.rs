//! Fallible values
//!
//! `Outcome<T, E>` is either `Success(value)` or `Failure(error)`. Failures
//! are expected domain outcomes ("balance too low", "password too short")
//! carried as data; they are never raised as panics. Panics from external
//! collaborators enter the algebra only through the
//! [`boundary`](crate::boundary) adapter.
//!
//! # Short-circuiting
//!
//! [`map`](Outcome::map) and [`chain`](Outcome::chain) never call their
//! function on a `Failure`, so a pipeline stops doing work at the first
//! failed stage. When every failure should be reported instead, use the
//! [`validation`](crate::validation) accumulator.
//!
//! ```
//! use faultline::outcome::{self, Outcome};
//!
//! fn min_length(s: &str) -> Outcome<&str, &'static str> {
//!     if s.len() >= 6 { outcome::ok(s) } else { outcome::err("at least 6 characters") }
//! }
//!
//! fn one_number(s: &str) -> Outcome<&str, &'static str> {
//!     if s.chars().any(|c| c.is_ascii_digit()) {
//!         outcome::ok(s)
//!     } else {
//!         outcome::err("at least one number")
//!     }
//! }
//!
//! assert_eq!(min_length("pass").chain(one_number), Outcome::Failure("at least 6 characters"));
//! assert_eq!(min_length("password").chain(one_number), Outcome::Failure("at least one number"));
//! assert_eq!(min_length("passw0rd").chain(one_number), Outcome::Success("passw0rd"));
//! ```

use crate::context::ContextError;
use crate::Maybe;

/// A computation result that is either a success value or a typed error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// Successful result
    Success(T),
    /// Failed result
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // ========== Constructors ==========

    /// Create a success.
    #[inline]
    pub fn ok(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Create a failure.
    #[inline]
    pub fn err(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Build from a standard [`Result`].
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }

    // ========== Inspection ==========

    /// Returns `true` for `Success`.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The success value, if any.
    pub fn success(self) -> Maybe<T> {
        match self {
            Outcome::Success(value) => Maybe::Just(value),
            Outcome::Failure(_) => Maybe::Nothing,
        }
    }

    /// The error, if any.
    pub fn failure(self) -> Maybe<E> {
        match self {
            Outcome::Success(_) => Maybe::Nothing,
            Outcome::Failure(error) => Maybe::Just(error),
        }
    }

    /// Borrow both channels.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    // ========== Transformation ==========

    /// Transform the success value. Failures pass through untouched and `f`
    /// is not called.
    ///
    /// ```
    /// use faultline::Outcome;
    ///
    /// assert_eq!(Outcome::<_, &str>::ok(2).map(|n| n + 1), Outcome::Success(3));
    /// assert_eq!(Outcome::<i32, _>::err("boom").map(|n| n + 1), Outcome::Failure("boom"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the error. Successes pass through untouched.
    ///
    /// ```
    /// use faultline::Outcome;
    ///
    /// let failed = Outcome::<i32, _>::err("not found").map_error(|e| e.len());
    /// assert_eq!(failed, Outcome::Failure(9));
    /// ```
    #[inline]
    pub fn map_error<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Feed the success value to a fallible function and return its outcome
    /// directly. `f` is not called on a failure.
    #[inline]
    pub fn chain<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recover from a failure. `f` is not called on a success.
    pub fn or_else<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => f(error),
        }
    }

    /// Collapse both cases into one value.
    pub fn fold<R, FE, FT>(self, on_failure: FE, on_success: FT) -> R
    where
        FE: FnOnce(E) -> R,
        FT: FnOnce(T) -> R,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    // ========== Extraction ==========

    /// Extract the success value, falling back to `default` on failure.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Extract the success value, computing a fallback from the error.
    #[inline]
    pub fn get_or_else_with<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// Convert into a standard [`Result`], e.g. to use `?`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Iterate over the success value (zero or one item).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_iter()
    }
}

// Extension trait plus an inherent method on `Outcome<T, ContextError<E>>`:
// the inherent one wins method resolution, so repeated calls extend one trail.
/// Extension trait for attaching context to failures
pub trait OutcomeContext<T, E> {
    /// Wrap a failure in a [`ContextError`] carrying `msg`.
    fn context(self, msg: impl Into<String>) -> Outcome<T, ContextError<E>>;
}

impl<T, E> OutcomeContext<T, E> for Outcome<T, E> {
    /// Wrap a failure in a [`ContextError`] carrying `msg`. Successes are
    /// returned unchanged.
    ///
    /// ```
    /// use faultline::{Outcome, OutcomeContext};
    ///
    /// let failed = Outcome::<i32, _>::err("connection refused")
    ///     .context("loading primary account")
    ///     .context("checking balance");
    ///
    /// match failed {
    ///     Outcome::Failure(e) => {
    ///         assert_eq!(e.inner(), &"connection refused");
    ///         assert_eq!(e.context_trail(), &["loading primary account", "checking balance"]);
    ///     }
    ///     Outcome::Success(_) => unreachable!(),
    /// }
    /// ```
    fn context(self, msg: impl Into<String>) -> Outcome<T, ContextError<E>> {
        self.map_error(|error| ContextError::new(error).context(msg))
    }
}

impl<T, E> Outcome<T, ContextError<E>> {
    /// Add another context layer to an already wrapped failure.
    pub fn context(self, msg: impl Into<String>) -> Self {
        self.map_error(|error| error.context(msg))
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Remove one level of nesting.
    pub fn flatten(self) -> Outcome<T, E> {
        self.chain(|inner| inner)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_result().ok().into_iter()
    }
}

/// Create a success. Same as [`Outcome::ok`].
#[inline]
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Create a failure. Same as [`Outcome::err`].
#[inline]
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

/// Curried [`Outcome::map`], for use as a pipeline stage.
pub fn map<T, U, E, F>(f: F) -> impl Fn(Outcome<T, E>) -> Outcome<U, E>
where
    F: Fn(T) -> U,
{
    move |o| o.map(&f)
}

/// Curried [`Outcome::map_error`], for use as a pipeline stage.
pub fn map_error<T, E, E2, F>(f: F) -> impl Fn(Outcome<T, E>) -> Outcome<T, E2>
where
    F: Fn(E) -> E2,
{
    move |o| o.map_error(&f)
}

/// Curried [`Outcome::chain`], for use as a pipeline stage.
///
/// ```
/// use faultline::{flow, outcome::{self, Outcome}};
///
/// fn parse(s: &str) -> Outcome<i32, String> {
///     s.parse::<i32>().map_err(|e| e.to_string()).into()
/// }
///
/// fn positive(n: i32) -> Outcome<i32, String> {
///     if n > 0 { outcome::ok(n) } else { outcome::err(format!("{} is not positive", n)) }
/// }
///
/// let parse_positive = flow!(parse, outcome::chain(positive));
/// assert_eq!(parse_positive("12"), Outcome::Success(12));
/// assert_eq!(parse_positive("-3"), Outcome::Failure("-3 is not positive".to_string()));
/// ```
pub fn chain<T, U, E, F>(f: F) -> impl Fn(Outcome<T, E>) -> Outcome<U, E>
where
    F: Fn(T) -> Outcome<U, E>,
{
    move |o| o.chain(&f)
}

/// Curried [`Outcome::get_or_else`], for use as the last stage of a pipeline.
pub fn get_or_else<T, E>(default: T) -> impl Fn(Outcome<T, E>) -> T
where
    T: Clone,
{
    move |o| o.get_or_else_with(|_| default.clone())
}
