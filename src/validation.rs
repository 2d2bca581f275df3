//! Accumulating validation
//!
//! [`Outcome::chain`] stops at the first failure. Validation takes the
//! opposite policy: a fixed set of independent checks all run against the
//! same input, and every failure is reported, in the order the checks were
//! declared.
//!
//! A failed [`Validated`] outcome always carries at least one error, since its
//! error channel is a [`NonEmptyVec`].
//!
//! # Examples
//!
//! ```
//! use faultline::outcome::{self, Outcome};
//! use faultline::validation::{accumulate, lift, Check};
//!
//! fn min_length(s: &str) -> Outcome<&str, &'static str> {
//!     if s.len() >= 6 { outcome::ok(s) } else { outcome::err("at least 6 characters") }
//! }
//!
//! fn one_capital(s: &str) -> Outcome<&str, &'static str> {
//!     if s.chars().any(|c| c.is_ascii_uppercase()) {
//!         outcome::ok(s)
//!     } else {
//!         outcome::err("at least one capital letter")
//!     }
//! }
//!
//! let validate_password = accumulate(vec![
//!     Box::new(lift(min_length)) as Check<_, _>,
//!     Box::new(lift(one_capital)),
//! ]);
//!
//! let errors = validate_password("pass").failure().map(|e| e.into_vec());
//! assert_eq!(
//!     errors.get_or_else(vec![]),
//!     vec!["at least 6 characters", "at least one capital letter"]
//! );
//! assert_eq!(validate_password("Password"), Outcome::Success("Password"));
//! ```
//!
//! The [`accumulate!`](crate::accumulate) macro does the boxing:
//!
//! ```
//! use faultline::outcome::{self, Outcome};
//! use faultline::{accumulate, validation::lift};
//!
//! let positive = lift(|n: i32| if n > 0 { outcome::ok(n) } else { outcome::err("not positive") });
//! let even = lift(|n: i32| if n % 2 == 0 { outcome::ok(n) } else { outcome::err("not even") });
//!
//! let check = accumulate!(positive, even);
//! assert_eq!(check(4), Outcome::Success(4));
//! assert_eq!(check(-3).failure().map(|e| e.len()).get_or_else(0), 2);
//! ```

use std::fmt;

use crate::compose::identity;
use crate::{NonEmptyVec, Outcome, Semigroup};

/// Outcome of a validation: the value, or every error that was found.
pub type Validated<T, E> = Outcome<T, NonEmptyVec<E>>;

/// A boxed check, as stored by [`Validator`].
pub type Check<'a, T, E> = Box<dyn Fn(T) -> Validated<T, E> + 'a>;

/// Adapt a single short-circuiting check so its error can be merged with
/// others: the error becomes a one-element [`NonEmptyVec`].
///
/// ```
/// use faultline::outcome::{self, Outcome};
/// use faultline::validation::lift;
/// use faultline::NonEmptyVec;
///
/// let not_empty = lift(|s: &str| if s.is_empty() { outcome::err("empty") } else { outcome::ok(s) });
/// assert_eq!(not_empty(""), Outcome::Failure(NonEmptyVec::singleton("empty")));
/// assert_eq!(not_empty("x"), Outcome::Success("x"));
/// ```
pub fn lift<T, E, F>(check: F) -> impl Fn(T) -> Validated<T, E>
where
    F: Fn(T) -> Outcome<T, E>,
{
    move |value| check(value).map_error(NonEmptyVec::singleton)
}

/// Build a function that runs every check against its input and merges all
/// failures.
///
/// Checks run in order, each on its own clone of the input, and never see
/// each other's results. A failing check does not stop the remaining ones.
/// When nothing fails the original input is returned.
pub fn accumulate<'a, T, E>(checks: Vec<Check<'a, T, E>>) -> impl Fn(T) -> Validated<T, E> + 'a
where
    T: Clone + 'a,
    E: 'a,
{
    let validator = Validator::from_checks(checks);
    move |value| validator.validate(value)
}

/// Like [`accumulate`], but a success carries `projection(input)` instead of
/// the input itself.
///
/// ```
/// use faultline::outcome::{self, Outcome};
/// use faultline::validation::{accumulate_with, lift, Check};
///
/// let check = accumulate_with(
///     vec![Box::new(lift(|s: String| if s.contains('@') { outcome::ok(s) } else { outcome::err("missing @") })) as Check<_, _>],
///     |s: String| s.to_lowercase(),
/// );
/// assert_eq!(check("Ada@Example.com".to_string()), Outcome::Success("ada@example.com".to_string()));
/// ```
pub fn accumulate_with<'a, T, U, E, P>(
    checks: Vec<Check<'a, T, E>>,
    projection: P,
) -> impl Fn(T) -> Validated<U, E> + 'a
where
    T: Clone + 'a,
    E: 'a,
    P: Fn(T) -> U + 'a,
{
    let validator = Validator::from_checks(checks);
    move |value| validator.validate_with(value, &projection)
}

/// Build an accumulating validation function from check expressions of
/// different types, boxing each one.
///
/// `accumulate!(a, b, c)` is `accumulate(vec![Box::new(a), Box::new(b), Box::new(c)])`.
#[macro_export]
macro_rules! accumulate {
    ($($check:expr),+ $(,)?) => {
        $crate::validation::accumulate(::std::vec![
            $(::std::boxed::Box::new($check) as $crate::validation::Check<'_, _, _>),+
        ])
    };
}

/// An ordered set of independent checks over one input type.
///
/// ```
/// use faultline::outcome::{self, Outcome};
/// use faultline::validation::{lift, Validator};
///
/// let validator = Validator::new()
///     .check(lift(|n: u32| if n >= 18 { outcome::ok(n) } else { outcome::err("too young") }))
///     .check(lift(|n: u32| if n <= 130 { outcome::ok(n) } else { outcome::err("implausible age") }));
///
/// assert_eq!(validator.len(), 2);
/// assert_eq!(validator.validate(30), Outcome::Success(30));
/// assert!(validator.validate(7).is_err());
/// ```
pub struct Validator<'a, T, E> {
    checks: Vec<Check<'a, T, E>>,
}

impl<'a, T, E> Validator<'a, T, E> {
    /// A validator with no checks; it accepts every input.
    pub fn new() -> Self {
        Validator { checks: Vec::new() }
    }

    /// A validator running `checks` in order.
    pub fn from_checks(checks: Vec<Check<'a, T, E>>) -> Self {
        Validator { checks }
    }

    /// Append a check.
    pub fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(T) -> Validated<T, E> + 'a,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Number of checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether there are no checks.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<T: Clone, E> Validator<'_, T, E> {
    /// Run every check and return the input, or all collected errors.
    pub fn validate(&self, value: T) -> Validated<T, E> {
        self.validate_with(value, identity)
    }

    /// Run every check and return `projection(value)`, or all collected
    /// errors. `projection` is only called when every check passed.
    pub fn validate_with<U, P>(&self, value: T, projection: P) -> Validated<U, E>
    where
        P: FnOnce(T) -> U,
    {
        let mut errors: Option<NonEmptyVec<E>> = None;
        let mut failed_checks = 0usize;
        for check in &self.checks {
            if let Outcome::Failure(found) = check(value.clone()) {
                failed_checks += 1;
                errors = Some(merge(errors, found));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            checks = self.checks.len(),
            failed_checks,
            errors = errors.as_ref().map_or(0, NonEmptyVec::len),
            "validation finished"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = failed_checks;

        match errors {
            None => Outcome::Success(projection(value)),
            Some(errors) => Outcome::Failure(errors),
        }
    }
}

impl<T, E> Default for Validator<'_, T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> fmt::Debug for Validator<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("checks", &self.checks.len())
            .finish()
    }
}

fn merge<E: Semigroup>(acc: Option<E>, next: E) -> E {
    match acc {
        Some(acc) => acc.combine(next),
        None => next,
    }
}

impl<T, E: Semigroup> Outcome<T, E> {
    /// Pair two independent outcomes, accumulating errors.
    ///
    /// Unlike [`chain`](Outcome::chain), both sides are already evaluated and
    /// a failure on the left does not hide a failure on the right.
    ///
    /// ```
    /// use faultline::Outcome;
    ///
    /// let name: Outcome<&str, Vec<&str>> = Outcome::err(vec!["name is empty"]);
    /// let age: Outcome<u8, Vec<&str>> = Outcome::err(vec!["age is missing"]);
    /// assert_eq!(name.and(age), Outcome::Failure(vec!["name is empty", "age is missing"]));
    /// ```
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        match (self, other) {
            (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success((a, b)),
            (Outcome::Failure(e1), Outcome::Failure(e2)) => Outcome::Failure(e1.combine(e2)),
            (Outcome::Failure(e), _) | (_, Outcome::Failure(e)) => Outcome::Failure(e),
        }
    }
}

/// Turn a sequence of outcomes into an outcome of a `Vec`, accumulating every
/// error in order.
///
/// ```
/// use faultline::validation::sequence;
/// use faultline::Outcome;
///
/// let all: Vec<Outcome<i32, Vec<&str>>> = vec![Outcome::ok(1), Outcome::ok(2)];
/// assert_eq!(sequence(all), Outcome::Success(vec![1, 2]));
///
/// let some_bad = vec![Outcome::ok(1), Outcome::err(vec!["a"]), Outcome::err(vec!["b"])];
/// assert_eq!(sequence(some_bad), Outcome::Failure(vec!["a", "b"]));
/// ```
pub fn sequence<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    E: Semigroup,
    I: IntoIterator<Item = Outcome<T, E>>,
{
    traverse(outcomes, identity)
}

/// Apply `f` to every item and [`sequence`] the results.
///
/// ```
/// use faultline::outcome::{self, Outcome};
/// use faultline::validation::traverse;
/// use faultline::NonEmptyVec;
///
/// let parse = |s: &str| match s.parse::<i32>() {
///     Ok(n) => outcome::ok(n),
///     Err(_) => outcome::err(NonEmptyVec::singleton(format!("invalid number: {}", s))),
/// };
///
/// assert_eq!(traverse(vec!["1", "2"], parse), Outcome::Success(vec![1, 2]));
/// assert!(traverse(vec!["1", "x"], parse).is_err());
/// ```
pub fn traverse<A, T, E, I, F>(items: I, mut f: F) -> Outcome<Vec<T>, E>
where
    E: Semigroup,
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Outcome<T, E>,
{
    let mut values = Vec::new();
    let mut errors: Option<E> = None;
    for item in items {
        match f(item) {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => errors = Some(merge(errors, error)),
        }
    }
    match errors {
        None => Outcome::Success(values),
        Some(errors) => Outcome::Failure(errors),
    }
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use crate::outcome;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_validation_is_traced() {
        let validator = Validator::new()
            .check(lift(|n: i32| if n > 0 { outcome::ok(n) } else { outcome::err("not positive") }));
        let _ = validator.validate(-1);
        assert!(logs_contain("validation finished"));
    }

    #[test]
    #[traced_test]
    fn test_trace_counts_failing_checks_not_errors() {
        let two_errors = |_: i32| outcome::err::<i32, _>(NonEmptyVec::new("a", vec!["b"]));
        let passes = |n: i32| outcome::ok::<_, NonEmptyVec<&str>>(n);
        let validator = Validator::new().check(two_errors).check(passes);

        let _ = validator.validate(1);
        assert!(logs_contain("checks=2"));
        assert!(logs_contain("failed_checks=1"));
        assert!(logs_contain("errors=2"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::outcome;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_errors_follow_declaration_order(input in -1000i32..1000) {
            let validate = accumulate!(
                lift(|n: i32| if n > 0 { outcome::ok(n) } else { outcome::err(1) }),
                lift(|n: i32| if n % 2 == 0 { outcome::ok(n) } else { outcome::err(2) }),
                lift(|n: i32| if n.abs() < 100 { outcome::ok(n) } else { outcome::err(3) }),
            );

            let expected: Vec<i32> = [(input <= 0, 1), (input % 2 != 0, 2), (input.abs() >= 100, 3)]
                .into_iter()
                .filter_map(|(failed, code)| failed.then_some(code))
                .collect();

            match validate(input) {
                Outcome::Success(value) => {
                    prop_assert!(expected.is_empty());
                    prop_assert_eq!(value, input);
                }
                Outcome::Failure(errors) => prop_assert_eq!(errors.into_vec(), expected),
            }
        }

        #[test]
        fn prop_sequence_keeps_all_values(values in prop::collection::vec(any::<i32>(), 0..20)) {
            let outcomes: Vec<Outcome<i32, Vec<String>>> = values.iter().copied().map(outcome::ok).collect();
            prop_assert_eq!(sequence(outcomes), Outcome::Success(values));
        }
    }
}
