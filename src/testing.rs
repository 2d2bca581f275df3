//! Testing utilities
//!
//! Helpers for tests of code built on [`Maybe`](crate::Maybe),
//! [`Outcome`](crate::Outcome) and validation pipelines: assertion macros, a
//! call counter for checking which stages ran, and (with the `proptest`
//! feature) [`Arbitrary`](proptest::arbitrary::Arbitrary) implementations.
//!
//! # Examples
//!
//! ```rust
//! use faultline::{assert_err, assert_errors, assert_ok, Outcome, NonEmptyVec};
//!
//! let parsed: Outcome<i32, String> = Outcome::ok(42);
//! assert_ok!(parsed);
//!
//! let failed: Outcome<i32, NonEmptyVec<&str>> = Outcome::err(NonEmptyVec::new("too short", vec!["no digit"]));
//! assert_err!(failed.clone());
//! assert_errors!(failed, ["too short", "no digit"]);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts how many times wrapped functions were called.
///
/// Clones share the same count.
///
/// ```rust
/// use faultline::testing::CallCounter;
/// use faultline::Maybe;
///
/// let counter = CallCounter::new();
/// let double = counter.wrap(|n: i32| n * 2);
///
/// assert_eq!(Maybe::<i32>::none().map(&double), Maybe::Nothing);
/// assert_eq!(counter.count(), 0);
///
/// assert_eq!(Maybe::some(4).map(&double), Maybe::Just(8));
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    /// A counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `f` so that every call is counted.
    pub fn wrap<A, R, F>(&self, f: F) -> impl Fn(A) -> R
    where
        F: Fn(A) -> R,
    {
        let calls = Arc::clone(&self.calls);
        move |arg| {
            calls.fetch_add(1, Ordering::SeqCst);
            f(arg)
        }
    }

    /// Number of calls so far, across every function wrapped by this counter.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Assert that an outcome is a `Success`.
///
/// Evaluates to the success value.
///
/// ```rust
/// use faultline::{assert_ok, Outcome};
///
/// let value = assert_ok!(Outcome::<_, String>::ok(42));
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! assert_ok {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is a `Failure`.
///
/// Evaluates to the error.
///
/// ```rust
/// use faultline::{assert_err, Outcome};
///
/// let error = assert_err!(Outcome::<i32, _>::err("nope"));
/// assert_eq!(error, "nope");
/// ```
#[macro_export]
macro_rules! assert_err {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(e) => e,
            $crate::Outcome::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation failed with exactly the given errors, in order.
///
/// ```rust
/// use faultline::{assert_errors, NonEmptyVec, Outcome};
///
/// let val = Outcome::<i32, _>::err(NonEmptyVec::new("error1", vec!["error2"]));
/// assert_errors!(val, ["error1", "error2"]);
/// ```
#[macro_export]
macro_rules! assert_errors {
    ($validated:expr, $expected:expr) => {
        match $validated {
            $crate::Outcome::Failure(errors) => {
                let errors: ::std::vec::Vec<_> = ::std::iter::IntoIterator::into_iter(errors).collect();
                let expected: ::std::vec::Vec<_> = ::std::iter::IntoIterator::into_iter($expected).collect();
                assert_eq!(errors, expected);
            }
            $crate::Outcome::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert that a maybe is `Just`, evaluating to its value.
///
/// ```rust
/// use faultline::{assert_just, Maybe};
///
/// assert_eq!(assert_just!(Maybe::some(0)), 0);
/// ```
#[macro_export]
macro_rules! assert_just {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Just(value) => value,
            $crate::Maybe::Nothing => {
                panic!("Expected Just, got Nothing");
            }
        }
    };
}

/// Assert that a maybe is `Nothing`.
///
/// ```rust
/// use faultline::{assert_nothing, Maybe};
///
/// assert_nothing!(Maybe::<i32>::none());
/// ```
#[macro_export]
macro_rules! assert_nothing {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Nothing => {}
            $crate::Maybe::Just(v) => {
                panic!("Expected Nothing, got Just: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;

    use crate::{Maybe, NonEmptyVec, Outcome};

    impl<T> Arbitrary for Maybe<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                1 => Just(()).prop_map(|_| Maybe::Nothing),
                3 => any_with::<T>(args).prop_map(Maybe::Just),
            ]
            .boxed()
        }
    }

    impl<T, E> Arbitrary for Outcome<T, E>
    where
        T: Arbitrary + 'static,
        E: Arbitrary + 'static,
    {
        type Parameters = (T::Parameters, E::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (t_params, e_params) = args;
            prop_oneof![
                any_with::<T>(t_params).prop_map(Outcome::Success),
                any_with::<E>(e_params).prop_map(Outcome::Failure),
            ]
            .boxed()
        }
    }

    impl<T> Arbitrary for NonEmptyVec<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            prop::collection::vec(any_with::<T>(args), 1..9)
                .prop_filter_map("non-empty", NonEmptyVec::from_vec)
                .boxed()
        }
    }
}
