//! Left-to-right function composition
//!
//! [`flow!`](crate::flow) builds a reusable pipeline out of stages, and
//! [`pipe!`](crate::pipe) pushes one value through stages immediately. Each
//! stage receives the previous stage's output exactly as returned, wrapped or
//! not, so wrapped-returning stages are joined with the curried combinators
//! from [`maybe`](crate::maybe) and [`outcome`](crate::outcome):
//!
//! ```
//! use faultline::maybe::{self, Maybe};
//! use faultline::{flow, pipe};
//!
//! fn half_if_even(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { maybe::some(n / 2) } else { maybe::none() }
//! }
//!
//! let three_halvings = flow!(half_if_even, maybe::chain(half_if_even), maybe::chain(half_if_even));
//! assert_eq!(three_halvings(40), Maybe::Just(5));
//! assert_eq!(three_halvings(10), Maybe::Nothing);
//!
//! let same = pipe!(half_if_even(40), maybe::chain(half_if_even), maybe::chain(half_if_even));
//! assert_eq!(same, Maybe::Just(5));
//! ```
//!
//! Composition is associative: `flow!(flow!(a, b), c)`, `flow!(a, flow!(b, c))`
//! and `flow!(a, b, c)` are the same function.
//!
//! Stages are called directly. A stage that panics unwinds straight through
//! the pipeline to its caller; only [`from_throwing`](crate::boundary::from_throwing)
//! turns panics into failures.

/// Returns its argument unchanged.
#[inline]
pub fn identity<A>(value: A) -> A {
    value
}

/// Compose two functions left to right: the result calls `f`, then `g`.
///
/// ```
/// use faultline::compose::compose;
///
/// let inc_then_double = compose(|n: i32| n + 1, |n: i32| n * 2);
/// assert_eq!(inc_then_double(4), 10);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |value| g(f(value))
}

/// Build a left-to-right pipeline function from one or more stages.
///
/// `flow!(f1, f2, f3)` is the function `|x| f3(f2(f1(x)))`.
///
/// ```
/// use faultline::flow;
///
/// let add_four = flow!(|n: i32| n + 1, |n: i32| n + 3);
/// assert_eq!(add_four(1), 5);
/// ```
#[macro_export]
macro_rules! flow {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::compose($f, $crate::flow!($($rest),+))
    };
}

/// Apply stages to a value immediately, left to right.
///
/// `pipe!(x, f1, f2)` is `f2(f1(x))`, the same as `flow!(f1, f2)(x)`.
///
/// ```
/// use faultline::pipe;
///
/// let total = pipe!(vec![1, 2, 3], |v: Vec<i32>| v.into_iter().sum::<i32>(), |n: i32| n * 10);
/// assert_eq!(total, 60);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $f:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!(($f)($value) $(, $rest)*)
    };
}
