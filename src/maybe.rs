//! Optional values
//!
//! `Maybe<T>` is either `Just(value)` or `Nothing`. It carries the same
//! information as [`Option`], but its combinators follow the algebra used
//! across this crate: `map` and `chain` short-circuit on `Nothing`, and the
//! only total way to get the payload out is [`Maybe::get_or_else`].
//!
//! Only the `Nothing` tag means absence. `0`, `""` and `false` are present
//! values like any other.
//!
//! # Examples
//!
//! ```
//! use faultline::maybe::{self, Maybe};
//!
//! fn half_if_even(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { maybe::some(n / 2) } else { maybe::none() }
//! }
//!
//! assert_eq!(half_if_even(40).chain(half_if_even).chain(half_if_even), Maybe::Just(5));
//! assert_eq!(half_if_even(10).chain(half_if_even).chain(half_if_even), Maybe::Nothing);
//! assert_eq!(half_if_even(0).chain(half_if_even), Maybe::Just(0));
//! ```

use crate::Outcome;

/// A value that is either present (`Just`) or absent (`Nothing`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value
    Nothing,
    /// A present value
    Just(T),
}

impl<T> Maybe<T> {
    /// Wrap a present value.
    #[inline]
    pub fn some(value: T) -> Self {
        Maybe::Just(value)
    }

    /// The absent value.
    #[inline]
    pub fn none() -> Self {
        Maybe::Nothing
    }

    /// `Just(value)` when `predicate(&value)` holds, `Nothing` otherwise.
    ///
    /// ```
    /// use faultline::Maybe;
    ///
    /// assert_eq!(Maybe::from_predicate(4, |n| n % 2 == 0), Maybe::Just(4));
    /// assert_eq!(Maybe::from_predicate(3, |n| n % 2 == 0), Maybe::Nothing);
    /// ```
    pub fn from_predicate<P>(value: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Maybe::Just(value)
        } else {
            Maybe::Nothing
        }
    }

    /// Returns `true` for `Just`.
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Transform a present value. `f` is not called on `Nothing`.
    ///
    /// `f` must always produce a value; use [`chain`](Self::chain) when the
    /// transformation itself can come up empty.
    ///
    /// ```
    /// use faultline::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).map(|n| n * 10), Maybe::Just(20));
    /// assert_eq!(Maybe::<i32>::none().map(|n| n * 10), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Just(value) => Maybe::Just(f(value)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Flat-map: feed a present value to a function that may itself return
    /// `Nothing`. `f` is not called on `Nothing`.
    #[inline]
    pub fn chain<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Just(value) => f(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Extract the value, falling back to `default` on `Nothing`.
    ///
    /// ```
    /// use faultline::Maybe;
    ///
    /// assert_eq!(Maybe::some(0).get_or_else(7), 0);
    /// assert_eq!(Maybe::none().get_or_else(7), 7);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => default,
        }
    }

    /// Like [`get_or_else`](Self::get_or_else) with a lazily computed fallback.
    #[inline]
    pub fn get_or_else_with<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => f(),
        }
    }

    /// Keep the value only if `predicate` holds.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.chain(|value| Maybe::from_predicate(value, predicate))
    }

    /// Replace `Nothing` with the result of `f`; `Just` is returned as is.
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => f(),
        }
    }

    /// Collapse both cases into one value.
    ///
    /// ```
    /// use faultline::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.fold(|| "none".to_string(), |n| format!("got {}", n));
    /// assert_eq!(describe(Maybe::some(3)), "got 3");
    /// assert_eq!(describe(Maybe::none()), "none");
    /// ```
    pub fn fold<R, N, J>(self, on_nothing: N, on_just: J) -> R
    where
        N: FnOnce() -> R,
        J: FnOnce(T) -> R,
    {
        match self {
            Maybe::Just(value) => on_just(value),
            Maybe::Nothing => on_nothing(),
        }
    }

    /// Borrow the payload.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Pair two present values; `Nothing` if either is absent.
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Maybe::Just(a), Maybe::Just(b)) => Maybe::Just((a, b)),
            _ => Maybe::Nothing,
        }
    }

    /// Turn absence into a failure carrying `error`.
    ///
    /// ```
    /// use faultline::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::some(1).ok_or("missing"), Outcome::Success(1));
    /// assert_eq!(Maybe::<i32>::none().ok_or("missing"), Outcome::Failure("missing"));
    /// ```
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Maybe::Just(value) => Outcome::Success(value),
            Maybe::Nothing => Outcome::Failure(error),
        }
    }

    /// Convert into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }

    /// Iterate over the payload (zero or one item).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_iter()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Remove one level of nesting. Nesting is never removed implicitly.
    ///
    /// ```
    /// use faultline::Maybe;
    ///
    /// let nested = Maybe::some(Maybe::some(1));
    /// assert_eq!(nested.flatten(), Maybe::Just(1));
    /// assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::Nothing);
    /// ```
    pub fn flatten(self) -> Maybe<T> {
        self.chain(|inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Just(value),
            None => Maybe::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

/// Wrap a present value. Same as [`Maybe::some`].
#[inline]
pub fn some<T>(value: T) -> Maybe<T> {
    Maybe::Just(value)
}

/// The absent value. Same as [`Maybe::none`].
#[inline]
pub fn none<T>() -> Maybe<T> {
    Maybe::Nothing
}

/// Curried [`Maybe::map`], for use as a pipeline stage.
///
/// ```
/// use faultline::{flow, maybe};
///
/// let describe = flow!(maybe::map(|n: i32| n + 1), maybe::get_or_else(0));
/// assert_eq!(describe(maybe::some(41)), 42);
/// assert_eq!(describe(maybe::none()), 0);
/// ```
pub fn map<T, U, F>(f: F) -> impl Fn(Maybe<T>) -> Maybe<U>
where
    F: Fn(T) -> U,
{
    move |m| m.map(&f)
}

/// Curried [`Maybe::chain`], for use as a pipeline stage.
pub fn chain<T, U, F>(f: F) -> impl Fn(Maybe<T>) -> Maybe<U>
where
    F: Fn(T) -> Maybe<U>,
{
    move |m| m.chain(&f)
}

/// Curried [`Maybe::get_or_else`], for use as the last stage of a pipeline.
pub fn get_or_else<T>(default: T) -> impl Fn(Maybe<T>) -> T
where
    T: Clone,
{
    move |m| m.get_or_else_with(|| default.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallCounter;

    fn half_if_even(n: i32) -> Maybe<i32> {
        if n % 2 == 0 {
            some(n / 2)
        } else {
            none()
        }
    }

    #[test]
    fn test_constructors_and_tags() {
        let present = Maybe::some(1);
        let absent = Maybe::<i32>::none();
        assert!(present.is_some());
        assert!(!present.is_none());
        assert!(absent.is_none());
        assert!(!absent.is_some());
    }

    #[test]
    fn test_falsy_values_are_present() {
        assert!(some(0).is_some());
        assert!(some("").is_some());
        assert!(some(false).is_some());
        assert_eq!(some(0).chain(half_if_even), Maybe::Just(0));
    }

    #[test]
    fn test_map_skips_nothing() {
        let counter = CallCounter::new();
        let f = counter.wrap(|n: i32| n + 1);
        assert_eq!(none().map(&f), Maybe::Nothing);
        assert_eq!(counter.count(), 0);

        assert_eq!(some(1).map(&f), Maybe::Just(2));
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_chain_skips_nothing() {
        let counter = CallCounter::new();
        let f = counter.wrap(half_if_even);
        assert_eq!(none().chain(&f), Maybe::Nothing);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_chain_pipeline() {
        let three_times = |n| half_if_even(n).chain(half_if_even).chain(half_if_even);
        assert_eq!(three_times(40), Maybe::Just(5));
        assert_eq!(three_times(10), Maybe::Nothing);
        assert_eq!(three_times(5), Maybe::Nothing);
        assert_eq!(three_times(0), Maybe::Just(0));
    }

    #[test]
    fn test_get_or_else() {
        assert_eq!(some(3).get_or_else(0), 3);
        assert_eq!(none().get_or_else(0), 0);
        assert_eq!(none().get_or_else_with(|| 9), 9);
    }

    #[test]
    fn test_filter_and_or_else() {
        assert_eq!(some(4).filter(|n| *n > 3), Maybe::Just(4));
        assert_eq!(some(2).filter(|n| *n > 3), Maybe::Nothing);
        assert_eq!(none().or_else(|| some(1)), Maybe::Just(1));
        assert_eq!(some(2).or_else(|| some(1)), Maybe::Just(2));
    }

    #[test]
    fn test_zip() {
        assert_eq!(some(1).zip(some("a")), Maybe::Just((1, "a")));
        assert_eq!(some(1).zip(none::<&str>()), Maybe::Nothing);
    }

    #[test]
    fn test_nesting_is_explicit() {
        let nested: Maybe<Maybe<i32>> = some(none());
        assert!(nested.is_some());
        assert_eq!(nested.flatten(), Maybe::Nothing);
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Maybe::from(Some(1)), Maybe::Just(1));
        assert_eq!(Maybe::<i32>::from(None), Maybe::Nothing);
        assert_eq!(Option::from(some(2)), Some(2));
        assert_eq!(some(5).into_iter().collect::<Vec<_>>(), vec![5]);
        assert_eq!(some(5).iter().count(), 1);
        assert_eq!(Maybe::<i32>::default(), Maybe::Nothing);
    }

    #[test]
    fn test_curried_forms() {
        let inc = map(|n: i32| n + 1);
        let halve = chain(half_if_even);
        let or_zero = get_or_else(0);

        assert_eq!(or_zero(halve(inc(some(3)))), 2);
        assert_eq!(or_zero(halve(inc(some(2)))), 0);
        assert_eq!(or_zero(halve(inc(none()))), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let value = some(3);
        let json = serde_json::to_string(&value).unwrap();
        let back: Maybe<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
