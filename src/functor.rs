//! Functor and monad traits shared by [`Maybe`] and [`Outcome`]
//!
//! The inherent `map`/`chain` methods are what pipelines normally use. These
//! traits exist so that code (and law tests) can be written once for both
//! sum types:
//!
//! ```
//! use faultline::functor::Functor;
//! use faultline::{Maybe, Outcome};
//!
//! fn add_tax<W: Functor<Inner = u32>>(price: W) -> W::Wrapped<u32> {
//!     price.fmap(|cents| cents + cents / 10)
//! }
//!
//! assert_eq!(add_tax(Maybe::some(100)), Maybe::Just(110));
//! assert_eq!(add_tax(Outcome::<u32, &str>::err("no price")), Outcome::Failure("no price"));
//! ```
//!
//! # Laws
//!
//! ```text
//! w.fmap(|x| x)                 == w
//! w.fmap(f).fmap(g)             == w.fmap(|x| g(f(x)))
//! W::pure(x).flat_map(f)        == f(x)
//! w.flat_map(W::pure)           == w
//! w.flat_map(f).flat_map(g)     == w.flat_map(|x| f(x).flat_map(g))
//! ```

use crate::{Maybe, Outcome};

/// A container whose payload can be transformed without changing its tag.
pub trait Functor {
    /// The payload type.
    type Inner;
    /// The same container holding a `U` instead.
    type Wrapped<U>;

    /// Transform the payload. Must not call `f` when there is no payload.
    fn fmap<U, F>(self, f: F) -> Self::Wrapped<U>
    where
        F: FnOnce(Self::Inner) -> U;
}

/// A functor that can also sequence computations returning the same
/// container.
pub trait Monad: Functor {
    /// Wrap a plain value in the success/presence case.
    fn pure(value: Self::Inner) -> Self;

    /// Flat-map. Must not call `f` when there is no payload.
    fn flat_map<U, F>(self, f: F) -> Self::Wrapped<U>
    where
        F: FnOnce(Self::Inner) -> Self::Wrapped<U>;
}

impl<T> Functor for Maybe<T> {
    type Inner = T;
    type Wrapped<U> = Maybe<U>;

    #[inline]
    fn fmap<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn pure(value: T) -> Self {
        Maybe::Just(value)
    }

    #[inline]
    fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.chain(f)
    }
}

impl<T, E> Functor for Outcome<T, E> {
    type Inner = T;
    type Wrapped<U> = Outcome<U, E>;

    #[inline]
    fn fmap<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }
}

impl<T, E> Monad for Outcome<T, E> {
    #[inline]
    fn pure(value: T) -> Self {
        Outcome::Success(value)
    }

    #[inline]
    fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.chain(f)
    }
}
