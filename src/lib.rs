//! # Faultline
//!
//! Absence and failure as ordinary values.
//!
//! Faultline gives a pipeline two small sum types, [`Maybe`] for "there may be
//! no value" and [`Outcome`] for "this step may fail with a reason", plus the
//! glue to chain them:
//!
//! - `map` / `chain` transform or sequence the happy path and pass the other
//!   case through untouched;
//! - [`flow!`] and [`pipe!`] compose stages left to right;
//! - [`validation`] runs independent checks and reports every failure, not
//!   just the first one;
//! - [`boundary`] is the one place where panics from external collaborators
//!   are turned into failures.
//!
//! ## Quick Example
//!
//! ```rust
//! use faultline::outcome::{self, Outcome};
//! use faultline::{accumulate, assert_errors, validation::lift};
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
//! fn one_number(s: &str) -> Outcome<&str, &'static str> {
//!     if s.chars().any(|c| c.is_ascii_digit()) {
//!         outcome::ok(s)
//!     } else {
//!         outcome::err("at least one number")
//!     }
//! }
//!
//! let validate_password = accumulate!(lift(min_length), lift(one_capital), lift(one_number));
//!
//! assert_errors!(
//!     validate_password("pass"),
//!     ["at least 6 characters", "at least one capital letter", "at least one number"]
//! );
//! assert_eq!(validate_password("Passw0rd"), Outcome::Success("Passw0rd"));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when the boundary converts a panic or an
//!   error, and when a validation finishes.
//! - `serde`: `Serialize`/`Deserialize` for the public data types.
//! - `proptest`: `Arbitrary` implementations in [`testing`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod boundary;
pub mod compose;
pub mod context;
pub mod functor;
pub mod maybe;
pub mod nonempty;
pub mod outcome;
pub mod semigroup;
pub mod testing;
pub mod validation;

// Re-exports
pub use boundary::{from_fallible, from_throwing, from_throwing_future, BoundaryError, Fault};
pub use compose::{compose, identity};
pub use context::ContextError;
pub use functor::{Functor, Monad};
pub use maybe::Maybe;
pub use nonempty::NonEmptyVec;
pub use outcome::{Outcome, OutcomeContext};
pub use semigroup::Semigroup;
pub use validation::{Validated, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::boundary::{from_fallible, from_throwing, from_throwing_future, Fault};
    pub use crate::compose::{compose, identity};
    pub use crate::context::ContextError;
    pub use crate::functor::{Functor, Monad};
    pub use crate::maybe::Maybe;
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::outcome::{Outcome, OutcomeContext};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::{lift, Validated, Validator};
    pub use crate::{accumulate, flow, pipe};
}
