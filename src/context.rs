//! Error context trails
//!
//! `ContextError<E>` keeps the original error of a failed stage together with
//! the breadcrumbs added as the failure travels outward through a pipeline.
//! Attach it with [`OutcomeContext::context`](crate::OutcomeContext::context).
//!
//! ```
//! use faultline::ContextError;
//!
//! let err = ContextError::new("balance unavailable")
//!     .context("reading primary account")
//!     .context("checking low balance");
//!
//! assert_eq!(err.inner(), &"balance unavailable");
//! assert_eq!(err.context_trail().len(), 2);
//! ```

use std::error::Error as StdError;
use std::fmt;

/// An error plus the ordered trail of context messages describing what was
/// being attempted when it happened, innermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextError<E> {
    error: E,
    context: Vec<String>,
}

impl<E> ContextError<E> {
    /// Wrap an error with an empty trail.
    pub fn new(error: E) -> Self {
        ContextError {
            error,
            context: Vec::new(),
        }
    }

    /// Append a context message to the trail.
    pub fn context(mut self, msg: impl Into<String>) -> Self {
        self.context.push(msg.into());
        self
    }

    /// The wrapped error.
    pub fn inner(&self) -> &E {
        &self.error
    }

    /// Discard the trail and return the wrapped error.
    pub fn into_inner(self) -> E {
        self.error
    }

    /// Context messages in the order they were added.
    pub fn context_trail(&self) -> &[String] {
        &self.context
    }

    /// Transform the wrapped error, keeping the trail.
    pub fn map<E2, F>(self, f: F) -> ContextError<E2>
    where
        F: FnOnce(E) -> E2,
    {
        ContextError {
            error: f(self.error),
            context: self.context,
        }
    }
}

impl<E: fmt::Display> fmt::Display for ContextError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;
        for ctx in &self.context {
            write!(f, "\n  -> {}", ctx)?;
        }
        Ok(())
    }
}

impl<E: StdError + 'static> StdError for ContextError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}
