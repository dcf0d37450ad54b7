//! # Failure Values
//!
//! Two shapes of failure:
//!
//! - **Generic**: a message and nothing else
//! - **Argument**: an [`ArgError`] carrying the offending argument and a
//!   description of the problem
//!
//! A caller that only wants to report the failure prints it. A caller that
//! wants the fields narrows it first, and narrowing returns `Option`, so
//! asking a generic failure for an `ArgError` is a `None`, not a panic.

use std::error::Error;

use thiserror::Error;

/// A failure that carries the argument that caused it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{arg} - {prob}")]
pub struct ArgError {
    pub arg: i64,
    pub prob: String,
}

impl ArgError {
    pub fn new(arg: i64, prob: impl Into<String>) -> Self {
        Self {
            arg,
            prob: prob.into(),
        }
    }
}

/// Everything `f1` and `f2` can fail with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Failure {
    /// Message-only failure.
    #[error("{message}")]
    Generic { message: String },

    /// Structured failure; displays as `"{arg} - {prob}"`.
    #[error(transparent)]
    Argument(#[from] ArgError),
}

impl Failure {
    pub fn generic(message: impl Into<String>) -> Self {
        Failure::Generic {
            message: message.into(),
        }
    }

    /// Narrow to the structured shape.
    pub fn as_arg_error(&self) -> Option<&ArgError> {
        match self {
            Failure::Argument(e) => Some(e),
            Failure::Generic { .. } => None,
        }
    }

    /// Consume and narrow; hands the failure back unchanged on mismatch.
    pub fn into_arg_error(self) -> Result<ArgError, Failure> {
        match self {
            Failure::Argument(e) => Ok(e),
            other => Err(other),
        }
    }
}

/// Narrow a type-erased error to a concrete type `E`.
///
/// Looks at the error itself, then at [`Failure`]'s structured payload, then
/// down the `source()` chain. Returns `None` if nothing matches.
///
/// ```rust
/// use std::error::Error;
/// use exercises_errors::{narrow, ArgError, Failure};
///
/// let boxed: Box<dyn Error> = Box::new(ArgError::new(42, "Cant work with it"));
/// assert_eq!(narrow::<ArgError>(boxed.as_ref()).map(|e| e.arg), Some(42));
///
/// let generic: Box<dyn Error> = Box::new(Failure::generic("nope"));
/// assert!(narrow::<ArgError>(generic.as_ref()).is_none());
/// ```
pub fn narrow<'a, E: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a E> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(found) = e.downcast_ref::<E>() {
            return Some(found);
        }
        // `#[error(transparent)]` forwards source() past the ArgError itself,
        // so look inside Failure explicitly.
        if let Some(failure) = e.downcast_ref::<Failure>() {
            if let Some(found) = failure
                .as_arg_error()
                .and_then(|inner| (inner as &(dyn Error + 'static)).downcast_ref::<E>())
            {
                return Some(found);
            }
        }
        current = e.source();
    }
    None
}
