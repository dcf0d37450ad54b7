//! # Errors (Exercise 21)
//!
//! Failures are ordinary values returned in `Result::Err`:
//!
//! - [`f1`] fails with a message-only [`Failure::Generic`]
//! - [`f2`] fails with a structured [`ArgError`] wrapped in [`Failure::Argument`]
//! - [`Failure::as_arg_error`] and [`narrow`] recover the structured value,
//!   returning `None` for anything else
//!
//! ## Example
//!
//! ```rust
//! use exercises_errors::{f1, f2};
//!
//! assert_eq!(f1(7), Ok(10));
//! assert_eq!(f1(42).unwrap_err().to_string(), "Can't work with 42");
//!
//! let failure = f2(42).unwrap_err();
//! let detail = failure.as_arg_error().expect("f2 fails with an ArgError");
//! assert_eq!(detail.arg, 42);
//! assert_eq!(detail.prob, "Cant work with it");
//! ```

mod demo;
pub mod error;
pub mod funcs;

pub use demo::run;
pub use error::{narrow, ArgError, Failure};
pub use funcs::{f1, f2, UNWORKABLE};
