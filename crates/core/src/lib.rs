//! # Core - Shared Exercise Plumbing
//!
//! Every exercise crate produces console output and nothing else. This crate
//! holds the two pieces they share:
//!
//! - **Transcript**: the ordered lines a demo run prints, kept as a value so
//!   tests can assert on them before anything reaches stdout
//! - **Telemetry**: `tracing` subscriber setup for the runnable examples
//!
//! The exercises themselves never call into one another; they only depend on
//! this crate.

pub mod telemetry;
pub mod transcript;

pub use transcript::Transcript;
