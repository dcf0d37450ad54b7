//! # Arrays (Exercise 08)
//!
//! Fixed-length indexed containers whose length is part of the type:
//!
//! - [`FixedSeq<T, N>`]: exactly `N` slots, zero-valued on creation
//! - [`Grid<T, R, C>`]: `R` rows of `FixedSeq<T, C>`, for two-level data
//! - [`run()`]: the demo that builds, mutates and prints both
//!
//! ## Example
//!
//! ```rust
//! use exercises_arrays::{FixedSeq, Grid};
//!
//! let mut a: FixedSeq<i32, 5> = FixedSeq::zeroed();
//! a[4] = 100;
//! assert_eq!(a.to_string(), "[0 0 0 0 100]");
//! assert_eq!(a.len(), 5);
//!
//! let g: Grid<usize, 2, 3> = Grid::from_fn(|i, j| i + j);
//! assert_eq!(g.to_string(), "[[0 1 2] [1 2 3]]");
//! ```
//!
//! Because the length is a const generic, a `FixedSeq<i32, 5>` and a
//! `FixedSeq<i32, 6>` are different types and can't be mixed up.

mod demo;
mod error;
pub mod fixed;
pub mod grid;

pub use demo::run;
pub use error::ArrayError;
pub use fixed::FixedSeq;
pub use grid::Grid;
