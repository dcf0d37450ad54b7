//! # Interfaces (Exercise 20)
//!
//! A trait is a named set of required operations. Any type that implements
//! them can be used wherever the trait is expected, and the consumer never
//! learns which concrete type it was given.
//!
//! - [`Geometry`]: requires `area()` and `perim()`
//! - [`Rect`] and [`Circle`]: two unrelated types implementing it
//! - [`measure()`]: one function that works on any `&dyn Geometry`
//!
//! ## Example
//!
//! ```rust
//! use exercises_interfaces::{measure, Circle, Geometry, Rect};
//!
//! let shapes: Vec<Box<dyn Geometry>> = vec![
//!     Box::new(Rect::new(3.0, 4.0)),
//!     Box::new(Circle::new(5.0)),
//! ];
//!
//! for g in &shapes {
//!     let m = measure(g.as_ref());
//!     assert!(m.area > 0.0);
//! }
//! ```
//!
//! ```text
//!            ┌──────────────┐
//!   Rect ───▶│              │
//!            │ dyn Geometry │──▶ measure() ──▶ Measurement
//!   Circle ─▶│              │
//!            └──────────────┘
//! ```

mod demo;
pub mod geometry;
pub mod measure;
pub mod shapes;

pub use demo::run;
pub use geometry::Geometry;
pub use measure::{measure, measure_all, Measurement};
pub use shapes::{Circle, Rect};
