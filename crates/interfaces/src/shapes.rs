//! Concrete shapes. Neither knows about the other; each implements
//! [`Geometry`] on its own.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Geometry for Rect {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perim(&self) -> f64 {
        2.0 * self.width + 2.0 * self.height
    }
}

/// Prints the fields in declaration order: `{3 4}`.
impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.width, self.height)
    }
}

/// A circle, described by its radius alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Geometry for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perim(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rect() {
        let r = Rect::new(3.0, 4.0);
        assert_eq!(r.area(), 12.0);
        assert_eq!(r.perim(), 14.0);
        assert_eq!(r.to_string(), "{3 4}");
        assert_eq!(r.name(), "Rect");
    }

    #[test]
    fn test_circle() {
        let c = Circle::new(5.0);
        assert!((c.area() - 78.53981633974483).abs() < EPS);
        assert!((c.perim() - 31.41592653589793).abs() < EPS);
        assert_eq!(c.to_string(), "{5}");
        assert_eq!(c.name(), "Circle");
    }

    #[test]
    fn test_fractional_display() {
        assert_eq!(Rect::new(1.5, 2.25).to_string(), "{1.5 2.25}");
        assert_eq!(Circle::new(0.5).to_string(), "{0.5}");
    }

    #[test]
    fn test_degenerate_shapes() {
        assert_eq!(Rect::new(0.0, 7.0).area(), 0.0);
        assert_eq!(Rect::new(0.0, 7.0).perim(), 14.0);
        assert_eq!(Circle::new(0.0).area(), 0.0);
    }

    #[test]
    fn test_serde_roundtrip_fields() {
        let json = serde_json::to_string(&Rect::new(3.0, 4.0)).unwrap();
        assert_eq!(json, r#"{"width":3.0,"height":4.0}"#);

        let c: Circle = serde_json::from_str(r#"{"radius":5.0}"#).unwrap();
        assert_eq!(c, Circle::new(5.0));
    }
}
