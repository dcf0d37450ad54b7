//! # Measuring Through the Trait
//!
//! [`measure`] takes `&dyn Geometry`. It calls `area` and `perim` through the
//! vtable and never matches on the concrete type, so adding a new shape
//! needs no change here.

use serde::Serialize;
use tracing::debug;

use crate::geometry::Geometry;

/// What [`measure`] found out about one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Short type name of the measured shape.
    pub kind: &'static str,
    /// The shape as it prints, e.g. `{3 4}`.
    pub shape: String,
    pub area: f64,
    pub perimeter: f64,
}

impl Measurement {
    /// The three report lines: the value, its area, its perimeter.
    pub fn report(&self) -> [String; 3] {
        [
            format!("Print inside the measure function - g -> {}", self.shape),
            format!("Printing the area of geometry - g.area() -> {}", self.area),
            format!(
                "Printing the area of perimeter - g.perim() -> {}",
                self.perimeter
            ),
        ]
    }

    /// Render as a single JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Measure any geometry.
///
/// ```rust
/// use exercises_interfaces::{measure, Rect};
///
/// let m = measure(&Rect::new(3.0, 4.0));
/// assert_eq!(m.area, 12.0);
/// assert_eq!(m.perimeter, 14.0);
/// ```
pub fn measure(g: &dyn Geometry) -> Measurement {
    let m = Measurement {
        kind: g.name(),
        shape: g.to_string(),
        area: g.area(),
        perimeter: g.perim(),
    };
    debug!(kind = m.kind, shape = %m.shape, area = m.area, perimeter = m.perimeter, "measured");
    m
}

/// Measure every shape, in order.
pub fn measure_all(shapes: &[&dyn Geometry]) -> Vec<Measurement> {
    shapes.iter().map(|g| measure(*g)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rect};

    /// A third shape, defined only here, to show `measure` needs no changes.
    struct Square(f64);

    impl std::fmt::Display for Square {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{{{}}}", self.0)
        }
    }

    impl Geometry for Square {
        fn area(&self) -> f64 {
            self.0 * self.0
        }

        fn perim(&self) -> f64 {
            4.0 * self.0
        }
    }

    #[test]
    fn test_measure_rect() {
        let m = measure(&Rect::new(3.0, 4.0));
        assert_eq!(m.kind, "Rect");
        assert_eq!(
            m.report(),
            [
                "Print inside the measure function - g -> {3 4}",
                "Printing the area of geometry - g.area() -> 12",
                "Printing the area of perimeter - g.perim() -> 14",
            ]
        );
    }

    #[test]
    fn test_measure_circle() {
        let m = measure(&Circle::new(5.0));
        assert_eq!(
            m.report(),
            [
                "Print inside the measure function - g -> {5}",
                "Printing the area of geometry - g.area() -> 78.53981633974483",
                "Printing the area of perimeter - g.perim() -> 31.41592653589793",
            ]
        );
    }

    #[test]
    fn test_measure_new_shape() {
        let m = measure(&Square(2.0));
        assert_eq!(m.kind, "Square");
        assert_eq!(m.area, 4.0);
        assert_eq!(m.perimeter, 8.0);
    }

    #[test]
    fn test_measure_all_keeps_order() {
        let r = Rect::new(1.0, 2.0);
        let c = Circle::new(1.0);
        let kinds: Vec<&str> = measure_all(&[&c, &r, &c])
            .iter()
            .map(|m| m.kind)
            .collect();
        assert_eq!(kinds, vec!["Circle", "Rect", "Circle"]);
    }

    #[test]
    fn test_to_json() {
        let json = measure(&Rect::new(3.0, 4.0)).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"kind":"Rect","shape":"{3 4}","area":12.0,"perimeter":14.0}"#
        );
    }
}
