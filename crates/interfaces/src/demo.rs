use exercises_core::Transcript;
use tracing::info;

use crate::geometry::Geometry;
use crate::measure::measure;
use crate::shapes::{Circle, Rect};

/// Run the interfaces demo: measure a 3x4 rectangle and a radius-5 circle.
pub fn run() -> Transcript {
    let mut out = Transcript::new("interfaces");

    let r = Rect::new(3.0, 4.0);
    let c = Circle::new(5.0);

    // Both types implement Geometry, so both can be passed to measure.
    let shapes: [&dyn Geometry; 2] = [&r, &c];
    for g in shapes {
        for text in measure(g).report() {
            out.line(text);
        }
    }

    info!(shapes = shapes.len(), "interfaces demo finished");
    out
}
