use exercises_core::Transcript;
use tracing::info;

use crate::fixed::FixedSeq;
use crate::grid::Grid;

/// Run the arrays demo and return what it prints.
///
/// ```rust
/// let out = exercises_arrays::run();
/// assert_eq!(out.lines()[0], "emp:  [0 0 0 0 0]");
/// ```
pub fn run() -> Transcript {
    let mut out = Transcript::new("arrays");

    // Zero-valued on creation; the length is part of the type.
    let mut a: FixedSeq<i64, 5> = FixedSeq::zeroed();
    // Label ends in a space, so two spaces precede the value.
    out.record("emp: ", a);

    a[4] = 100;
    out.record("set:", a);
    out.record("get:", a[4]);
    out.record("lenght:", a.len());

    let b = FixedSeq::from_array([1i64, 2, 3, 4, 5]);
    out.record("dcl:", b);

    let mut two_d: Grid<usize, 2, 3> = Grid::zeroed();
    for i in 0..two_d.rows() {
        for j in 0..two_d.cols() {
            two_d.set(i, j, i + j);
        }
    }
    out.record("2 dimensions array:", two_d);

    info!(lines = out.len(), "arrays demo finished");
    out
}
