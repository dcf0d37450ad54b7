//! Error types for checked array access.

use thiserror::Error;

/// Errors from the checked accessors (`try_get`, `try_set`).
///
/// Plain indexing panics on an out-of-range index, just like a native array.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArrayError {
    /// Index past the end of a sequence.
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Cell outside a grid.
    #[error("Cell ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
