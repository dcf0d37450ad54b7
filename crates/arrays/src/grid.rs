//! # Grids - Sequences of Sequences
//!
//! A fixed sequence is one-dimensional. Nesting one inside another gives a
//! two-level structure with both lengths fixed by the type:
//!
//! ```text
//!   Grid<T, 2, 3>  =  FixedSeq<FixedSeq<T, 3>, 2>
//!
//!          col 0  col 1  col 2
//!   row 0 [  a      b      c  ]
//!   row 1 [  d      e      f  ]
//! ```
//!
//! Storage is row-major: `iter_row_major` visits `a b c d e f`.

use std::fmt;

use crate::error::ArrayError;
use crate::fixed::FixedSeq;

/// `R` rows of `C` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid<T, const R: usize, const C: usize> {
    rows: FixedSeq<FixedSeq<T, C>, R>,
}

impl<T: Default, const R: usize, const C: usize> Grid<T, R, C> {
    /// Create a grid with every cell set to `T::default()`.
    pub fn zeroed() -> Self {
        Self {
            rows: FixedSeq::from_fn(|_| FixedSeq::zeroed()),
        }
    }
}

impl<T: Default, const R: usize, const C: usize> Default for Grid<T, R, C> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T, const R: usize, const C: usize> Grid<T, R, C> {
    /// Number of rows (compile-time constant).
    pub const ROWS: usize = R;

    /// Number of columns (compile-time constant).
    pub const COLS: usize = C;

    /// Create a grid from nested literal arrays.
    ///
    /// ```rust
    /// use exercises_arrays::Grid;
    ///
    /// let g = Grid::from_array([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(g.get(1, 2), 6);
    /// ```
    pub fn from_array(data: [[T; C]; R]) -> Self {
        Self {
            rows: FixedSeq::from_array(data.map(FixedSeq::from_array)),
        }
    }

    /// Create a grid where cell `(i, j)` holds `f(i, j)`.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            rows: FixedSeq::from_fn(|i| FixedSeq::from_fn(|j| f(i, j))),
        }
    }

    pub fn rows(&self) -> usize {
        R
    }

    pub fn cols(&self) -> usize {
        C
    }

    /// Borrow row `i`.
    ///
    /// # Panics
    ///
    /// If `i >= R`.
    pub fn row(&self, i: usize) -> &FixedSeq<T, C> {
        &self.rows[i]
    }

    /// Write `value` at `(i, j)`. Panics when out of range.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.rows[i][j] = value;
    }

    pub fn try_set(&mut self, i: usize, j: usize, value: T) -> Result<(), ArrayError> {
        self.check(i, j)?;
        self.rows[i][j] = value;
        Ok(())
    }

    /// Cells in row-major order.
    pub fn iter_row_major(&self) -> impl Iterator<Item = &T> + '_ {
        self.rows.iter().flat_map(|row| row.iter())
    }

    fn check(&self, row: usize, col: usize) -> Result<(), ArrayError> {
        if row < R && col < C {
            Ok(())
        } else {
            Err(ArrayError::CellOutOfBounds {
                row,
                col,
                rows: R,
                cols: C,
            })
        }
    }
}

impl<T: Copy, const R: usize, const C: usize> Grid<T, R, C> {
    /// Read the value at `(i, j)`. Panics when out of range.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.rows[i][j]
    }

    pub fn try_get(&self, i: usize, j: usize) -> Result<T, ArrayError> {
        self.check(i, j)?;
        Ok(self.rows[i][j])
    }
}

/// Prints as `[[a b c] [d e f]]`.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Grid<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_grid() {
        let g: Grid<i32, 2, 3> = Grid::zeroed();
        assert!(g.iter_row_major().all(|&v| v == 0));
        assert_eq!(g.iter_row_major().count(), 6);
        assert_eq!(Grid::<i32, 2, 3>::ROWS, 2);
        assert_eq!(Grid::<i32, 2, 3>::COLS, 3);
    }

    #[test]
    fn test_nested_loop_population() {
        let mut g: Grid<usize, 2, 3> = Grid::zeroed();
        for i in 0..g.rows() {
            for j in 0..g.cols() {
                g.set(i, j, i + j);
            }
        }
        let cells: Vec<usize> = g.iter_row_major().copied().collect();
        assert_eq!(cells, vec![0, 1, 2, 1, 2, 3]);
        assert_eq!(g, Grid::from_fn(|i, j| i + j));
    }

    #[test]
    fn test_cells_are_independent() {
        let mut g: Grid<i32, 2, 2> = Grid::zeroed();
        g.set(0, 1, 5);
        assert_eq!(g.get(0, 1), 5);
        assert_eq!(g.get(1, 1), 0);
        assert_eq!(g.get(0, 0), 0);
        assert_eq!(g.row(0).as_array(), &[0, 5]);
    }

    #[test]
    fn test_checked_cell_access() {
        let mut g: Grid<i32, 2, 3> = Grid::zeroed();
        let err = g.try_get(2, 0).unwrap_err();
        assert_eq!(
            err,
            ArrayError::CellOutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            }
        );
        assert!(g.try_set(1, 3, 1).is_err());
        assert!(g.try_set(1, 2, 1).is_ok());
        assert_eq!(g.try_get(1, 2), Ok(1));
    }

    #[test]
    fn test_grid_display() {
        let g = Grid::from_array([[0, 1, 2], [1, 2, 3]]);
        assert_eq!(g.to_string(), "[[0 1 2] [1 2 3]]");
    }
}
