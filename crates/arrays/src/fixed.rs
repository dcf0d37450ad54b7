//! # Fixed Sequences
//!
//! A sequence whose length `N` is fixed by its type. Every slot exists from
//! construction onwards; there is no push, pop or resize.
//!
//! ```rust
//! use exercises_arrays::FixedSeq;
//!
//! let b = FixedSeq::from_array([1, 2, 3, 4, 5]);
//! assert_eq!(b.get(2), 3);
//! assert_eq!(FixedSeq::<i32, 5>::LEN, 5);
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::ArrayError;

/// A sequence of exactly `N` values of type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedSeq<T, const N: usize> {
    data: [T; N],
}

impl<T: Default, const N: usize> FixedSeq<T, N> {
    /// Create a sequence with every slot set to `T::default()`.
    ///
    /// For integers that is 0.
    pub fn zeroed() -> Self {
        Self {
            data: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Default, const N: usize> Default for FixedSeq<T, N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T, const N: usize> FixedSeq<T, N> {
    /// Length, known at compile time.
    pub const LEN: usize = N;

    /// Create a sequence from a literal array.
    pub fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Create a sequence where slot `i` holds `f(i)`.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: std::array::from_fn(f),
        }
    }

    /// Number of slots. Always `N`.
    pub fn len(&self) -> usize {
        N
    }

    /// True only for the zero-length sequence.
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Write `value` at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= N`. Use [`try_set`](Self::try_set) for a checked write.
    pub fn set(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }

    /// Write `value` at `index`, or report the index as out of bounds.
    ///
    /// On error the sequence is left untouched.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, len: N })?;
        *slot = value;
        Ok(())
    }

    /// Iterate over the slots in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably, e.g. to update every slot in place.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Borrow the underlying array.
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Give back the underlying array.
    pub fn into_array(self) -> [T; N] {
        self.data
    }
}

impl<T: Copy, const N: usize> FixedSeq<T, N> {
    /// Read the value at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= N`. Use [`try_get`](Self::try_get) for a checked read.
    pub fn get(&self, index: usize) -> T {
        self.data[index]
    }

    /// Read the value at `index`, or report the index as out of bounds.
    pub fn try_get(&self, index: usize) -> Result<T, ArrayError> {
        self.data
            .get(index)
            .copied()
            .ok_or(ArrayError::IndexOutOfBounds { index, len: N })
    }
}

impl<T, const N: usize> From<[T; N]> for FixedSeq<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T, const N: usize> Index<usize> for FixedSeq<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedSeq<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedSeq<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Prints as `[v1 v2 v3]`, values separated by single spaces.
impl<T: fmt::Display, const N: usize> fmt::Display for FixedSeq<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
