//! Coordinate-keyed sparse matrix storage
//!
//! Only non-zero entries are stored, keyed by their `(row, col)` position.
//! The ordered map gives row-major iteration, so the text writer emits
//! entries in a deterministic order.

use alloc::collections::BTreeMap;

use crate::traits::{MatrixElement, SparseMatrix};

/// Position of a cell, ordered row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Sparse matrix in coordinate form
///
/// Invariant: no stored value is zero. `set` with a zero value removes
/// the entry instead of storing it.
#[derive(Debug, Clone, PartialEq)]
pub struct CooMatrix<T> {
    rows: usize,
    cols: usize,
    elements: BTreeMap<Coord, T>,
}

/// Integer matrix, the element type of the text format
pub type Matrix = CooMatrix<i64>;

impl<T: MatrixElement> CooMatrix<T> {
    /// Create an empty matrix with the given dimensions
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            elements: BTreeMap::new(),
        }
    }

    /// Build a matrix from `(row, col, value)` triples, later triples overwriting earlier ones
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in entries {
            matrix.set(row, col, value);
        }
        matrix
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn set_rows(&mut self, rows: usize) {
        self.rows = rows;
    }

    pub(crate) fn set_cols(&mut self, cols: usize) {
        self.cols = cols;
    }

    /// Stored value at `(row, col)`, or zero when absent
    ///
    /// Out-of-range positions are simply absent.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.elements
            .get(&Coord::new(row, col))
            .copied()
            .unwrap_or(T::ZERO)
    }

    /// Store `value` at `(row, col)`; a zero value removes the entry
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let key = Coord::new(row, col);
        if value.is_zero() {
            self.elements.remove(&key);
        } else {
            self.elements.insert(key, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate stored entries as `(row, col, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.elements
            .iter()
            .map(|(coord, &value)| (coord.row, coord.col, value))
    }

    /// First stored entry outside `rows x cols`, if any
    pub fn first_out_of_bounds(&self) -> Option<Coord> {
        self.elements
            .keys()
            .find(|coord| coord.row >= self.rows || coord.col >= self.cols)
            .copied()
    }
}

impl<T: MatrixElement> SparseMatrix for CooMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.elements.get(&Coord::new(row, col)).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.elements.len()
    }
}
