//! Core matrix abstraction traits
//!
//! This module defines the read-only interface shared by matrix
//! implementations, independent of how entries are stored.

use super::element::MatrixElement;

/// Core sparse matrix trait for format-agnostic access
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is zero (not stored) or if the
    /// position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;

    /// Fraction of cells that hold a non-zero value
    ///
    /// Empty shapes report a density of zero.
    fn density(&self) -> f64 {
        let (rows, cols) = self.dimensions();
        let cells = rows as f64 * cols as f64;
        if cells == 0.0 {
            0.0
        } else {
            self.nnz() as f64 / cells
        }
    }
}
