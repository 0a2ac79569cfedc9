//! Serializable view of a matrix
//!
//! JSON object keys must be strings, so the coordinate-keyed storage is
//! flattened into a list of entries.

use alloc::vec::Vec;

use crate::matrix::CooMatrix;
use crate::traits::{MatrixElement, SparseMatrix};

/// A single stored entry
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatrixEntry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

/// Dimensions plus entries in row-major order
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatrixDocument<T> {
    pub rows: usize,
    pub cols: usize,
    pub entries: Vec<MatrixEntry<T>>,
}

impl<T: MatrixElement> From<&CooMatrix<T>> for MatrixDocument<T> {
    fn from(matrix: &CooMatrix<T>) -> Self {
        let mut entries = Vec::with_capacity(matrix.nnz());
        entries.extend(
            matrix
                .iter()
                .map(|(row, col, value)| MatrixEntry { row, col, value }),
        );
        Self {
            rows: matrix.rows(),
            cols: matrix.cols(),
            entries,
        }
    }
}

impl<T: MatrixElement> From<MatrixDocument<T>> for CooMatrix<T> {
    /// Entries go through `set`, so zero values are dropped
    fn from(document: MatrixDocument<T>) -> Self {
        CooMatrix::from_entries(
            document.rows,
            document.cols,
            document
                .entries
                .into_iter()
                .map(|entry| (entry.row, entry.col, entry.value)),
        )
    }
}
