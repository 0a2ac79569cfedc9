//! Dimension compatibility and index bounds checks
//!
//! Pure functions over matrix shapes, used by the operations and by
//! strict loading.

use crate::matrix::CooMatrix;
use crate::ops::Operation;
use crate::traits::MatrixElement;
use crate::SmtxError;

/// Validate that two shapes are equal (addition and subtraction)
pub const fn validate_same_shape(
    operation: Operation,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SmtxError> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(SmtxError::DimensionMismatch {
            operation,
            left,
            right,
        });
    }
    Ok(())
}

/// Validate that the inner dimensions agree (multiplication)
pub const fn validate_inner_dimensions(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SmtxError> {
    if left.1 != right.0 {
        return Err(SmtxError::DimensionMismatch {
            operation: Operation::Multiply,
            left,
            right,
        });
    }
    Ok(())
}

/// Validate that every stored entry lies inside the declared dimensions
pub fn validate_entries_in_bounds<T: MatrixElement>(
    matrix: &CooMatrix<T>,
) -> Result<(), SmtxError> {
    match matrix.first_out_of_bounds() {
        Some(coord) => Err(SmtxError::IndexOutOfBounds {
            row: coord.row,
            col: coord.col,
            rows: matrix.rows(),
            cols: matrix.cols(),
        }),
        None => Ok(()),
    }
}
