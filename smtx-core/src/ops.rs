//! Matrix arithmetic
//!
//! Every operation borrows both operands and returns a freshly built
//! matrix. Shapes are validated before any work is done.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::matrix::{CooMatrix, Coord};
use crate::traits::{MatrixElement, SparseMatrix};
use crate::validation::{validate_inner_dimensions, validate_same_shape};
use crate::{Result, SmtxError};

/// The binary operations supported between two matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Apply this operation to `a` and `b`
    pub fn apply<T: MatrixElement>(self, a: &CooMatrix<T>, b: &CooMatrix<T>) -> Result<CooMatrix<T>> {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply(a, b),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Operation {
    type Err = SmtxError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or(SmtxError::UnknownOperation)
    }
}

/// Element-wise sum of two matrices of the same shape
pub fn add<T: MatrixElement>(a: &CooMatrix<T>, b: &CooMatrix<T>) -> Result<CooMatrix<T>> {
    validate_same_shape(Operation::Add, a.dimensions(), b.dimensions())?;
    merge(a, b, T::checked_add)
}

/// Element-wise difference `a - b` of two matrices of the same shape
pub fn subtract<T: MatrixElement>(a: &CooMatrix<T>, b: &CooMatrix<T>) -> Result<CooMatrix<T>> {
    validate_same_shape(Operation::Subtract, a.dimensions(), b.dimensions())?;
    merge(a, b, T::checked_sub)
}

/// Matrix product `a * b`
///
/// Only non-zero pairs are visited: rows of `b` are indexed once, then
/// each entry `(i, k)` of `a` is combined with the entries of row `k`.
/// Products are summed in the element's accumulator type, so only a
/// final value that does not fit is reported as `Overflow`. Entries
/// outside an operand's declared dimensions take no part.
pub fn multiply<T: MatrixElement>(a: &CooMatrix<T>, b: &CooMatrix<T>) -> Result<CooMatrix<T>> {
    validate_inner_dimensions(a.dimensions(), b.dimensions())?;

    let mut b_rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
    for (k, j, value) in in_bounds(b) {
        b_rows.entry(k).or_default().push((j, value));
    }

    let mut sums: BTreeMap<Coord, T::Accumulator> = BTreeMap::new();
    for (i, k, v1) in in_bounds(a) {
        let Some(row) = b_rows.get(&k) else {
            continue;
        };
        for &(j, v2) in row {
            let acc = sums.entry(Coord::new(i, j)).or_insert(T::ACCUMULATOR_ZERO);
            *acc = T::checked_mul_add(*acc, v1, v2)
                .ok_or(SmtxError::Overflow { row: i, col: j })?;
        }
    }

    let mut result: CooMatrix<T> = CooMatrix::new(a.rows(), b.cols());
    for (coord, acc) in sums {
        let value = T::narrow(acc).ok_or(SmtxError::Overflow {
            row: coord.row,
            col: coord.col,
        })?;
        result.set(coord.row, coord.col, value);
    }

    Ok(result)
}

/// Stored entries that lie inside the matrix's declared dimensions
fn in_bounds<T: MatrixElement>(
    matrix: &CooMatrix<T>,
) -> impl Iterator<Item = (usize, usize, T)> + '_ {
    let (rows, cols) = matrix.dimensions();
    matrix
        .iter()
        .filter(move |&(row, col, _)| row < rows && col < cols)
}

/// Combine every in-range coordinate present in either operand with `combine(a, b)`
fn merge<T, F>(a: &CooMatrix<T>, b: &CooMatrix<T>, combine: F) -> Result<CooMatrix<T>>
where
    T: MatrixElement,
    F: Fn(T, T) -> Option<T>,
{
    let mut result: CooMatrix<T> = CooMatrix::from_entries(a.rows(), a.cols(), in_bounds(a));
    for (row, col, value) in in_bounds(b) {
        let combined =
            combine(result.get(row, col), value).ok_or(SmtxError::Overflow { row, col })?;
        result.set(row, col, combined);
    }
    Ok(result)
}
