//! Writing a `CooMatrix` as matrix text

use alloc::string::{String, ToString};
use core::fmt::{self, Write};

use super::constants::{COLS_KEY, ENTRY_CLOSE, ENTRY_OPEN, ENTRY_SEPARATOR, ROWS_KEY};
use crate::matrix::CooMatrix;
use crate::traits::MatrixElement;

/// Write `matrix` in the text format
///
/// Emits the `rows=` and `cols=` headers followed by one line per stored
/// entry in row-major order. Every line ends with `\n`.
pub fn write_matrix<W: Write, T: MatrixElement>(out: &mut W, matrix: &CooMatrix<T>) -> fmt::Result {
    writeln!(out, "{ROWS_KEY}{}", matrix.rows())?;
    writeln!(out, "{COLS_KEY}{}", matrix.cols())?;
    for (row, col, value) in matrix.iter() {
        writeln!(
            out,
            "{ENTRY_OPEN}{row}{ENTRY_SEPARATOR}{col}{ENTRY_SEPARATOR}{value}{ENTRY_CLOSE}"
        )?;
    }
    Ok(())
}

impl<T: MatrixElement> CooMatrix<T> {
    /// The matrix in the text format, as written to files
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl<T: MatrixElement> fmt::Display for CooMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(f, self)
    }
}
