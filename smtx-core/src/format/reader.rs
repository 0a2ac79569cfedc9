//! Parsing matrix text into a `CooMatrix`

use super::line::Line;
use crate::matrix::CooMatrix;
use crate::traits::MatrixElement;
use crate::validation::validate_entries_in_bounds;
use crate::{Result, SmtxError};

/// Options controlling how matrix text is loaded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject entries outside the declared dimensions
    pub strict_bounds: bool,
}

impl LoadOptions {
    /// Options that reject out-of-range entries
    pub const fn strict() -> Self {
        Self {
            strict_bounds: true,
        }
    }

    /// Set whether out-of-range entries are rejected
    pub const fn strict_bounds(mut self, strict: bool) -> Self {
        self.strict_bounds = strict;
        self
    }
}

/// Parse matrix text
///
/// Headers may appear anywhere and the last one of each kind wins; a
/// missing header leaves that dimension at zero. Entries are applied in
/// order through `set`, so a later zero entry removes an earlier one.
/// Bounds are only checked once the whole text has been read, and only
/// with `strict_bounds`.
pub fn parse_str<T: MatrixElement>(text: &str, options: &LoadOptions) -> Result<CooMatrix<T>> {
    let mut matrix: CooMatrix<T> = CooMatrix::new(0, 0);

    for (index, raw) in text.lines().enumerate() {
        let line = Line::<T>::parse(raw).map_err(|kind| SmtxError::format(index + 1, kind))?;
        match line {
            Line::Rows(rows) => matrix.set_rows(rows),
            Line::Cols(cols) => matrix.set_cols(cols),
            Line::Entry { row, col, value } => matrix.set(row, col, value),
            Line::Blank => {}
        }
    }

    if options.strict_bounds {
        validate_entries_in_bounds(&matrix)?;
    }

    Ok(matrix)
}

impl<T: MatrixElement> core::str::FromStr for CooMatrix<T> {
    type Err = SmtxError;

    fn from_str(s: &str) -> Result<Self> {
        parse_str(s, &LoadOptions::default())
    }
}
