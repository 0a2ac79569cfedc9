//! Classification of single lines of matrix text

use super::constants::{COLS_KEY, ENTRY_CLOSE, ENTRY_OPEN, ROWS_KEY};
use crate::traits::MatrixElement;
use crate::validation::{parse_entry, parse_index};
use crate::FormatErrorKind;

/// One parsed line of the text format
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Line<T> {
    /// `rows=<n>`
    Rows(usize),
    /// `cols=<n>`
    Cols(usize),
    /// `(<row>, <col>, <value>)`
    Entry { row: usize, col: usize, value: T },
    /// Empty or whitespace-only
    Blank,
}

impl<T: MatrixElement> Line<T> {
    /// Parse a line; surrounding whitespace is ignored
    pub fn parse(raw: &str) -> Result<Self, FormatErrorKind> {
        let line = raw.trim();

        if line.is_empty() {
            return Ok(Line::Blank);
        }

        if let Some(value) = line.strip_prefix(ROWS_KEY) {
            return parse_index(value)
                .map(Line::Rows)
                .ok_or(FormatErrorKind::InvalidRowCount);
        }

        if let Some(value) = line.strip_prefix(COLS_KEY) {
            return parse_index(value)
                .map(Line::Cols)
                .ok_or(FormatErrorKind::InvalidColumnCount);
        }

        if let Some(body) = line
            .strip_prefix(ENTRY_OPEN)
            .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        {
            let (row, col, value) = parse_entry(body)?;
            return Ok(Line::Entry { row, col, value });
        }

        Err(FormatErrorKind::MalformedLine)
    }
}
