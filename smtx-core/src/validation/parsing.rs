//! Token parsing for the matrix text format
//!
//! Pure parsing functions over single lines or tokens. Callers attach
//! line numbers to the resulting errors.

use crate::FormatErrorKind;
use crate::traits::MatrixElement;

/// Parse a non-negative integer such as a dimension or an index
///
/// Surrounding whitespace is ignored; signs, decimal points and empty
/// tokens are rejected.
pub fn parse_index(token: &str) -> Option<usize> {
    let token = token.trim();
    // usize::from_str accepts a leading '+'
    if token.starts_with('+') {
        return None;
    }
    token.parse().ok()
}

/// Parse a stored value
pub fn parse_value<T: MatrixElement>(token: &str) -> Option<T> {
    token.trim().parse().ok()
}

/// Parse the inside of an `(<row>, <col>, <value>)` line
///
/// `body` is the text between the parentheses. Exactly three
/// comma-separated tokens are required.
pub fn parse_entry<T: MatrixElement>(body: &str) -> Result<(usize, usize, T), FormatErrorKind> {
    let mut tokens = body.split(',');
    let (Some(row), Some(col), Some(value), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(FormatErrorKind::InvalidEntry);
    };

    match (parse_index(row), parse_index(col), parse_value(value)) {
        (Some(row), Some(col), Some(value)) => Ok((row, col, value)),
        _ => Err(FormatErrorKind::InvalidEntry),
    }
}
