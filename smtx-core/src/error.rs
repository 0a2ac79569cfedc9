//! Error types for sparse matrix parsing and arithmetic

use crate::ops::Operation;

/// What was wrong with a line of matrix text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// `rows=` header with a value that is not a non-negative integer
    InvalidRowCount,
    /// `cols=` header with a value that is not a non-negative integer
    InvalidColumnCount,
    /// Parenthesised entry whose tokens are missing or not numbers
    InvalidEntry,
    /// Non-empty line that is neither a header nor an entry
    MalformedLine,
}

impl core::fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FormatErrorKind::InvalidRowCount => "invalid number of rows",
            FormatErrorKind::InvalidColumnCount => "invalid number of columns",
            FormatErrorKind::InvalidEntry => "invalid entry",
            FormatErrorKind::MalformedLine => "malformed line",
        };
        write!(f, "{msg}")
    }
}

/// Errors that can occur while loading or combining matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtxError {
    /// A line of the text format could not be parsed (1-based line number)
    Format { line: usize, kind: FormatErrorKind },
    /// Operand shapes are incompatible for the operation
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A loaded entry lies outside the declared dimensions (strict loading only)
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// The value at this coordinate does not fit the element type
    Overflow { row: usize, col: usize },
    /// Operation name not recognised
    UnknownOperation,
}

/// Coarse grouping of errors, for adapters mapping them to status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Format,
    Dimension,
    Arithmetic,
    Usage,
}

impl SmtxError {
    /// Shorthand for a format error on the given line
    pub const fn format(line: usize, kind: FormatErrorKind) -> Self {
        SmtxError::Format { line, kind }
    }

    pub const fn category(&self) -> ErrorCategory {
        match self {
            SmtxError::Format { .. } | SmtxError::IndexOutOfBounds { .. } => ErrorCategory::Format,
            SmtxError::DimensionMismatch { .. } => ErrorCategory::Dimension,
            SmtxError::Overflow { .. } => ErrorCategory::Arithmetic,
            SmtxError::UnknownOperation => ErrorCategory::Usage,
        }
    }
}

impl core::fmt::Display for SmtxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SmtxError::Format { line, kind } => write!(f, "line {line}: {kind}"),
            SmtxError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "matrix dimensions {}x{} and {}x{} are not compatible for {operation}",
                left.0, left.1, right.0, right.1
            ),
            SmtxError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(f, "entry ({row}, {col}) is outside a {rows}x{cols} matrix"),
            SmtxError::Overflow { row, col } => {
                write!(f, "arithmetic overflow at ({row}, {col})")
            }
            SmtxError::UnknownOperation => {
                write!(f, "invalid operation, use add, subtract or multiply")
            }
        }
    }
}

impl core::error::Error for SmtxError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, SmtxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display() {
        assert_eq!(
            SmtxError::format(3, FormatErrorKind::MalformedLine).to_string(),
            "line 3: malformed line"
        );
        assert_eq!(
            SmtxError::DimensionMismatch {
                operation: Operation::Multiply,
                left: (2, 3),
                right: (2, 3),
            }
            .to_string(),
            "matrix dimensions 2x3 and 2x3 are not compatible for multiply"
        );
    }

    #[test]
    fn test_category() {
        assert_eq!(
            SmtxError::format(1, FormatErrorKind::InvalidEntry).category(),
            ErrorCategory::Format
        );
        assert_eq!(
            SmtxError::Overflow { row: 0, col: 0 }.category(),
            ErrorCategory::Arithmetic
        );
        assert_eq!(SmtxError::UnknownOperation.category(), ErrorCategory::Usage);
    }
}
