//! Keywords and delimiters of the matrix text format

/// Prefix of the row count header line
pub const ROWS_KEY: &str = "rows=";

/// Prefix of the column count header line
pub const COLS_KEY: &str = "cols=";

/// Opening delimiter of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between the tokens of an entry
pub const ENTRY_SEPARATOR: &str = ", ";
