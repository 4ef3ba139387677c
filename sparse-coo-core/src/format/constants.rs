//! Format constants for the text matrix representation

/// Header key for the row count
pub const ROWS_KEY: &str = "rows";

/// Header key for the column count
pub const COLS_KEY: &str = "cols";

/// Separator between a header key and its value
pub const HEADER_SEPARATOR: char = '=';

/// Opening delimiter of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between entry fields
pub const ENTRY_SEPARATOR: char = ',';
