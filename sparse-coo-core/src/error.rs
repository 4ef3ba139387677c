//! Error types for sparse-coo operations

use crate::matrix::Dimensions;
use crate::ops::{Operand, Operation};
use thiserror::Error;

/// Errors that can occur during sparse matrix construction, parsing or arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CooError {
    /// Operand shapes are incompatible for the requested operation
    #[error("dimension mismatch for {op}: left operand is {left}, right operand is {right}")]
    DimensionMismatch {
        op: Operation,
        left: Dimensions,
        right: Dimensions,
    },
    /// Malformed header or entry line in the text format
    #[error("parse error on line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
    /// Result buffer could not be reserved
    #[error("allocation of {requested} entries failed")]
    AllocationFailure { requested: usize },
    /// Entry coordinates lie outside the matrix dimensions
    #[error("entry ({row}, {col}) is out of bounds for a {dimensions} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        dimensions: Dimensions,
    },
    /// The same coordinate appears twice in one matrix
    #[error("duplicate entry at ({row}, {col})")]
    DuplicateEntry { row: usize, col: usize },
    /// Merge input is not in row-major order
    #[error("{operand} operand entries are not row-major sorted at index {index}")]
    UnsortedEntries { operand: Operand, index: usize },
    /// Checked integer arithmetic overflowed
    #[error("integer overflow during {op} at ({row}, {col})")]
    Overflow { op: Operation, row: usize, col: usize },
}

/// Reasons a line of the text format was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Input ended before the named header line
    #[error("missing `{0}=` header")]
    MissingHeader(&'static str),
    /// Header line has the wrong key or an unparseable value
    #[error("malformed `{0}=` header")]
    MalformedHeader(&'static str),
    /// Entry line is not wrapped in parentheses
    #[error("entry must have the form (row, col, value)")]
    MalformedEntry,
    /// Entry line does not hold exactly three fields
    #[error("entry has {0} fields, expected 3")]
    FieldCount(usize),
    /// Row or column index is not a non-negative integer
    #[error("invalid index")]
    InvalidIndex,
    /// Value does not fit the element type
    #[error("invalid value")]
    InvalidValue,
}

/// Broad classification of a [`CooError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed or invalid input data
    Input,
    /// Incompatible operand shapes
    Shape,
    /// Integer overflow
    Arithmetic,
    /// Resource exhaustion
    Resource,
}

impl CooError {
    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            CooError::DimensionMismatch { .. } => ErrorCategory::Shape,
            CooError::Parse { .. }
            | CooError::OutOfBounds { .. }
            | CooError::DuplicateEntry { .. }
            | CooError::UnsortedEntries { .. } => ErrorCategory::Input,
            CooError::Overflow { .. } => ErrorCategory::Arithmetic,
            CooError::AllocationFailure { .. } => ErrorCategory::Resource,
        }
    }

    /// Returns `true` if this is a dimension mismatch
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, CooError::DimensionMismatch { .. })
    }

    pub(crate) fn parse(line: usize, kind: ParseErrorKind) -> Self {
        CooError::Parse { line, kind }
    }
}

/// Result type for sparse-coo operations
pub type Result<T> = core::result::Result<T, CooError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_messages() {
        let err = CooError::DimensionMismatch {
            op: Operation::Addition,
            left: Dimensions::new(3, 3),
            right: Dimensions::new(2, 3),
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch for addition: left operand is 3x3, right operand is 2x3"
        );

        let err = CooError::parse(4, ParseErrorKind::FieldCount(2));
        assert_eq!(err.to_string(), "parse error on line 4: entry has 2 fields, expected 3");

        let err = CooError::UnsortedEntries {
            operand: Operand::Right,
            index: 1,
        };
        assert_eq!(
            err.to_string(),
            "right operand entries are not row-major sorted at index 1"
        );
    }

    #[test]
    fn test_category() {
        assert_eq!(
            CooError::AllocationFailure { requested: 8 }.category(),
            ErrorCategory::Resource
        );
        assert_eq!(
            CooError::DuplicateEntry { row: 0, col: 0 }.category(),
            ErrorCategory::Input
        );
        let overflow = CooError::Overflow {
            op: Operation::Multiplication,
            row: 0,
            col: 0,
        };
        assert_eq!(overflow.category(), ErrorCategory::Arithmetic);
        assert!(!overflow.is_dimension_mismatch());
    }
}
