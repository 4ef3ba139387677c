//! Read-only views over a coordinate matrix
//!
//! Lookups treat any position without a stored non-zero value as zero.

use alloc::vec::Vec;

use super::element::MatrixElement;

/// Random access to the logical values of a sparse matrix
pub trait SparseAccess {
    type Element: MatrixElement;

    /// Value at `(row, col)`, or `None` when it is logically zero
    ///
    /// Positions outside the matrix shape also yield `None`. Stored zeros
    /// are reported as `None`, the same as absent positions.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Shape as `(rows, cols)`
    fn dimensions(&self) -> (usize, usize);

    /// Count of stored entries, zeros included if any were kept
    fn nnz(&self) -> usize;
}

/// Row and column slices of a [`SparseAccess`] matrix
pub trait MatrixOperations: SparseAccess {
    /// Non-zero `(col, value)` pairs of one row, ascending by column
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Non-zero `(row, value)` pairs of one column, ascending by row
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}
