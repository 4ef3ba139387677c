//! Coordinate-format sparse matrix
//!
//! A [`SparseMatrix`] is a pair of dimensions plus an ordered list of
//! `(row, col, value)` entries. Construction is permissive by default;
//! [`SparseMatrix::from_entries_strict`] and [`SparseMatrix::validate`]
//! check bounds and duplicate coordinates.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::error::{CooError, Result};
use crate::ops::Operation;
use crate::traits::{MatrixElement, MatrixOperations, SparseAccess};
use crate::validation;

/// Matrix shape as rows x cols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether `(row, col)` lies inside this shape
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

impl core::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A single stored `(row, col, value)` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T = i64> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> Entry<T> {
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// Compare coordinates in row-major order, ignoring values
    pub fn cmp_position(&self, other: &Self) -> Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl<T> From<(usize, usize, T)> for Entry<T> {
    fn from((row, col, value): (usize, usize, T)) -> Self {
        Self { row, col, value }
    }
}

/// Sparse matrix in coordinate (COO) representation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseMatrix<T = i64> {
    rows: usize,
    cols: usize,
    entries: Vec<Entry<T>>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty matrix with the given dimensions
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: Vec::new(),
        }
    }

    /// Create a matrix from entries without any validation
    ///
    /// Entries are kept in the order given. Out-of-bounds, duplicate or
    /// zero-valued entries are accepted as-is.
    pub fn from_entries(rows: usize, cols: usize, entries: Vec<Entry<T>>) -> Self {
        Self {
            rows,
            cols,
            entries,
        }
    }

    /// Create a matrix from `(row, col, value)` triples without validation
    pub fn from_triplets(rows: usize, cols: usize, triplets: &[(usize, usize, T)]) -> Self {
        let entries = triplets.iter().copied().map(Entry::from).collect();
        Self::from_entries(rows, cols, entries)
    }

    /// Create a matrix, rejecting out-of-bounds and duplicate coordinates
    pub fn from_entries_strict(rows: usize, cols: usize, entries: Vec<Entry<T>>) -> Result<Self> {
        let matrix = Self::from_entries(rows, cols, entries);
        matrix.validate()?;
        Ok(matrix)
    }

    /// Check that every entry is in bounds and no coordinate repeats
    pub fn validate(&self) -> Result<()> {
        validation::validate_entry_bounds(self.dimensions(), &self.entries)?;
        validation::validate_unique_positions(&self.entries)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the matrix shape
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.cols)
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries in their current order
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry<T>> {
        self.entries
    }

    /// Whether entries are strictly ascending in row-major order
    pub fn is_row_major(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[0].cmp_position(&pair[1]) == Ordering::Less)
    }

    /// Reorder entries into row-major order
    ///
    /// The sort is stable, so duplicate coordinates keep their relative order.
    pub fn into_row_major(mut self) -> Self {
        self.entries.sort_by(Entry::cmp_position);
        self
    }

    /// Copy of this matrix with every value negated
    pub fn negated(&self) -> Result<Self> {
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(self.entries.len())
            .map_err(|_| CooError::AllocationFailure {
                requested: self.entries.len(),
            })?;

        for entry in &self.entries {
            let value = entry.value.checked_neg().ok_or(CooError::Overflow {
                op: Operation::Negation,
                row: entry.row,
                col: entry.col,
            })?;
            entries.push(Entry::new(entry.row, entry.col, value));
        }

        Ok(Self::from_entries(self.rows, self.cols, entries))
    }
}

impl<T: MatrixElement> SparseAccess for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        if !self.dimensions().contains(row, col) {
            return None;
        }

        // Single pass; the first stored entry at a position wins
        let found = self
            .entries
            .iter()
            .find(|entry| entry.row == row && entry.col == col)
            .map(|entry| entry.value);

        found.filter(|value| !value.is_zero())
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}

impl<T: MatrixElement> MatrixOperations for SparseMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        let mut row: Vec<(usize, T)> = self
            .entries
            .iter()
            .filter(|entry| entry.row == row_index && !entry.value.is_zero())
            .map(|entry| (entry.col, entry.value))
            .collect();
        row.sort_by_key(|&(col, _)| col);
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        let mut col: Vec<(usize, T)> = self
            .entries
            .iter()
            .filter(|entry| entry.col == col_index && !entry.value.is_zero())
            .map(|entry| (entry.row, entry.value))
            .collect();
        col.sort_by_key(|&(row, _)| row);
        col
    }
}
