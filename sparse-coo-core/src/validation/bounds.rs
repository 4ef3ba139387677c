//! Coordinate bounds and uniqueness validation

use alloc::vec::Vec;

use crate::error::{CooError, Result};
use crate::matrix::{Dimensions, Entry};

/// Validate that every entry lies inside the matrix dimensions
///
/// Reports the first offending entry in list order.
pub fn validate_entry_bounds<T>(dimensions: Dimensions, entries: &[Entry<T>]) -> Result<()> {
    match entries
        .iter()
        .find(|entry| !dimensions.contains(entry.row, entry.col))
    {
        Some(entry) => Err(CooError::OutOfBounds {
            row: entry.row,
            col: entry.col,
            dimensions,
        }),
        None => Ok(()),
    }
}

/// Validate that no `(row, col)` coordinate appears twice
///
/// Works on unsorted input by sorting a copy of the coordinates.
pub fn validate_unique_positions<T>(entries: &[Entry<T>]) -> Result<()> {
    let mut positions: Vec<(usize, usize)> = Vec::new();
    positions
        .try_reserve_exact(entries.len())
        .map_err(|_| CooError::AllocationFailure {
            requested: entries.len(),
        })?;
    positions.extend(entries.iter().map(|entry| (entry.row, entry.col)));
    positions.sort_unstable();

    match positions.windows(2).find(|pair| pair[0] == pair[1]) {
        Some(pair) => Err(CooError::DuplicateEntry {
            row: pair[0].0,
            col: pair[0].1,
        }),
        None => Ok(()),
    }
}
