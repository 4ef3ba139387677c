//! Row-major ordering validation for merge inputs

use core::cmp::Ordering;

use crate::error::{CooError, Result};
use crate::matrix::Entry;
use crate::ops::Operand;

/// Validate that entries are strictly ascending in row-major order
///
/// A repeated coordinate is reported as [`CooError::DuplicateEntry`]; any
/// other descent as [`CooError::UnsortedEntries`] with the index of the
/// first entry that is out of place.
pub fn validate_row_major<T>(entries: &[Entry<T>], operand: Operand) -> Result<()> {
    for (index, pair) in entries.windows(2).enumerate() {
        match pair[0].cmp_position(&pair[1]) {
            Ordering::Less => {}
            Ordering::Equal => {
                return Err(CooError::DuplicateEntry {
                    row: pair[1].row,
                    col: pair[1].col,
                })
            }
            Ordering::Greater => {
                return Err(CooError::UnsortedEntries {
                    operand,
                    index: index + 1,
                })
            }
        }
    }
    Ok(())
}
