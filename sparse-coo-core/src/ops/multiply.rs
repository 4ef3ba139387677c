//! Sparse matrix multiplication
//!
//! Every pair `(a, b)` with `a.col == b.row` contributes `a.value * b.value`
//! to destination `(a.row, b.col)`. The right operand is indexed by row so
//! each left entry only visits the entries it contracts with, and partial
//! sums accumulate in a map keyed by destination coordinate. Sums are kept
//! in [`MatrixElement::Accumulator`] and only range-checked against `T`
//! once complete, so intermediate overflow does not fail the product.
//!
//! Destinations whose contributions cancel to zero are dropped and the
//! result is returned in row-major order, matching the merge operations.
//! Neither operand needs to be sorted.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::{CooError, Result};
use crate::matrix::{Entry, SparseMatrix};
use crate::traits::MatrixElement;

use super::Operation;

/// Multiply an `m x k` matrix by a `k x n` matrix
///
/// # Errors
///
/// - [`CooError::DimensionMismatch`] if `a.cols() != b.rows()`
/// - [`CooError::Overflow`] if a finished sum does not fit in `T`
/// - [`CooError::AllocationFailure`] if the result cannot be allocated
pub fn multiply<T: MatrixElement>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    if a.cols() != b.rows() {
        return Err(CooError::DimensionMismatch {
            op: Operation::Multiplication,
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }

    log::debug!(
        "multiplication of {} by {} with {} and {} entries",
        a.dimensions(),
        b.dimensions(),
        a.nnz(),
        b.nnz()
    );

    // Right operand rows: row -> [(col, value)] in entry order
    let mut b_rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
    for entry in b.entries().iter().filter(|e| !e.value.is_zero()) {
        b_rows.entry(entry.row).or_default().push((entry.col, entry.value));
    }

    let mut accumulator: HashMap<(usize, usize), T::Accumulator> = HashMap::new();
    let zero = T::ACCUMULATOR_ZERO;
    for a_entry in a.entries().iter().filter(|e| !e.value.is_zero()) {
        let Some(row) = b_rows.get(&a_entry.col) else {
            continue;
        };

        for &(b_col, b_value) in row {
            let slot = accumulator.entry((a_entry.row, b_col)).or_insert(zero);
            *slot = T::mul_accumulate(*slot, a_entry.value, b_value).ok_or(CooError::Overflow {
                op: Operation::Multiplication,
                row: a_entry.row,
                col: b_col,
            })?;
        }
    }

    let mut sums: Vec<((usize, usize), T::Accumulator)> =
        accumulator.into_iter().filter(|&(_, sum)| sum != zero).collect();
    sums.sort_unstable_by_key(|&(position, _)| position);

    let mut entries: Vec<Entry<T>> = Vec::new();
    entries
        .try_reserve_exact(sums.len())
        .map_err(|_| CooError::AllocationFailure { requested: sums.len() })?;
    for ((row, col), sum) in sums {
        let value = T::narrow(sum).ok_or(CooError::Overflow {
            op: Operation::Multiplication,
            row,
            col,
        })?;
        log::trace!("({row}, {col}) = {value}");
        entries.push(Entry::new(row, col, value));
    }

    Ok(SparseMatrix::from_entries(a.rows(), b.cols(), entries))
}
