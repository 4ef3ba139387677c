//! Merge-based element-wise arithmetic
//!
//! Both operands must be row-major sorted without repeated coordinates.
//! The merge walks them with one cursor each and emits the union of their
//! coordinates in row-major order. Subtraction runs the same merge with the
//! right-hand values negated on the fly, so neither operand is modified.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::error::{CooError, Result};
use crate::matrix::{Entry, SparseMatrix};
use crate::traits::MatrixElement;
use crate::validation::validate_row_major;

use super::{Operand, Operation};

/// Add two matrices of identical dimensions
///
/// Overlapping coordinates are summed and dropped if the sum is zero.
///
/// # Errors
///
/// - [`CooError::DimensionMismatch`] if rows or cols differ
/// - [`CooError::UnsortedEntries`] / [`CooError::DuplicateEntry`] if an
///   operand is not strictly row-major
/// - [`CooError::Overflow`] if a sum overflows `T`
pub fn add<T: MatrixElement>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    merge_with(a, b, Operation::Addition, Some, T::checked_add)
}

/// Subtract `b` from `a`, both of identical dimensions
///
/// Equivalent to adding `a` and `b.negated()`, without copying `b`.
pub fn subtract<T: MatrixElement>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    merge_with(a, b, Operation::Subtraction, T::checked_neg, T::checked_sub)
}

/// Union merge of two sorted operands
///
/// `right_only` maps a value present only in `b`; `both` combines values at
/// a shared coordinate. Either returning `None` is an overflow.
fn merge_with<T, R, B>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    op: Operation,
    right_only: R,
    both: B,
) -> Result<SparseMatrix<T>>
where
    T: MatrixElement,
    R: Fn(T) -> Option<T>,
    B: Fn(T, T) -> Option<T>,
{
    if a.dimensions() != b.dimensions() {
        return Err(CooError::DimensionMismatch {
            op,
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }

    let left = a.entries();
    let right = b.entries();
    validate_row_major(left, Operand::Left)?;
    validate_row_major(right, Operand::Right)?;

    log::debug!(
        "{op} of {} matrices with {} and {} entries",
        a.dimensions(),
        left.len(),
        right.len()
    );

    let capacity = left.len() + right.len();
    let mut out: Vec<Entry<T>> = Vec::new();
    out.try_reserve_exact(capacity)
        .map_err(|_| CooError::AllocationFailure { requested: capacity })?;

    let overflow = |entry: &Entry<T>| CooError::Overflow {
        op,
        row: entry.row,
        col: entry.col,
    };

    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        let (x, y) = (&left[i], &right[j]);
        match x.cmp_position(y) {
            Ordering::Less => {
                push_nonzero(&mut out, x.row, x.col, x.value);
                i += 1;
            }
            Ordering::Greater => {
                let value = right_only(y.value).ok_or_else(|| overflow(y))?;
                push_nonzero(&mut out, y.row, y.col, value);
                j += 1;
            }
            Ordering::Equal => {
                let value = both(x.value, y.value).ok_or_else(|| overflow(x))?;
                if value.is_zero() {
                    log::trace!("({}, {}) cancelled", x.row, x.col);
                }
                push_nonzero(&mut out, x.row, x.col, value);
                i += 1;
                j += 1;
            }
        }
    }

    for x in &left[i..] {
        push_nonzero(&mut out, x.row, x.col, x.value);
    }
    for y in &right[j..] {
        let value = right_only(y.value).ok_or_else(|| overflow(y))?;
        push_nonzero(&mut out, y.row, y.col, value);
    }

    Ok(SparseMatrix::from_entries(a.rows(), a.cols(), out))
}

// Capacity is reserved up front for every possible output entry.
fn push_nonzero<T: MatrixElement>(out: &mut Vec<Entry<T>>, row: usize, col: usize, value: T) {
    if !value.is_zero() {
        out.push(Entry::new(row, col, value));
    }
}
