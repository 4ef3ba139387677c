//! Text codec: parse and format the line-oriented matrix representation

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::error::{CooError, ParseErrorKind, Result};
use crate::matrix::{Entry, SparseMatrix};
use crate::traits::MatrixElement;
use crate::validation::parsing::{parse_header, parse_index, split_entry};

use super::constants::{COLS_KEY, ROWS_KEY};
use super::options::{ParseOptions, Validation};

/// Parse a matrix with the default (permissive) options
pub fn parse_matrix<T: MatrixElement>(input: &str) -> Result<SparseMatrix<T>> {
    parse_matrix_with(input, &ParseOptions::default())
}

/// Parse a matrix from its text representation
///
/// The first two non-blank lines must be the `rows=` and `cols=` headers;
/// every following non-blank line is an entry. Entries keep their input
/// order. Errors report 1-based line numbers.
pub fn parse_matrix_with<T: MatrixElement>(
    input: &str,
    options: &ParseOptions,
) -> Result<SparseMatrix<T>> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let mut last_line = 0;
    let rows = next_header(&mut lines, &mut last_line, ROWS_KEY)?;
    let cols = next_header(&mut lines, &mut last_line, COLS_KEY)?;

    let mut entries = Vec::new();
    let mut skipped = 0usize;
    for (line_no, line) in lines {
        let entry = parse_entry::<T>(line).map_err(|kind| CooError::parse(line_no, kind))?;
        if options.skip_zero_values && entry.value.is_zero() {
            skipped += 1;
            continue;
        }
        entries.try_reserve(1).map_err(|_| CooError::AllocationFailure {
            requested: entries.len() + 1,
        })?;
        entries.push(entry);
    }

    if skipped > 0 {
        log::warn!("dropped {skipped} zero-valued entries while parsing");
    }
    log::debug!("parsed {rows}x{cols} matrix with {} entries", entries.len());

    match options.validation {
        Validation::Permissive => Ok(SparseMatrix::from_entries(rows, cols, entries)),
        Validation::Strict => SparseMatrix::from_entries_strict(rows, cols, entries),
    }
}

/// Consume the next header line; a missing header is reported on the line
/// after the last one read
fn next_header<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    last_line: &mut usize,
    key: &'static str,
) -> Result<usize> {
    let (line_no, line) = lines
        .next()
        .ok_or(CooError::parse(*last_line + 1, ParseErrorKind::MissingHeader(key)))?;
    *last_line = line_no;
    parse_header(line, key).map_err(|kind| CooError::parse(line_no, kind))
}

fn parse_entry<T: MatrixElement>(line: &str) -> core::result::Result<Entry<T>, ParseErrorKind> {
    let [row, col, value] = split_entry(line)?;
    let row = parse_index(row)?;
    let col = parse_index(col)?;
    let value = value.parse::<T>().map_err(|_| ParseErrorKind::InvalidValue)?;
    Ok(Entry::new(row, col, value))
}

/// Write a matrix in the text format
///
/// Entries are written in the matrix's current order, one per line.
pub fn write_matrix<T: MatrixElement, W: Write>(matrix: &SparseMatrix<T>, out: &mut W) -> fmt::Result {
    writeln!(out, "{ROWS_KEY}={}", matrix.rows())?;
    writeln!(out, "{COLS_KEY}={}", matrix.cols())?;
    for entry in matrix.entries() {
        writeln!(out, "({}, {}, {})", entry.row, entry.col, entry.value)?;
    }
    Ok(())
}

/// Render a matrix to a new string in the text format
pub fn format_matrix<T: MatrixElement>(matrix: &SparseMatrix<T>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_matrix(matrix, &mut out);
    out
}

impl<T: MatrixElement> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Dimensions;
    use alloc::string::ToString;

    const DIAGONAL: &str = "rows=3\ncols=3\n(0, 0, 1)\n(1, 1, 2)\n(2, 2, 3)\n";

    #[test]
    fn test_parse_matrix() {
        let m: SparseMatrix = parse_matrix(DIAGONAL).unwrap();
        assert_eq!(m.dimensions(), Dimensions::new(3, 3));
        assert_eq!(
            m.entries(),
            &[Entry::new(0, 0, 1), Entry::new(1, 1, 2), Entry::new(2, 2, 3)]
        );
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_blank_lines() {
        let input = "\r\n rows = 2 \r\ncols=4\r\n\r\n  (1,3,-7)  \r\n\n(0, 0, 9)";
        let m: SparseMatrix<i32> = parse_matrix(input).unwrap();
        assert_eq!(m.dimensions(), Dimensions::new(2, 4));
        assert_eq!(m.entries(), &[Entry::new(1, 3, -7), Entry::new(0, 0, 9)]);
    }

    #[test]
    fn test_parse_header_only() {
        let m: SparseMatrix = parse_matrix("rows=0\ncols=0").unwrap();
        assert!(m.is_empty());
        assert_eq!(m.dimensions(), Dimensions::new(0, 0));
    }

    #[test]
    fn test_parse_errors() {
        let missing = parse_matrix::<i64>("rows=3\n");
        assert_eq!(
            missing,
            Err(CooError::Parse {
                line: 2,
                kind: ParseErrorKind::MissingHeader("cols"),
            })
        );

        let empty = parse_matrix::<i64>("");
        assert_eq!(
            empty,
            Err(CooError::Parse {
                line: 1,
                kind: ParseErrorKind::MissingHeader("rows"),
            })
        );

        let swapped = parse_matrix::<i64>("cols=3\nrows=3\n");
        assert_eq!(
            swapped,
            Err(CooError::Parse {
                line: 1,
                kind: ParseErrorKind::MalformedHeader("rows"),
            })
        );

        let bad_entry = parse_matrix::<i64>("rows=3\ncols=3\n(0, 0, 1)\n0, 1, 2\n");
        assert_eq!(
            bad_entry,
            Err(CooError::Parse {
                line: 4,
                kind: ParseErrorKind::MalformedEntry,
            })
        );

        let bad_value = parse_matrix::<i8>("rows=3\ncols=3\n(0, 0, 300)\n");
        assert_eq!(
            bad_value,
            Err(CooError::Parse {
                line: 3,
                kind: ParseErrorKind::InvalidValue,
            })
        );

        let bad_index = parse_matrix::<i64>("rows=3\ncols=3\n(x, 0, 1)\n");
        assert_eq!(
            bad_index,
            Err(CooError::Parse {
                line: 3,
                kind: ParseErrorKind::InvalidIndex,
            })
        );
    }

    #[test]
    fn test_zero_values() {
        let input = "rows=2\ncols=2\n(0, 0, 0)\n(1, 1, 5)\n";

        let skipped: SparseMatrix = parse_matrix(input).unwrap();
        assert_eq!(skipped.entries(), &[Entry::new(1, 1, 5)]);

        let options = ParseOptions::default().with_skip_zero_values(false);
        let kept: SparseMatrix = parse_matrix_with(input, &options).unwrap();
        assert_eq!(kept.nnz(), 2);
    }

    #[test]
    fn test_strict_parse() {
        let input = "rows=2\ncols=2\n(0, 0, 1)\n(2, 0, 1)\n";

        let permissive: SparseMatrix = parse_matrix(input).unwrap();
        assert_eq!(permissive.nnz(), 2);

        let strict = parse_matrix_with::<i64>(input, &ParseOptions::strict());
        assert_eq!(
            strict,
            Err(CooError::OutOfBounds {
                row: 2,
                col: 0,
                dimensions: Dimensions::new(2, 2),
            })
        );

        let repeated = "rows=2\ncols=2\n(0, 0, 1)\n(0, 0, 2)\n";
        assert_eq!(
            parse_matrix_with::<i64>(repeated, &ParseOptions::strict()),
            Err(CooError::DuplicateEntry { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_format_matrix() {
        let m = SparseMatrix::from_triplets(3, 3, &[(0, 0, 1i64), (1, 1, 2), (2, 2, 3)]);
        assert_eq!(format_matrix(&m), DIAGONAL);
        assert_eq!(m.to_string(), DIAGONAL);

        let empty: SparseMatrix = SparseMatrix::new(2, 5);
        assert_eq!(format_matrix(&empty), "rows=2\ncols=5\n");
    }

    #[test]
    fn test_format_keeps_entry_order() {
        let m = SparseMatrix::from_triplets(2, 2, &[(1, 1, -4i32), (0, 1, 8)]);
        assert_eq!(format_matrix(&m), "rows=2\ncols=2\n(1, 1, -4)\n(0, 1, 8)\n");
        let back: SparseMatrix<i32> = parse_matrix(&format_matrix(&m)).unwrap();
        assert_eq!(back, m);
    }
}
