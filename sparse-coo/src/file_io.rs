//! File loading and saving for sparse matrices
//!
//! Text files use the `rows=`/`cols=` header format from
//! [`sparse_coo_core::format`]; JSON files are the serde encoding of
//! [`SparseMatrix`].

use std::fs;
use std::path::Path;

use sparse_coo_core::{format_matrix, parse_matrix_with, MatrixElement, ParseOptions, SparseMatrix};

use crate::error::{Error, Result};

/// Reads and writes sparse matrix files
pub struct MatrixFile;

impl MatrixFile {
    /// Read a text-format matrix file
    pub fn read<T: MatrixElement, P: AsRef<Path>>(
        path: P,
        options: &ParseOptions,
    ) -> Result<SparseMatrix<T>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let matrix = parse_matrix_with(&text, options).map_err(|e| Error::in_file(path, e))?;
        log::info!(
            "loaded {} matrix with {} entries from {}",
            matrix.dimensions(),
            matrix.nnz(),
            path.display()
        );
        Ok(matrix)
    }

    /// Write a matrix in the text format, replacing any existing file
    pub fn write<T: MatrixElement, P: AsRef<Path>>(path: P, matrix: &SparseMatrix<T>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, format_matrix(matrix)).map_err(|e| Error::io(path, e))?;
        log::info!("wrote {} entries to {}", matrix.nnz(), path.display());
        Ok(())
    }

    /// Read a JSON-encoded matrix file
    ///
    /// The decoded matrix is checked with [`SparseMatrix::validate`] when
    /// `options` asks for strict validation.
    #[cfg(feature = "serde")]
    pub fn read_json<T, P>(path: P, options: &ParseOptions) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement + serde::de::DeserializeOwned,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let matrix: SparseMatrix<T> = serde_json::from_str(&text).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        if options.validation == sparse_coo_core::Validation::Strict {
            matrix.validate().map_err(|e| Error::in_file(path, e))?;
        }
        Ok(matrix)
    }

    /// Write a matrix as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn write_json<T, P>(path: P, matrix: &SparseMatrix<T>) -> Result<()>
    where
        T: MatrixElement + serde::Serialize,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(matrix).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, text).map_err(|e| Error::io(path, e))?;
        log::info!("wrote {} entries to {}", matrix.nnz(), path.display());
        Ok(())
    }
}
