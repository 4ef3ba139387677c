//! Error types for file-backed sparse-coo operations

use std::path::PathBuf;

use sparse_coo_core::CooError;
use thiserror::Error;

/// Errors from loading, computing or saving matrices
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Matrix content or arithmetic error
    #[error(transparent)]
    Matrix(#[from] CooError),
    /// Matrix content error in a specific file
    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: CooError,
    },
    /// JSON encoding or decoding failed
    #[cfg(feature = "serde")]
    #[error("JSON error on {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The result location is not a usable directory
    #[error("{} is not a directory or does not exist", .0.display())]
    NotADirectory(PathBuf),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn in_file(path: impl Into<PathBuf>, source: CooError) -> Self {
        Error::InFile {
            path: path.into(),
            source,
        }
    }

    /// The underlying matrix error, if this is one
    pub fn matrix_error(&self) -> Option<&CooError> {
        match self {
            Error::Matrix(source) | Error::InFile { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for file-backed operations
pub type Result<T> = std::result::Result<T, Error>;
