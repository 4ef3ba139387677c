//! sparse-coo - coordinate-format sparse matrix arithmetic
//!
//! This library loads integer sparse matrices from text (or JSON) files,
//! adds, subtracts and multiplies them, and writes the results back out.
//!
//! ## Architecture
//!
//! - **sparse-coo-core**: data model, arithmetic and text codec (`no_std`, no I/O)
//! - **sparse-coo**: file I/O, result sessions and the `sparse-coo` binary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sparse_coo::{add, MatrixFile, ParseOptions, SparseMatrix};
//!
//! fn example() -> sparse_coo::Result<()> {
//!     let a: SparseMatrix = MatrixFile::read("a.txt", &ParseOptions::default())?;
//!     let b: SparseMatrix = MatrixFile::read("b.txt", &ParseOptions::default())?;
//!
//!     let sum = add(&a.into_row_major(), &b.into_row_major())?;
//!     MatrixFile::write("sum.txt", &sum)?;
//!     Ok(())
//! }
//! ```

// Re-export the core model, operations and codec
pub use sparse_coo_core::{
    // Data model
    Dimensions, Entry, SparseMatrix,
    // Traits
    MatrixElement, MatrixOperations, SparseAccess,
    // Arithmetic
    add, multiply, subtract, Operand, Operation,
    // Codec
    format_matrix, parse_matrix, parse_matrix_with, ParseOptions, Validation,
    // Error handling
    CooError, ErrorCategory, ParseErrorKind,
};

pub mod error;
pub mod file_io;
pub mod session;

pub use error::{Error, Result};
pub use file_io::MatrixFile;
pub use session::{OutputFormat, Session, SessionConfig};
