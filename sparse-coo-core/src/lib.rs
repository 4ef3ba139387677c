#![no_std]

//! sparse-coo core - coordinate-format sparse matrix definitions
//!
//! This crate provides the sparse matrix data model, its arithmetic
//! (addition, subtraction, multiplication) and the line-oriented text codec.
//! It performs no I/O and only needs `alloc`.

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{format_matrix, parse_matrix, parse_matrix_with, write_matrix, ParseOptions, Validation};
pub use matrix::{Dimensions, Entry, SparseMatrix};
pub use ops::{add, multiply, subtract, Operand, Operation};
pub use traits::{MatrixElement, MatrixOperations, SparseAccess};
