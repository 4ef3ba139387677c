//! Abstract interfaces for sparse-coo
//!
//! Element type constraints and format-agnostic matrix access.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::{MatrixOperations, SparseAccess};
