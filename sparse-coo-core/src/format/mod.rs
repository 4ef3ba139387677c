//! Text format definitions for sparse-coo
//!
//! ```text
//! rows=<int>
//! cols=<int>
//! (<row>, <col>, <value>)
//! ```

pub mod constants;
pub mod options;
pub mod text;

pub use options::{ParseOptions, Validation};
pub use text::{format_matrix, parse_matrix, parse_matrix_with, write_matrix};
