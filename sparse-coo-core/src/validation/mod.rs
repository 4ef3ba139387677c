//! Validation utilities for sparse-coo
//!
//! Pure checks over entry lists and format strings, with no I/O.

pub mod bounds;
pub mod order;
pub mod parsing;

pub use bounds::{validate_entry_bounds, validate_unique_positions};
pub use order::validate_row_major;
pub use parsing::{parse_header, parse_index};
