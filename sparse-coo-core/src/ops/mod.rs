//! Sparse matrix arithmetic
//!
//! Addition and subtraction share a two-pointer merge over row-major
//! sorted entries; multiplication expands contracting pairs and
//! accumulates them per destination coordinate.

pub mod merge;
pub mod multiply;

pub use merge::{add, subtract};
pub use multiply::multiply;

/// Arithmetic operations, used for error reporting and dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Negation,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Addition => write!(f, "addition"),
            Operation::Subtraction => write!(f, "subtraction"),
            Operation::Multiplication => write!(f, "multiplication"),
            Operation::Negation => write!(f, "negation"),
        }
    }
}

/// Which side of a binary operation an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Left,
    Right,
}

impl core::fmt::Display for Operand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operand::Left => write!(f, "left"),
            Operand::Right => write!(f, "right"),
        }
    }
}
