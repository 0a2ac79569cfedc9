#![no_std]

//! smtx core - sparse matrix type, text format and arithmetic
//!
//! This crate provides the in-memory sparse matrix, the parser and writer
//! for its text format, and addition, subtraction and multiplication with
//! dimension checks. It performs no I/O.

extern crate alloc;

#[cfg(feature = "serde")]
pub mod document;
pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

#[cfg(feature = "serde")]
pub use document::{MatrixDocument, MatrixEntry};
pub use error::*;
pub use format::{parse_str, write_matrix, LoadOptions};
pub use matrix::{CooMatrix, Coord, Matrix};
pub use ops::{add, multiply, subtract, Operation};
pub use traits::{MatrixElement, SparseMatrix};
