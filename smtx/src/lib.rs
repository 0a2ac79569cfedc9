//! smtx - sparse matrix text files
//!
//! File-backed loading and saving of sparse matrices in the smtx text
//! format, built on the pure types and arithmetic of `smtx-core`.
//!
//! ## Architecture
//!
//! - **smtx-core**: matrix type, text format, validation and arithmetic (no I/O)
//! - **smtx**: file I/O, error context with paths, logging and the `smtx` CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smtx::{file_io, Operation};
//!
//! fn example() -> smtx::Result<()> {
//!     let a = file_io::load("a.txt")?;
//!     let b = file_io::load("b.txt")?;
//!
//!     let product = Operation::Multiply.apply(&a, &b)?;
//!     file_io::save(&product, "result.txt")?;
//!     print!("{product}");
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use smtx_core::{
    // Matrix types and traits
    CooMatrix, Coord, Matrix, MatrixElement, SparseMatrix,
    // Text format
    parse_str, write_matrix, LoadOptions,
    // Arithmetic
    add, multiply, subtract, Operation,
    // Core errors
    ErrorCategory, FormatErrorKind, SmtxError,
};

#[cfg(feature = "serde")]
pub use smtx_core::{MatrixDocument, MatrixEntry};

#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod file_io;

pub use error::{Error, Result};
pub use file_io::{load, load_as, load_with_options, save};
