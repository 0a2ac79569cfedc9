//! Abstract interfaces for sparse matrices
//!
//! Traits are pure interfaces; `CooMatrix` is the concrete implementation.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::SparseMatrix;
