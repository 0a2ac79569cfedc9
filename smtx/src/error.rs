//! Error type for file-backed matrix operations

use std::io;
use std::path::PathBuf;

use smtx_core::SmtxError;
use thiserror::Error;

/// Errors from loading, saving or combining matrix files
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read matrix file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write matrix file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error loading matrix from file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: SmtxError,
    },

    #[error(transparent)]
    Matrix(#[from] SmtxError),
}

impl Error {
    /// The core error behind this one, if it is not an I/O failure
    pub fn matrix_error(&self) -> Option<&SmtxError> {
        match self {
            Error::Parse { source, .. } => Some(source),
            Error::Matrix(source) => Some(source),
            Error::Read { .. } | Error::Write { .. } => None,
        }
    }
}

/// Result type for file-backed operations
pub type Result<T> = std::result::Result<T, Error>;
