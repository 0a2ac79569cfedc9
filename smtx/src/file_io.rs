//! Reading and writing matrix text files
//!
//! Files are read and written whole; there is no partial recovery. A
//! failed load never yields a matrix.

use std::fs;
use std::path::Path;

use smtx_core::{parse_str, CooMatrix, LoadOptions, Matrix, MatrixElement, SparseMatrix};
use tracing::debug;

use crate::error::{Error, Result};

/// Load an integer matrix from `path` with default options
pub fn load<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    load_as(path, &LoadOptions::default())
}

/// Load an integer matrix from `path`
pub fn load_with_options<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Matrix> {
    load_as(path, options)
}

/// Load a matrix with any element type from `path`
pub fn load_as<T: MatrixElement, P: AsRef<Path>>(
    path: P,
    options: &LoadOptions,
) -> Result<CooMatrix<T>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let matrix = parse_str(&text, options).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let (rows, cols) = matrix.dimensions();
    debug!(
        path = %path.display(),
        rows,
        cols,
        nnz = matrix.nnz(),
        strict = options.strict_bounds,
        "loaded matrix"
    );
    Ok(matrix)
}

/// Save `matrix` to `path` in the text format, replacing any existing file
pub fn save<T: MatrixElement, P: AsRef<Path>>(matrix: &CooMatrix<T>, path: P) -> Result<()> {
    let path = path.as_ref();
    let text = matrix.to_text();
    fs::write(path, &text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        bytes = text.len(),
        nnz = matrix.nnz(),
        "saved matrix"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use smtx_core::{FormatErrorKind, SmtxError};
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.txt", "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n");

        let matrix = load(&path).unwrap();
        assert_eq!(matrix.dimensions(), (2, 2));
        assert_eq!(matrix.get(0, 0), 1);
        assert_eq!(matrix.get(1, 1), 2);
        assert_eq!(matrix.nnz(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.matrix_error().is_none());
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bad.txt", "rows=2\ncols=2\nfoo\n");

        let err = load(&path).unwrap_err();
        assert_eq!(
            err.matrix_error(),
            Some(&SmtxError::format(3, FormatErrorKind::MalformedLine))
        );
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "line 3: malformed line");
    }

    #[test]
    fn test_load_strict() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "wide.txt", "rows=1\ncols=1\n(0, 4, 1)\n");

        assert!(load(&path).is_ok());
        let err = load_with_options(&path, &LoadOptions::strict()).unwrap_err();
        assert!(matches!(
            err.matrix_error(),
            Some(SmtxError::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_save_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let matrix = Matrix::from_entries(3, 2, [(2, 1, -9), (0, 0, 4)]);

        save(&matrix, &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "rows=3\ncols=2\n(0, 0, 4)\n(2, 1, -9)\n"
        );
    }

    #[test]
    fn test_save_to_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/out.txt");
        let err = save(&Matrix::new(1, 1), &path).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        for i in 0..10 {
            let rows = rng.gen_range(1..30);
            let cols = rng.gen_range(1..30);
            let mut matrix = Matrix::new(rows, cols);
            for _ in 0..rng.gen_range(0..50) {
                matrix.set(
                    rng.gen_range(0..rows),
                    rng.gen_range(0..cols),
                    rng.gen_range(-1000..1000),
                );
            }

            let path = dir.path().join(format!("m{i}.txt"));
            save(&matrix, &path).unwrap();
            assert_eq!(load(&path).unwrap(), matrix);
        }
    }

    #[test]
    fn test_float_matrix_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "f.txt", "rows=1\ncols=1\n(0, 0, 2.5)\n");
        let matrix: CooMatrix<f64> = load_as(&path, &LoadOptions::default()).unwrap();
        assert_eq!(matrix.get(0, 0), 2.5);
    }
}
