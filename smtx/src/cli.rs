//! Command line interface for the `smtx` binary
//!
//! A thin adapter over the library: load both operands, apply the
//! operation, then save or print the result.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::file_io;
use crate::{LoadOptions, Matrix, MatrixDocument, Operation, SparseMatrix};

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(about = "smtx - add, subtract and multiply sparse matrices stored as text files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add two matrices of the same shape
    Add(OperandArgs),
    /// Subtract the second matrix from the first
    Subtract(OperandArgs),
    /// Multiply the first matrix by the second
    Multiply(OperandArgs),
    /// Show dimensions and density of a matrix file
    Info {
        /// Matrix file to inspect
        file: PathBuf,

        /// Reject entries outside the declared dimensions
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Args, Debug)]
pub struct OperandArgs {
    /// First input matrix file
    pub first: PathBuf,

    /// Second input matrix file
    pub second: PathBuf,

    /// Save the result to this file (text format) instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Format used when printing the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Reject entries outside the declared dimensions
    #[arg(long)]
    pub strict: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// rows=/cols= headers followed by (row, col, value) lines
    Text,
    /// {"rows", "cols", "entries"} document
    Json,
}

/// Execute a parsed command, writing any printed output to `out`
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Commands::Add(args) => run_operation(Operation::Add, &args, out),
        Commands::Subtract(args) => run_operation(Operation::Subtract, &args, out),
        Commands::Multiply(args) => run_operation(Operation::Multiply, &args, out),
        Commands::Info { file, strict } => run_info(&file, strict, out),
    }
}

fn run_operation<W: Write>(operation: Operation, args: &OperandArgs, out: &mut W) -> Result<()> {
    let options = LoadOptions::default().strict_bounds(args.strict);
    let first = file_io::load_with_options(&args.first, &options)?;
    let second = file_io::load_with_options(&args.second, &options)?;

    let result = operation.apply(&first, &second).with_context(|| {
        format!(
            "cannot {operation} '{}' and '{}'",
            args.first.display(),
            args.second.display()
        )
    })?;

    let (rows, cols) = result.dimensions();
    info!(%operation, rows, cols, nnz = result.nnz(), "operation complete");

    match &args.output {
        Some(path) => {
            file_io::save(&result, path)?;
            info!(path = %path.display(), "result saved");
        }
        None => write_result(&result, args.format, out)?,
    }
    Ok(())
}

fn write_result<W: Write>(matrix: &Matrix, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{matrix}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &MatrixDocument::from(matrix))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_info<W: Write>(file: &Path, strict: bool, out: &mut W) -> Result<()> {
    let options = LoadOptions::default().strict_bounds(strict);
    let matrix = file_io::load_with_options(file, &options)?;

    let (rows, cols) = matrix.dimensions();
    writeln!(out, "Matrix: {}", file.display())?;
    writeln!(out, "  Dimensions: {rows} x {cols}")?;
    writeln!(out, "  Non-zero elements: {}", matrix.nnz())?;
    writeln!(out, "  Density: {:.4}", matrix.density())?;
    if let Some(coord) = matrix.first_out_of_bounds() {
        writeln!(
            out,
            "  Warning: entry ({}, {}) lies outside the declared dimensions",
            coord.row, coord.col
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SmtxError;
    use std::fs;
    use tempfile::TempDir;

    const MATRIX_A: &str = "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n";
    const MATRIX_B: &str = "rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n";

    fn setup() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), MATRIX_A).unwrap();
        fs::write(dir.path().join("b.txt"), MATRIX_B).unwrap();
        dir
    }

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn path_arg(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from([
            "smtx", "multiply", "a.txt", "b.txt", "-o", "c.txt", "--strict",
        ])
        .unwrap();
        match cli.command {
            Commands::Multiply(args) => {
                assert_eq!(args.first, PathBuf::from("a.txt"));
                assert_eq!(args.second, PathBuf::from("b.txt"));
                assert_eq!(args.output, Some(PathBuf::from("c.txt")));
                assert_eq!(args.format, OutputFormat::Text);
                assert!(args.strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from(["smtx", "divide", "a.txt", "b.txt"]).is_err());
        assert!(Cli::try_parse_from(["smtx", "add", "a.txt"]).is_err());
    }

    #[test]
    fn test_add_prints_text() {
        let dir = setup();
        let out = run_args(&["smtx", "add", &path_arg(&dir, "a.txt"), &path_arg(&dir, "b.txt")])
            .unwrap();
        assert_eq!(out, "rows=2\ncols=2\n(0, 0, 4)\n(0, 1, 4)\n(1, 1, 2)\n");
    }

    #[test]
    fn test_subtract_prints_json() {
        let dir = setup();
        let out = run_args(&[
            "smtx",
            "subtract",
            &path_arg(&dir, "a.txt"),
            &path_arg(&dir, "b.txt"),
            "--format",
            "json",
        ])
        .unwrap();

        let document: MatrixDocument<i64> = serde_json::from_str(&out).unwrap();
        let matrix = Matrix::from(document);
        assert_eq!(
            matrix,
            Matrix::from_entries(2, 2, [(0, 0, -2), (0, 1, -4), (1, 1, 2)])
        );
    }

    #[test]
    fn test_multiply_saves_output() {
        let dir = setup();
        let output = path_arg(&dir, "result.txt");
        let out = run_args(&[
            "smtx",
            "multiply",
            &path_arg(&dir, "a.txt"),
            &path_arg(&dir, "b.txt"),
            "--output",
            &output,
        ])
        .unwrap();

        assert!(out.is_empty());
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n"
        );
    }

    #[test]
    fn test_dimension_mismatch_fails() {
        let dir = setup();
        fs::write(dir.path().join("c.txt"), "rows=3\ncols=1\n(2, 0, 1)\n").unwrap();

        let err = run_args(&["smtx", "add", &path_arg(&dir, "a.txt"), &path_arg(&dir, "c.txt")])
            .unwrap_err();
        assert!(matches!(
            err.root_cause().downcast_ref::<SmtxError>(),
            Some(SmtxError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_malformed_input_fails() {
        let dir = setup();
        fs::write(dir.path().join("bad.txt"), "rows=2\nfoo\n").unwrap();

        let err = run_args(&[
            "smtx",
            "multiply",
            &path_arg(&dir, "a.txt"),
            &path_arg(&dir, "bad.txt"),
        ])
        .unwrap_err();
        assert!(format!("{err:#}").contains("line 2: malformed line"));
    }

    #[test]
    fn test_info() {
        let dir = setup();
        let out = run_args(&["smtx", "info", &path_arg(&dir, "a.txt")]).unwrap();
        assert!(out.contains("Dimensions: 2 x 2"));
        assert!(out.contains("Non-zero elements: 2"));
        assert!(out.contains("Density: 0.5000"));
        assert!(!out.contains("Warning"));
    }
}
