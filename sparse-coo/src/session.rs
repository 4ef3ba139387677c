//! Arithmetic sessions over two loaded matrices
//!
//! A [`Session`] owns both operands and writes each computed result into a
//! result directory under a fixed per-operation file name. The interactive
//! menu drives a session from any line-based reader and writer.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use sparse_coo_core::{add, multiply, subtract, Operation, ParseOptions, SparseMatrix};

use crate::error::{Error, Result};
use crate::file_io::MatrixFile;

/// Encoding used for result files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `rows=`/`cols=` header text
    #[default]
    Text,
    /// serde JSON
    #[cfg(feature = "serde")]
    Json,
}

impl OutputFormat {
    /// File extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            #[cfg(feature = "serde")]
            OutputFormat::Json => "json",
        }
    }
}

/// Configuration for an arithmetic session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory receiving result files
    pub result_dir: PathBuf,
    /// Re-sort loaded operands into row-major order
    pub sort_inputs: bool,
    /// Result file encoding
    pub output_format: OutputFormat,
    /// Options applied when reading operand files
    pub parse_options: ParseOptions,
}

impl SessionConfig {
    /// Create config writing results into `result_dir`
    pub fn new(result_dir: impl Into<PathBuf>) -> Self {
        Self {
            result_dir: result_dir.into(),
            sort_inputs: true,
            output_format: OutputFormat::default(),
            parse_options: ParseOptions::default(),
        }
    }

    /// Set whether operands are re-sorted after loading
    pub fn with_sort_inputs(mut self, sort_inputs: bool) -> Self {
        self.sort_inputs = sort_inputs;
        self
    }

    /// Set the result file encoding
    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Set the operand parse options
    pub fn with_parse_options(mut self, parse_options: ParseOptions) -> Self {
        self.parse_options = parse_options;
        self
    }

    /// Path of the result file for `op`
    pub fn result_path(&self, op: Operation) -> PathBuf {
        self.result_dir
            .join(format!("{}.{}", result_stem(op), self.output_format.extension()))
    }

    /// Fail with [`Error::NotADirectory`] unless the result directory exists
    pub fn check_result_dir(&self) -> Result<()> {
        if self.result_dir.is_dir() {
            Ok(())
        } else {
            Err(Error::NotADirectory(self.result_dir.clone()))
        }
    }
}

fn result_stem(op: Operation) -> &'static str {
    match op {
        Operation::Addition => "addition",
        Operation::Subtraction => "difference",
        Operation::Multiplication => "multiplication",
        Operation::Negation => "negation",
    }
}

/// Two operands and the configuration for writing results
pub struct Session {
    left: SparseMatrix,
    right: SparseMatrix,
    config: SessionConfig,
}

impl Session {
    /// Create a session from matrices already in memory
    ///
    /// Fails with [`Error::NotADirectory`] if the result directory is missing.
    pub fn new(left: SparseMatrix, right: SparseMatrix, config: SessionConfig) -> Result<Self> {
        config.check_result_dir()?;

        let (left, right) = if config.sort_inputs {
            (sort_operand(left, "left"), sort_operand(right, "right"))
        } else {
            (left, right)
        };

        Ok(Self {
            left,
            right,
            config,
        })
    }

    /// Load both operands from text files and create a session
    ///
    /// The result directory is checked before either file is read.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(left: P, right: Q, config: SessionConfig) -> Result<Self> {
        config.check_result_dir()?;
        let left = MatrixFile::read(left, &config.parse_options)?;
        let right = MatrixFile::read(right, &config.parse_options)?;
        Self::new(left, right, config)
    }

    pub fn left(&self) -> &SparseMatrix {
        &self.left
    }

    pub fn right(&self) -> &SparseMatrix {
        &self.right
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Compute `left op right` without writing anything
    pub fn compute(&self, op: Operation) -> Result<SparseMatrix> {
        let result = match op {
            Operation::Addition => add(&self.left, &self.right)?,
            Operation::Subtraction => subtract(&self.left, &self.right)?,
            Operation::Multiplication => multiply(&self.left, &self.right)?,
            Operation::Negation => self.left.negated()?,
        };
        Ok(result)
    }

    /// Compute `left op right` and write it to the result directory
    ///
    /// Returns the path of the written file.
    pub fn run(&self, op: Operation) -> Result<PathBuf> {
        let result = self.compute(op)?;
        let path = self.config.result_path(op);
        match self.config.output_format {
            OutputFormat::Text => MatrixFile::write(&path, &result)?,
            #[cfg(feature = "serde")]
            OutputFormat::Json => MatrixFile::write_json(&path, &result)?,
        }
        Ok(path)
    }

    /// Run the interactive operation menu until exit or end of input
    ///
    /// Operation failures are reported to `output` and the menu continues;
    /// only I/O errors on `input`/`output` end the loop with an error.
    pub fn run_interactive<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> std::io::Result<()> {
        let mut line = String::new();
        loop {
            writeln!(output, "\nChoose an arithmetic operation or exit:")?;
            writeln!(output, "1. Addition (+)")?;
            writeln!(output, "2. Subtraction (-)")?;
            writeln!(output, "3. Multiplication (*)")?;
            writeln!(output, "4. Exit\n")?;
            write!(output, "Choice [1-4]: ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                log::debug!("end of input, leaving menu");
                return Ok(());
            }

            let op = match MenuChoice::parse(&line) {
                Some(MenuChoice::Run(op)) => op,
                Some(MenuChoice::Exit) => {
                    writeln!(output, "Exiting.")?;
                    return Ok(());
                }
                None => {
                    writeln!(output, "Invalid choice, please try again.")?;
                    continue;
                }
            };

            match self.run(op) {
                Ok(path) => writeln!(output, "The {op} result is saved in {}", path.display())?,
                Err(e) => {
                    log::warn!("{op} failed: {e}");
                    writeln!(output, "Error: {e}")?;
                }
            }
        }
    }
}

fn sort_operand(matrix: SparseMatrix, name: &str) -> SparseMatrix {
    if matrix.is_row_major() {
        return matrix;
    }
    log::warn!("{name} operand is not in row-major order, sorting");
    matrix.into_row_major()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Run(Operation),
    Exit,
}

impl MenuChoice {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" | "+" => Some(MenuChoice::Run(Operation::Addition)),
            "2" | "-" => Some(MenuChoice::Run(Operation::Subtraction)),
            "3" | "*" => Some(MenuChoice::Run(Operation::Multiplication)),
            "4" | "q" | "exit" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparse_coo_core::Entry;
    use std::fs;
    use std::io::Cursor;

    fn diagonal() -> SparseMatrix {
        SparseMatrix::from_triplets(3, 3, &[(0, 0, 1), (1, 1, 2), (2, 2, 3)])
    }

    #[test]
    fn test_result_paths() {
        let config = SessionConfig::new("/out");
        assert_eq!(config.result_path(Operation::Addition), PathBuf::from("/out/addition.txt"));
        assert_eq!(
            config.result_path(Operation::Subtraction),
            PathBuf::from("/out/difference.txt")
        );
        assert_eq!(
            config.result_path(Operation::Multiplication),
            PathBuf::from("/out/multiplication.txt")
        );
    }

    #[test]
    fn test_missing_result_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionConfig::new(dir.path().join("nope"));
        let err = Session::new(diagonal(), diagonal(), config).err().unwrap();
        assert!(matches!(err, Error::NotADirectory(_)));
    }

    #[test]
    fn test_load_checks_result_dir_first() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionConfig::new(dir.path().join("nope"));
        // Operand files do not exist either; the directory is reported
        let err = Session::load(dir.path().join("a.txt"), dir.path().join("b.txt"), config)
            .err()
            .unwrap();
        assert!(matches!(err, Error::NotADirectory(_)));
    }

    #[test]
    fn test_negation_result() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::new(diagonal(), diagonal(), SessionConfig::new(dir.path())).unwrap();

        let negated = session.compute(Operation::Negation).unwrap();
        assert_eq!(
            negated.entries(),
            &[Entry::new(0, 0, -1), Entry::new(1, 1, -2), Entry::new(2, 2, -3)]
        );
        assert_eq!(session.left(), &diagonal());

        let path = session.run(Operation::Negation).unwrap();
        assert_eq!(path, dir.path().join("negation.txt"));
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "rows=3\ncols=3\n(0, 0, -1)\n(1, 1, -2)\n(2, 2, -3)\n"
        );
    }

    #[test]
    fn test_run_writes_results() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::new(diagonal(), diagonal(), SessionConfig::new(dir.path())).unwrap();

        let path = session.run(Operation::Addition).unwrap();
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "rows=3\ncols=3\n(0, 0, 2)\n(1, 1, 4)\n(2, 2, 6)\n"
        );

        let path = session.run(Operation::Subtraction).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "rows=3\ncols=3\n");

        let path = session.run(Operation::Multiplication).unwrap();
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "rows=3\ncols=3\n(0, 0, 1)\n(1, 1, 4)\n(2, 2, 9)\n"
        );
    }

    #[test]
    fn test_unsorted_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let unsorted = SparseMatrix::from_triplets(3, 3, &[(2, 2, 3), (0, 0, 1)]);

        let sorted = Session::new(unsorted.clone(), diagonal(), SessionConfig::new(dir.path())).unwrap();
        assert!(sorted.left().is_row_major());
        assert!(sorted.compute(Operation::Addition).is_ok());

        let config = SessionConfig::new(dir.path()).with_sort_inputs(false);
        let raw = Session::new(unsorted, diagonal(), config).unwrap();
        let err = raw.compute(Operation::Addition).unwrap_err();
        assert!(matches!(
            err.matrix_error(),
            Some(sparse_coo_core::CooError::UnsortedEntries { .. })
        ));
    }

    #[test]
    fn test_interactive_menu() {
        let dir = tempfile::tempdir().unwrap();
        let wide = SparseMatrix::from_triplets(3, 4, &[(0, 3, 1)]);
        let session = Session::new(diagonal(), wide, SessionConfig::new(dir.path())).unwrap();

        let input = Cursor::new("7\n1\n3\n4\n2\n");
        let mut output = Vec::new();
        session.run_interactive(input, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Invalid choice"));
        // 3x3 + 3x4 fails but the menu keeps going
        assert!(output.contains("Error: dimension mismatch for addition"));
        assert!(output.contains("The multiplication result is saved in"));
        assert!(output.contains("Exiting."));
        assert!(dir.path().join("multiplication.txt").exists());
        // Input after exit is not consumed as a command
        assert!(!dir.path().join("difference.txt").exists());
    }

    #[test]
    fn test_interactive_menu_stops_at_eof() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::new(diagonal(), diagonal(), SessionConfig::new(dir.path())).unwrap();
        session.run_interactive(Cursor::new("2"), std::io::sink()).unwrap();
        assert!(dir.path().join("difference.txt").exists());
    }

    #[test]
    fn test_menu_choice() {
        assert_eq!(MenuChoice::parse(" 1 \n"), Some(MenuChoice::Run(Operation::Addition)));
        assert_eq!(MenuChoice::parse("*"), Some(MenuChoice::Run(Operation::Multiplication)));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionConfig::new(dir.path()).with_output_format(OutputFormat::Json);
        let session = Session::new(diagonal(), diagonal(), config).unwrap();
        let path = session.run(Operation::Multiplication).unwrap();
        assert_eq!(path, dir.path().join("multiplication.json"));

        let back: SparseMatrix = MatrixFile::read_json(&path, &ParseOptions::default()).unwrap();
        assert_eq!(back, session.compute(Operation::Multiplication).unwrap());
    }
}
