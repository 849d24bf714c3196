use std::path::{Path, PathBuf};

use crate::error::{LagMatrixError, Result};
use crate::generator::Algorithm;

/// Fraction digits printed per cell unless overridden.
pub const DEFAULT_DIGITS: usize = 6;

/// Parameters for one matrix run, validated once when built.
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    /// Size parameter; the matrix is `(count + 1) x (count + 1)`
    pub count: usize,
    /// Number of samples to read from the input
    pub length: usize,
    /// File holding one sample per line
    pub input: PathBuf,
    /// Generator to run
    pub algorithm: Algorithm,
    /// Fraction digits in the printed output
    pub digits: usize,
}

impl MatrixConfig {
    /// Creates a configuration, rejecting a zero count or length, a length
    /// that leaves no summation terms, and a missing input file.
    pub fn new(count: usize, length: usize, input: impl Into<PathBuf>) -> Result<Self> {
        let input = input.into();

        if count == 0 {
            return Err(LagMatrixError::InvalidCount(count));
        }

        if length == 0 {
            return Err(LagMatrixError::InvalidLength(length));
        }

        if length <= count {
            return Err(LagMatrixError::InsufficientData { length, count });
        }

        if !input.exists() {
            let shown = std::path::absolute(&input).unwrap_or_else(|_| input.clone());
            return Err(LagMatrixError::MissingInput(shown));
        }

        Ok(Self {
            count,
            length,
            input,
            algorithm: Algorithm::default(),
            digits: DEFAULT_DIGITS,
        })
    }

    /// Sets the generator
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the number of fraction digits printed
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn existing_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1.0").unwrap();
        file
    }

    #[test]
    fn test_valid_config_defaults() {
        let file = existing_file();
        let config = MatrixConfig::new(4, 300, file.path()).unwrap();

        assert_eq!(config.count, 4);
        assert_eq!(config.length, 300);
        assert_eq!(config.algorithm, Algorithm::Optimized);
        assert_eq!(config.digits, DEFAULT_DIGITS);
        assert_eq!(config.input(), file.path());
    }

    #[test]
    fn test_builders() {
        let file = existing_file();
        let config = MatrixConfig::new(2, 10, file.path())
            .unwrap()
            .with_algorithm(Algorithm::Reference)
            .with_digits(3);

        assert_eq!(config.algorithm, Algorithm::Reference);
        assert_eq!(config.digits, 3);
    }

    #[test]
    fn test_invalid_parameters() {
        let file = existing_file();

        assert!(matches!(
            MatrixConfig::new(0, 10, file.path()),
            Err(LagMatrixError::InvalidCount(0))
        ));
        assert!(matches!(
            MatrixConfig::new(3, 0, file.path()),
            Err(LagMatrixError::InvalidLength(0))
        ));
        assert!(matches!(
            MatrixConfig::new(4, 4, file.path()),
            Err(LagMatrixError::InsufficientData { length: 4, count: 4 })
        ));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.prn");

        let err = MatrixConfig::new(4, 300, &missing).unwrap_err();
        assert!(matches!(err, LagMatrixError::MissingInput(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
