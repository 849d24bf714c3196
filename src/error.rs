use std::path::PathBuf;

use thiserror::Error;

/// Error types for reading input and configuring a matrix run.
///
/// The generators themselves never fail; these cover the layer that turns
/// command-line arguments and an input file into a validated sample slice.
#[derive(Debug, Error)]
pub enum LagMatrixError {
    /// Count must be positive
    #[error("Invalid count: {0}. Count must be positive")]
    InvalidCount(usize),
    /// Length must be positive
    #[error("Invalid length: {0}. Length must be positive")]
    InvalidLength(usize),
    /// Length must exceed count so every summation window has at least one term
    #[error("Insufficient data: length {length} must be greater than count {count}")]
    InsufficientData { length: usize, count: usize },
    /// Input file path does not exist
    #[error("Input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),
    /// Input file ended before `expected` values were read
    #[error("Not enough input values for length {expected}: found {found}")]
    NotEnoughValues { expected: usize, found: usize },
    /// A line could not be parsed as a number
    #[error("Invalid value in input file on line {line}: {value:?}")]
    InvalidValue { line: usize, value: String },
    /// A line parsed to NaN or infinity
    #[error("Invalid input data in data file on line {line}: {value}")]
    NonFiniteValue { line: usize, value: f32 },
    #[error("Malformed input file: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LagMatrixError {
    /// Process exit status for this error: 1 for bad arguments, 2 for bad
    /// input data, 255 for anything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            LagMatrixError::InvalidCount(_)
            | LagMatrixError::InvalidLength(_)
            | LagMatrixError::InsufficientData { .. }
            | LagMatrixError::MissingInput(_) => 1,
            LagMatrixError::NotEnoughValues { .. }
            | LagMatrixError::InvalidValue { .. }
            | LagMatrixError::NonFiniteValue { .. }
            | LagMatrixError::Csv(_) => 2,
            LagMatrixError::Io(_) => 255,
        }
    }
}

/// Result type for lag matrix operations
pub type Result<T> = std::result::Result<T, LagMatrixError>;
