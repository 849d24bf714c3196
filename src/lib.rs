//! # Lag Matrix
//!
//! Builds the symmetric matrix of lagged product sums of a sample sequence,
//! the building block of autocovariance estimates and linear-prediction
//! normal equations.
//!
//! For samples `s` of length `n` and a size parameter `count`, the matrix is
//! `(count + 1) x (count + 1)` with
//!
//! ```text
//! M[k][j] = sum over i in count..n of s[i - k] * s[i - j]
//! ```
//!
//! ## Features
//!
//! - A reference generator that evaluates the sum cell by cell
//! - A diagonal generator that computes each product sequence once per
//!   diagonal and shares partial sums between neighbouring cells
//! - Operation counting for comparing the two
//! - Input reading, validation and matrix printing for the `lagmatrix` binary
//!
//! ## Example
//!
//! ```rust
//! use lag_matrix::{lag_matrix, Algorithm, MatrixGenerator};
//!
//! let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let m = lag_matrix(&samples, 2);
//! assert_eq!(m[(0, 0)], 50.0);
//!
//! let reference = Algorithm::Reference.generator().generate(&samples, 2);
//! assert_eq!(m, reference);
//! ```

mod config;
mod csv_utils;
mod diagonal;
mod error;
mod format;
mod generator;
mod reference;

pub use config::{MatrixConfig, DEFAULT_DIGITS};
pub use csv_utils::{read_samples, read_samples_from_reader, validate_samples};
pub use diagonal::DiagonalGenerator;
pub use error::{LagMatrixError, Result};
pub use format::{format_matrix, write_matrix};
pub use generator::{Algorithm, MatrixGenerator, NoTally, OpCounts, Tally};
pub use nalgebra::DMatrix;
pub use reference::ReferenceGenerator;

/// Computes the lag matrix with the diagonal generator.
///
/// # Arguments
///
/// * `samples` - Finite input samples, more of them than `count`
/// * `count` - Size parameter; the result is `(count + 1) x (count + 1)`
///
/// # Panics
///
/// If `samples.len() <= count`.
pub fn lag_matrix(samples: &[f32], count: usize) -> DMatrix<f32> {
    DiagonalGenerator.generate(samples, count)
}
