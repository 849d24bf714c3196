use nalgebra::DMatrix;

use crate::diagonal::DiagonalGenerator;
use crate::reference::ReferenceGenerator;

/// A strategy for building the lagged product-sum matrix.
///
/// For samples `s` of length `n` and a `count`, every implementation returns
/// the `(count + 1) x (count + 1)` matrix
///
/// ```text
/// M[k][j] = sum over i in count..n of s[i - k] * s[i - j]
/// ```
///
/// accumulated in `f64` and narrowed to `f32` per cell. Callers must pass
/// `samples.len() > count` with every sample finite; implementations do not
/// validate their input.
pub trait MatrixGenerator {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Generates the matrix for the given samples and count.
    fn generate(&self, samples: &[f32], count: usize) -> DMatrix<f32>;

    /// Generates the matrix and reports how much arithmetic it took.
    ///
    /// The matrix is bit-identical to the one returned by [`generate`](Self::generate).
    fn generate_counted(&self, samples: &[f32], count: usize) -> (DMatrix<f32>, OpCounts);
}

/// Which generator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Triple loop straight from the formula
    Reference,
    /// Diagonal traversal sharing products across cells
    #[default]
    Optimized,
}

impl Algorithm {
    /// Returns a boxed generator for this algorithm.
    pub fn generator(self) -> Box<dyn MatrixGenerator> {
        match self {
            Algorithm::Reference => Box::new(ReferenceGenerator),
            Algorithm::Optimized => Box::new(DiagonalGenerator),
        }
    }
}

/// Sink for arithmetic operation counts.
///
/// Generators are written once, generic over a `Tally`, so the counting and
/// non-counting paths run the same floating-point code.
pub trait Tally {
    fn multiplies(&mut self, n: usize);
    fn additions(&mut self, n: usize);
}

/// Discards all counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTally;

impl Tally for NoTally {
    #[inline(always)]
    fn multiplies(&mut self, _n: usize) {}

    #[inline(always)]
    fn additions(&mut self, _n: usize) {}
}

/// Floating-point multiplications and additions performed by one call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub multiplies: usize,
    pub additions: usize,
}

impl OpCounts {
    /// Total arithmetic operations.
    pub fn total(&self) -> usize {
        self.multiplies + self.additions
    }
}

impl Tally for OpCounts {
    #[inline]
    fn multiplies(&mut self, n: usize) {
        self.multiplies += n;
    }

    #[inline]
    fn additions(&mut self, n: usize) {
        self.additions += n;
    }
}
