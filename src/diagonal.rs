use nalgebra::DMatrix;
use tracing::trace;

use crate::generator::{MatrixGenerator, NoTally, OpCounts, Tally};

/// Builds the matrix one diagonal at a time, sharing work along each diagonal.
///
/// Every cell on a diagonal of lag `d = |k - j|` sums products of the same two
/// sample subsequences offset by `d`, just over a window that slides by one
/// as the traversal moves down the diagonal. The product sequence is computed
/// once per diagonal, the part of the window common to a run of cells is
/// summed once, and each cell then only adds the terms at its own two ends.
///
/// Multiplications drop from `O(count^2 * n)` to `O(count * n)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagonalGenerator;

/// One diagonal of the matrix, identified by its top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Diagonal {
    /// Starts at `(row, 0)`, on or below the main diagonal
    Lower(usize),
    /// Starts at `(0, col)`, above the main diagonal
    Upper(usize),
}

impl Diagonal {
    fn lag(self) -> usize {
        match self {
            Diagonal::Lower(row) => row,
            Diagonal::Upper(col) => col,
        }
    }

    fn start(self) -> (usize, usize) {
        match self {
            Diagonal::Lower(row) => (row, 0),
            Diagonal::Upper(col) => (0, col),
        }
    }

    /// Offsets into the samples of the row-side and column-side factors of
    /// product `p[0]`.
    fn bases(self) -> (usize, usize) {
        match self {
            Diagonal::Lower(row) => (0, row),
            Diagonal::Upper(col) => (col, 0),
        }
    }
}

/// Buffers reused across every diagonal of one call.
struct DiagonalScratch {
    /// `p[m]` for the current diagonal
    products: Vec<f64>,
    /// Per-cell sums of the terms past the current run's split point
    tails: Vec<f64>,
}

impl DiagonalScratch {
    fn new(len: usize, count: usize) -> Self {
        Self {
            products: Vec::with_capacity(len),
            tails: vec![0.0; count + 1],
        }
    }

    fn load_products<T: Tally>(&mut self, samples: &[f32], diagonal: Diagonal, tally: &mut T) {
        let len = samples.len() - diagonal.lag();
        let (row_base, col_base) = diagonal.bases();

        self.products.clear();
        self.products.extend(
            samples[row_base..row_base + len]
                .iter()
                .zip(&samples[col_base..col_base + len])
                .map(|(&a, &b)| f64::from(a) * f64::from(b)),
        );
        tally.multiplies(len);
    }
}

impl DiagonalGenerator {
    fn fill<T: Tally>(samples: &[f32], count: usize, tally: &mut T) -> DMatrix<f32> {
        debug_assert!(samples.len() > count, "need more samples than count");

        let mut matrix = DMatrix::<f32>::zeros(count + 1, count + 1);
        let mut scratch = DiagonalScratch::new(samples.len(), count);

        // Lower triangle including the main diagonal, bottom-left corner first
        for row in (0..=count).rev() {
            Self::fill_diagonal(samples, count, Diagonal::Lower(row), &mut scratch, &mut matrix, tally);
        }

        // Upper triangle
        for col in 1..=count {
            Self::fill_diagonal(samples, count, Diagonal::Upper(col), &mut scratch, &mut matrix, tally);
        }

        matrix
    }

    /// Fills every cell of one diagonal.
    ///
    /// Cell `t` (at `start + (t, t)`) sums `p[head - t .. head - t + width)`
    /// where `head = count - lag` and `width = n - count`. All windows have the
    /// same width, so any run of at most `width + 1` consecutive cells shares
    /// the core `p[head - first .. split)`, with `split` the right end of the
    /// run's last window. Each cell's value is a left part (the core grown one
    /// term per step) plus a right tail past `split` (shrinking one term per
    /// step, accumulated backward from the run's end).
    fn fill_diagonal<T: Tally>(
        samples: &[f32],
        count: usize,
        diagonal: Diagonal,
        scratch: &mut DiagonalScratch,
        matrix: &mut DMatrix<f32>,
        tally: &mut T,
    ) {
        scratch.load_products(samples, diagonal, tally);
        let DiagonalScratch { products, tails } = scratch;

        let width = samples.len() - count;
        let head = count - diagonal.lag();
        let cells = head + 1;
        let (row, col) = diagonal.start();

        let mut runs = 0;
        let mut first = 0;
        while first < cells {
            let last = (first + width).min(cells - 1);
            let split = head - last + width;

            tails[last] = 0.0;
            for t in (first..last).rev() {
                tails[t] = tails[t + 1] + products[head - t + width - 1];
            }
            tally.additions(last - first);

            let core_start = head - first;
            let mut left: f64 = products[core_start..split].iter().sum();
            tally.additions(split - core_start);

            for t in first..=last {
                if t > first {
                    left += products[head - t];
                    tally.additions(1);
                }
                matrix[(row + t, col + t)] = (left + tails[t]) as f32;
            }
            tally.additions(last - first + 1);

            runs += 1;
            first = last + 1;
        }

        trace!(?diagonal, cells, runs, "filled diagonal");
    }
}

impl MatrixGenerator for DiagonalGenerator {
    fn name(&self) -> &'static str {
        "diagonal"
    }

    fn generate(&self, samples: &[f32], count: usize) -> DMatrix<f32> {
        Self::fill(samples, count, &mut NoTally)
    }

    fn generate_counted(&self, samples: &[f32], count: usize) -> (DMatrix<f32>, OpCounts) {
        let mut counts = OpCounts::default();
        let matrix = Self::fill(samples, count, &mut counts);
        (matrix, counts)
    }
}
