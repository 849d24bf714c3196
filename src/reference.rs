use nalgebra::DMatrix;

use crate::generator::{MatrixGenerator, NoTally, OpCounts, Tally};

/// Evaluates the defining sum directly, one cell at a time.
///
/// Every cell runs its own inner loop over the summation index, so a
/// `(count + 1)^2` matrix over `n` samples costs `(count + 1)^2 * (n - count)`
/// multiply-adds. Nothing is shared between cells; this is the oracle the
/// diagonal generator is checked against.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceGenerator;

impl ReferenceGenerator {
    fn fill<T: Tally>(samples: &[f32], count: usize, tally: &mut T) -> DMatrix<f32> {
        debug_assert!(samples.len() > count, "need more samples than count");

        let n = samples.len();
        let mut matrix = DMatrix::<f32>::zeros(count + 1, count + 1);

        for k in 0..=count {
            for j in 0..=count {
                let mut sum = 0.0f64;

                for i in count..n {
                    sum += f64::from(samples[i - k]) * f64::from(samples[i - j]);
                }
                tally.multiplies(n - count);
                tally.additions(n - count);

                matrix[(k, j)] = sum as f32;
            }
        }

        matrix
    }
}

impl MatrixGenerator for ReferenceGenerator {
    fn name(&self) -> &'static str {
        "reference"
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hand_computed_values() {
        // s = 1..=5, count = 2: sums run over i = 2, 3, 4
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0];
        let m = ReferenceGenerator.generate(&samples, 2);

        let expected = [
            [50.0, 38.0, 26.0],
            [38.0, 29.0, 20.0],
            [26.0, 20.0, 14.0],
        ];
        for k in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(m[(k, j)], expected[k][j], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_zero_count_is_sum_of_squares() {
        let samples = [0.5, -1.5, 2.0];
        let m = ReferenceGenerator.generate(&samples, 0);

        assert_eq!(m.shape(), (1, 1));
        assert_abs_diff_eq!(m[(0, 0)], 0.25 + 2.25 + 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_counts_every_cell_independently() {
        let samples: Vec<f32> = (0..300).map(|i| (i as f32 * 0.01).sin()).collect();
        let (_, counts) = ReferenceGenerator.generate_counted(&samples, 4);

        assert_eq!(counts.multiplies, 7400);
        assert_eq!(counts.additions, 7400);
    }
}
