use lag_matrix::{DiagonalGenerator, MatrixGenerator, ReferenceGenerator};
use std::time::Instant;

fn main() {
    println!("=== Lag Matrix Benchmarks ===\n");

    let sizes = vec![300, 3_000, 30_000, 300_000];

    for size in sizes {
        println!("Benchmarking with {} samples:", size);

        let data: Vec<f32> = (0..size)
            .map(|i| {
                let x = i as f32 * 0.01;
                x.sin() + 0.5 * (2.0 * x).cos() + 0.1 * (5.0 * x).sin()
            })
            .collect();

        for count in [4, 16, 64] {
            // Warm up
            let _ = DiagonalGenerator.generate(&data[..(count + 100).min(size)], count);

            let start = Instant::now();
            let (_, ref_ops) = ReferenceGenerator.generate_counted(&data, count);
            let ref_duration = start.elapsed();

            let start = Instant::now();
            let (_, diag_ops) = DiagonalGenerator.generate_counted(&data, count);
            let diag_duration = start.elapsed();

            println!(
                "  count={:>3}: reference={:?} ({} mul), diagonal={:?} ({} mul)",
                count, ref_duration, ref_ops.multiplies, diag_duration, diag_ops.multiplies
            );
        }

        println!();
    }

    // Repeated calls on the benchmark size
    println!("Repeated calls:");
    let data: Vec<f32> = (0..300).map(|i| (i as f32 * 0.07).sin() * 0.03).collect();
    let start = Instant::now();
    for _ in 0..1000 {
        let _ = DiagonalGenerator.generate(&data, 4);
    }
    let total = start.elapsed();
    println!("  1000 runs of n=300, count=4: {:?}", total);
    println!("  Average per run: {:?}", total / 1000);
}
