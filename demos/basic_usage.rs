//! Example usage of the lag matrix crate

use lag_matrix::{format_matrix, lag_matrix, Algorithm, MatrixGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Lag Matrix Examples ===\n");

    // A short damped oscillation
    let samples: Vec<f32> = (0..40)
        .map(|i| {
            let x = i as f32 * 0.2;
            (-0.05 * x).exp() * (2.0 * std::f32::consts::PI * 0.3 * x).sin()
        })
        .collect();

    // Example 1: convenience function
    println!("1. Diagonal generator, count = 3:");
    let m = lag_matrix(&samples, 3);
    print!("{}", format_matrix(&m, 6));

    // Example 2: picking a generator at runtime
    println!("\n2. Reference generator, count = 3:");
    let reference = Algorithm::Reference.generator();
    let r = reference.generate(&samples, 3);
    print!("{}", format_matrix(&r, 6));

    let max_diff = m
        .iter()
        .zip(r.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f32, f32::max);
    println!("max |diagonal - reference| = {:e}", max_diff);

    // Example 3: arithmetic cost
    println!("\n3. Operation counts, count = 3:");
    for algorithm in [Algorithm::Reference, Algorithm::Optimized] {
        let generator = algorithm.generator();
        let (_, counts) = generator.generate_counted(&samples, 3);
        println!(
            "  {:>9}: {} multiplies, {} additions",
            generator.name(),
            counts.multiplies,
            counts.additions
        );
    }

    Ok(())
}
