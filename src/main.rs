use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use lag_matrix::{read_samples, write_matrix, Algorithm, LagMatrixError, MatrixConfig, DEFAULT_DIGITS};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Exit status for arguments clap cannot parse, same as failed validation.
const EXIT_INVALID_ARGUMENT: u8 = 1;

#[derive(Parser)]
#[command(
    name = "lagmatrix",
    version,
    about = "Compute the lagged product-sum matrix of a sample file",
    after_help = "Example: lagmatrix -c 4 -n 300 -f test.prn"
)]
struct Cli {
    /// Size parameter; the matrix has count + 1 rows and columns
    #[arg(short = 'c', long)]
    count: usize,

    /// Number of input values to read
    #[arg(short = 'n', long)]
    length: usize,

    /// Input file with one value per line
    #[arg(short = 'f', long = "file")]
    input: PathBuf,

    /// Use the reference (cell-by-cell) generator instead of the diagonal one
    #[arg(short = 'u', long)]
    unoptimized: bool,

    /// Fraction digits printed per cell
    #[arg(long, default_value_t = DEFAULT_DIGITS)]
    digits: usize,
}

fn run(cli: Cli) -> Result<()> {
    let algorithm = if cli.unoptimized {
        Algorithm::Reference
    } else {
        Algorithm::Optimized
    };
    let config = MatrixConfig::new(cli.count, cli.length, cli.input)?
        .with_algorithm(algorithm)
        .with_digits(cli.digits);

    let samples = read_samples(config.input(), config.length)
        .with_context(|| format!("failed to load {}", config.input().display()))?;

    let generator = config.algorithm.generator();
    debug!(generator = generator.name(), count = config.count, samples = samples.len(), "generating matrix");

    let (matrix, counts) = generator.generate_counted(&samples, config.count);
    info!(
        generator = generator.name(),
        multiplies = counts.multiplies,
        additions = counts.additions,
        "matrix generated"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_matrix(&mut out, &matrix, config.digits).context("failed to write matrix")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    // WARN unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too and go to stdout
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_INVALID_ARGUMENT)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            let code = err
                .downcast_ref::<LagMatrixError>()
                .map(LagMatrixError::exit_code)
                .unwrap_or(255);
            ExitCode::from(code)
        }
    }
}
