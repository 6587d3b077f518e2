//! Command-line interface for dfu-synth
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate 500 patients with the literature defaults
//! dfu-synth generate --count 500 --seed 42 --output patients.csv
//!
//! # Override distribution parameters from a YAML file and write plain CSV
//! dfu-synth generate \
//!   --count 1000 \
//!   --config config.yaml \
//!   --output patients.csv \
//!   --delimiter , --decimal-dot
//! ```

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use csv_export::DatasetExporter;
use patient_generator::generate;
use std::path::PathBuf;
use synth_core::GenerationConfig;

mod summary;

use summary::DatasetSummary;

#[derive(Parser)]
#[command(name = "dfu-synth")]
#[command(about = "Synthetic diabetic-foot-ulcer patient dataset generator")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic patient dataset and write it as CSV
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
}

#[derive(Args, Clone, Debug)]
struct GenerateArgs {
    /// Number of patient records to generate
    #[arg(long, default_value = "500")]
    count: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Output CSV path
    #[arg(long, short = 'o', default_value = "patients.csv")]
    output: PathBuf,

    /// Path to generation config YAML (literature defaults when omitted)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// CSV field delimiter
    #[arg(long, default_value = ";")]
    delimiter: char,

    /// Write decimals with '.' instead of ','
    #[arg(long)]
    decimal_dot: bool,

    /// Skip the header row
    #[arg(long)]
    no_header: bool,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => run_generate(args),
    }
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => GenerationConfig::from_file(path)
            .with_context(|| format!("Failed to load generation config from {path:?}"))?,
        None => GenerationConfig::default(),
    };

    tracing::info!(
        "Generating {} patient records (seed={})",
        args.count,
        args.seed
    );

    let records = generate(args.count, args.seed, &config)?;

    let exporter = DatasetExporter::default()
        .with_delimiter(args.delimiter as u8)
        .with_decimal_comma(!args.decimal_dot)
        .with_header(!args.no_header);

    let metrics = exporter
        .export(&records, &args.output)
        .with_context(|| format!("Failed to write dataset to {:?}", args.output))?;

    tracing::info!(
        "Wrote {:?}: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
        args.output,
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    let summary = DatasetSummary::from_records(&records, config.thermal.asymmetry_threshold_c);
    tracing::info!(
        "High-risk patients: {} / {} ({:.1}%)",
        summary.high_risk,
        summary.total,
        summary.high_risk_share() * 100.0
    );
    if let Some(mean_asymmetry) = summary.mean_asymmetry_high_risk_c {
        tracing::info!(
            "Mean temperature asymmetry (high risk): {:.2} °C",
            mean_asymmetry
        );
        tracing::info!(
            "High-risk patients with critical asymmetry (> {} °C): {}",
            config.thermal.asymmetry_threshold_c,
            summary.critical_asymmetry_high_risk
        );
    }
    if let (Some(high), Some(low)) = (
        summary.mean_peak_left_high_risk_kpa,
        summary.mean_peak_left_low_risk_kpa,
    ) {
        tracing::info!("Mean peak pressure (high risk): {:.2} kPa", high);
        tracing::info!("Mean peak pressure (low risk): {:.2} kPa", low);
    }

    Ok(())
}
