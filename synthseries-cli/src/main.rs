//! SynthSeries CLI — time sampling and series generation commands.
//!
//! Commands:
//! - `time` — print a regular or irregular timestamp sequence, one per line
//! - `generate` — sample a series described by a TOML config as CSV or JSON

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use synthseries_core::{GeneratedSeries, SamplingMode, SeriesConfig, TimeSampler};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "synthseries",
    about = "SynthSeries CLI — synthetic time series from signal and noise generators"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print sampled timestamps, one per line.
    Time {
        /// Interval start.
        #[arg(long, default_value_t = 0.0)]
        start: f64,

        /// Interval stop.
        #[arg(long, default_value_t = 10.0)]
        stop: f64,

        /// Number of grid points (inclusive of both ends).
        #[arg(long)]
        num_points: Option<usize>,

        /// Grid spacing (stop excluded). Takes priority over --num-points.
        #[arg(long)]
        resolution: Option<f64>,

        /// Percentage of grid points retained in irregular mode.
        #[arg(long, default_value_t = 100)]
        keep_percentage: u32,

        /// Sampling mode: regular or irregular.
        #[arg(long, default_value = "regular")]
        how: String,

        /// RNG seed for irregular sampling.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Generate a series from a TOML config file.
    Generate {
        /// Path to a TOML config file.
        #[arg(long)]
        config: PathBuf,

        /// Override the master seed from the config.
        #[arg(long)]
        seed: Option<u64>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Output file. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

/// One CSV row: a timestamp and its sample triple.
#[derive(Serialize)]
struct Row {
    time: f64,
    sample: f64,
    signal: f64,
    noise: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Time {
            start,
            stop,
            num_points,
            resolution,
            keep_percentage,
            how,
            seed,
        } => run_time(start, stop, num_points, resolution, keep_percentage, &how, seed),
        Commands::Generate {
            config,
            seed,
            format,
            output,
        } => run_generate(&config, seed, format, output.as_deref()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_time(
    start: f64,
    stop: f64,
    num_points: Option<usize>,
    resolution: Option<f64>,
    keep_percentage: u32,
    how: &str,
    seed: u64,
) -> Result<()> {
    let mode: SamplingMode = how.parse()?;
    let mut sampler = TimeSampler::seeded(start, stop, seed)?;
    let times = sampler.sample_time(num_points, resolution, keep_percentage, mode)?;
    info!(points = times.len(), %mode, "sampled timestamps");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for t in times {
        writeln!(out, "{t}")?;
    }
    out.flush()?;
    Ok(())
}

fn run_generate(
    config_path: &Path,
    seed: Option<u64>,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let mut config = SeriesConfig::load(config_path)?;
    if let Some(seed) = seed {
        config.seed = seed;
    }

    let generated = config
        .generate()
        .with_context(|| format!("generating series from {}", config_path.display()))?;
    info!(
        points = generated.times.len(),
        seed = config.seed,
        "generated series"
    );

    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match format {
        OutputFormat::Csv => write_csv(sink, &generated),
        OutputFormat::Json => write_json(sink, &generated),
    }
}

fn write_csv(sink: Box<dyn Write>, generated: &GeneratedSeries) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    for (&time, triple) in generated.times.iter().zip(generated.series.iter()) {
        writer.serialize(Row {
            time,
            sample: triple.combined,
            signal: triple.signal,
            noise: triple.noise,
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(mut sink: Box<dyn Write>, generated: &GeneratedSeries) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, generated)?;
    writeln!(sink)?;
    sink.flush()?;
    Ok(())
}
