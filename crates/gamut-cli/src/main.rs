//! gamut - compare gamut mapping methods
//!
//! Runs the comparison sweep, maps single colors and inspects the
//! edge-seeker lookup tables.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gamut")]
#[command(author, version, about = "Compare gamut mapping methods")]
#[command(long_about = "
Maps wide-gamut colors into displayable gamuts with several algorithms
and measures how far each one moves colors.

Examples:
  gamut sweep --delta 0.05                        # Full comparison, JSON on stdout
  gamut sweep --delta 0.1 --methods clip,chromium --targets p3,srgb
  gamut sweep --config sweep.yaml -o results.json --progress
  gamut map css --space oklch 0.9 0.4 250         # Map one color for Display P3
  gamut map raytrace --display srgb --space oklab 0.7 0.3 -0.1
  gamut methods                                   # List method keys
  gamut edge --gamut p3 0.7 145                   # Max chroma at L=0.7, h=145
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads for table construction (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the comparison sweep
    #[command(visible_alias = "s")]
    Sweep(SweepArgs),

    /// Map a single color with one method
    #[command(visible_alias = "m")]
    Map(MapArgs),

    /// List available methods
    Methods(MethodsArgs),

    /// Query an edge-seeker table
    Edge(EdgeArgs),
}

#[derive(Args)]
struct SweepArgs {
    /// Grid step on each XYZ axis
    #[arg(short, long)]
    delta: Option<f64>,

    /// Comma separated method keys
    #[arg(short, long, value_delimiter = ',')]
    methods: Option<Vec<String>>,

    /// Comma separated target gamuts: p3, srgb, rec2020
    #[arg(short, long, value_delimiter = ',')]
    targets: Option<Vec<String>>,

    /// Running mean divisor: sample-count, sequence-index
    #[arg(long)]
    divisor: Option<String>,

    /// YAML sweep config; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the final JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print progress snapshots to stderr
    #[arg(short, long)]
    progress: bool,
}

#[derive(Args)]
struct MapArgs {
    /// Method key (see `gamut methods`)
    method: String,

    /// Three coordinates in --space
    #[arg(num_args = 3, required = true, allow_hyphen_values = true)]
    coords: Vec<f64>,

    /// Input color space: oklch, oklab, lab, xyz, srgb, p3, rec2020, ...
    #[arg(short, long, default_value = "oklch")]
    space: String,

    /// Display gamut: p3, srgb, rec2020
    #[arg(short, long, default_value = "p3")]
    display: String,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct MethodsArgs {
    /// Display gamut the entries are built for
    #[arg(short, long, default_value = "p3")]
    display: String,
}

#[derive(Args)]
struct EdgeArgs {
    /// Gamut of the table: p3, srgb, rec2020
    #[arg(short, long, default_value = "p3")]
    gamut: String,

    /// Oklch lightness in [0, 1]
    lightness: f64,

    /// Oklch hue in degrees
    hue: f64,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Sweep(args) => commands::sweep::run(args),
        Commands::Map(args) => commands::map::run(args),
        Commands::Methods(args) => commands::methods::run(args),
        Commands::Edge(args) => commands::edge::run(args),
    }
}
