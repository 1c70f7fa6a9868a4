//! Montelab CLI - Command Line Operations for Monte Carlo Estimation
//!
//! This is the operational entry point for the montelab workspace.
//!
//! # Commands
//!
//! - `montelab estimate-pi` - Estimate π with a Student's-t confidence interval
//! - `montelab coin-toss` - Toss a fair coin and report outcome frequencies
//! - `montelab dice` - Roll a fair die and report the face histogram
//! - `montelab distribution` - Sample the three-class distribution and its CDF
//! - `montelab generators` - Run the classic generator demonstrations
//!
//! Running `montelab estimate-pi` with no flags reproduces the classic
//! lab experiment: seed key `{0x123, 0x234, 0x345, 0x456}`, 5 experiments
//! of 10 000 000 points each.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Parses a seed word, accepting decimal or 0x-prefixed hexadecimal.
fn parse_seed_word(value: &str) -> std::result::Result<u32, String> {
    let parsed = if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)
    } else {
        value.parse()
    };
    parsed.map_err(|_| format!("'{value}' is not a valid 32-bit seed word"))
}

/// Montelab Monte Carlo estimation CLI
#[derive(Parser)]
#[command(name = "montelab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate π with a Student's-t confidence interval
    EstimatePi {
        /// Number of repeated experiments
        #[arg(short, long, default_value = "5")]
        experiments: usize,

        /// Number of sampled points per experiment
        #[arg(short, long, default_value = "10000000")]
        points: usize,

        /// Seed key words for the Mersenne Twister (exactly four,
        /// decimal or 0x-prefixed hex); defaults to the classic lab key
        #[arg(short, long, num_args = 1.., value_parser = parse_seed_word)]
        seed: Option<Vec<u32>>,

        /// Divide squared deviations by the experiment count instead of
        /// the historical point-count divisor
        #[arg(long)]
        bessel: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Toss a fair coin and report outcome frequencies
    CoinToss {
        /// Number of tosses
        #[arg(short, long, default_value = "1000000")]
        trials: u64,

        /// Seed for the generator
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Roll a fair die and report the face histogram
    Dice {
        /// Number of rolls
        #[arg(short, long, default_value = "1000000")]
        trials: u64,

        /// Number of faces on the die
        #[arg(short, long, default_value = "10")]
        faces: usize,

        /// Seed for the generator
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Sample the three-class distribution and its empirical CDF
    Distribution {
        /// Number of draws
        #[arg(short, long, default_value = "1000")]
        trials: u64,

        /// Mean of the negative-exponential check
        #[arg(short, long, default_value = "11.0")]
        mean: f64,
    },

    /// Run the classic generator demonstrations
    Generators {
        /// Rounds per generator
        #[arg(short, long, default_value = "16")]
        rounds: usize,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::EstimatePi {
            experiments,
            points,
            seed,
            bessel,
            format,
        } => commands::estimate::run(experiments, points, seed.as_deref(), bessel, &format),
        Commands::CoinToss { trials, seed } => commands::toss::run(trials, seed),
        Commands::Dice {
            trials,
            faces,
            seed,
        } => commands::dice::run(trials, faces, seed),
        Commands::Distribution { trials, mean } => commands::distribution::run(trials, mean),
        Commands::Generators { rounds } => commands::generators::run(rounds),
    }
}
