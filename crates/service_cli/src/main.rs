//! bsm - Black-Scholes-Merton option calculator
//!
//! Command-line entry point for pricing European vanilla options and
//! computing their Greeks.
//!
//! # Commands
//!
//! - `bsm price --input <file>` - Price an option book from a CSV or TOML file
//! - `bsm interactive` - Enter options at the prompt
//! - `bsm check` - Show configuration and run the engine self-test
//!
//! # Architecture
//!
//! As the service layer, this crate collects inputs, hands them to
//! `pricer_risk` for batch evaluation and presents or exports the results.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod input;
mod output;

pub use error::{CliError, Result};

use config::CliConfig;
use output::OutputFormat;

/// Black-Scholes-Merton option calculator
#[derive(Parser)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "bsm.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price an option book
    Price {
        /// Path to option file (CSV with type,S,K,T,r,sigma header, or TOML)
        #[arg(short, long)]
        input: PathBuf,

        /// Output format (defaults to table, or prices when show_greeks = false)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// CSV export path (overrides export_path from the configuration)
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Price in parallel once the book reaches parallel_threshold
        #[arg(short, long)]
        parallel: bool,
    },

    /// Enter options interactively
    Interactive,

    /// Check configuration and run the pricing self-test
    Check,
}

fn init_tracing(log_level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_with_env_and_validate(&cli.config)?;
    init_tracing(&config.log_level, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config_path = %cli.config.display(), ?config, "Configuration loaded");

    let stdout = std::io::stdout();
    match cli.command {
        Commands::Price {
            input,
            format,
            export,
            parallel,
        } => {
            let args = commands::price::PriceArgs {
                input,
                format,
                export,
                parallel,
            };
            commands::price::run(&args, &config, &mut stdout.lock()).map(|_| ())
        }
        Commands::Interactive => {
            commands::interactive::run(std::io::stdin().lock(), stdout.lock(), &config).map(|_| ())
        }
        Commands::Check => commands::check::run(&config, &cli.config, &mut stdout.lock()),
    }
}
