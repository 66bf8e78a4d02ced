//! irm - command-line runner for interest-rate path simulations
//!
//! # Commands
//!
//! - `irm simulate [--config <file>] [--model <kind>]` - simulate and write CSV
//! - `irm defaults <kind>` - print a model's reference configuration as TOML
//! - `irm models` - list the supported models
//!
//! Logging goes to stderr and honours `RUST_LOG`; `--verbose` lowers the
//! default level to `debug`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod writer;

pub use error::{CliError, Result};

use commands::simulate::Overrides;
use config::ModelKind;

/// Interest-rate model path simulator
#[derive(Parser)]
#[command(name = "irm")]
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
    /// Simulate a model over a time grid and write the paths as CSV
    Simulate {
        /// Simulation configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Model to simulate; replaces the configured parameters if it differs
        #[arg(short, long, value_enum)]
        model: Option<ModelKind>,

        /// Random seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the reference configuration of a model
    Defaults {
        /// Model kind
        #[arg(value_enum)]
        model: ModelKind,
    },

    /// List the supported models
    Models,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Simulate {
            config,
            model,
            seed,
            output,
        } => commands::simulate::run(
            config.as_deref(),
            Overrides {
                model,
                seed,
                output,
            },
        ),
        Commands::Defaults { model } => commands::defaults::run(model),
        Commands::Models => commands::models::run(),
    }
}
