//! Command-line entry point: derive sheets and resolve damage from files.
//!
//! Results are printed to stdout as JSON; logs go to stderr.
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Damage, Derive, Roll};
use config::CliConfig;
use tracing_subscriber::EnvFilter;

/// Derived-stat engine for character sheets
#[derive(Parser)]
#[command(name = "sheet-cli")]
#[command(about = "Recompute character sheets and apply damage", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Recompute a sheet and print it
    Derive(Derive),

    /// Apply a damage batch to a sheet and print the outcome
    Damage(Damage),

    /// Prepare a test or substitute bonuses into a damage formula
    Roll(Roll),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Derive(cmd) => cmd.execute(&config),
        Command::Damage(cmd) => cmd.execute(&config),
        Command::Roll(cmd) => cmd.execute(&config),
    }
}
