//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod check;
pub mod config;
pub mod scan;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;

use purge_core::scanner::LOG_TARGET;
use purge_core::Config;

/// purge-comments - delete comments containing risky words
#[derive(Debug, Parser)]
#[command(name = "purge-comments")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan comments and purge the risky ones
    Scan(scan::ScanArgs),

    /// Check a text against the word list
    Check(check::CheckArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose, cli.no_color);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.as_deref();

    // Dispatch to command handler
    match cli.command {
        Commands::Scan(args) => scan::execute(args, load_config(config_path)?),
        Commands::Check(args) => check::execute(args, load_config(config_path)?),
        Commands::Config(cmd) => config::execute(cmd, config_path),
    }
}

/// Load the effective configuration for a command
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::discover(path).context("Failed to load configuration")
}

fn setup_logging(verbosity: u8, no_color: bool) {
    use tracing_subscriber::EnvFilter;

    // Scan progress is always mirrored so an interrupted run can be resumed
    // from the last logged offset
    let filter = match verbosity {
        0 => EnvFilter::new(format!("warn,{}=info", LOG_TARGET)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();
}
