//! Config command
//!
//! Show or create the comment-purge configuration.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use purge_core::config::CONFIG_FILE_NAME;
use purge_core::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, path: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(path, json),
        ConfigCommand::Init { force } => init_config(path, force),
    }
}

fn show_config(path: Option<&Path>, as_json: bool) -> Result<()> {
    let config = super::load_config(path)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", "Configuration:".bold().underline());
        println!();
        print!("{}", config.to_toml()?);
    }

    Ok(())
}

fn init_config(path: Option<&Path>, force: bool) -> Result<()> {
    let target = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    if target.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            target.display()
        );
    }

    let content = Config::default().to_toml()?;
    fs::write(&target, content)
        .context(format!("Failed to write {}", target.display()))?;

    println!("{} Wrote {}", "✓".green(), target.display());
    println!(
        "  Mode is {}. Set {} to delete comments.",
        "simulation".green(),
        "scan.mode = \"live\"".cyan()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("purge.toml");

        init_config(Some(&path), false).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("purge.toml");
        fs::write(&path, "[scan]\nmode = \"live\"\n").unwrap();

        assert!(init_config(Some(&path), false).is_err());
        init_config(Some(&path), true).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }
}
