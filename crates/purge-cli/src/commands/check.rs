//! Check command
//!
//! Run the word list against a single text, e.g. to vet a new needle.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use purge_core::Config;
use purge_storage::load_word_list;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Text to check
    pub text: String,

    /// Word list file (overrides the configuration)
    #[arg(long)]
    pub words: Option<PathBuf>,
}

/// Execute the check command
pub fn execute(args: CheckArgs, config: Config) -> Result<()> {
    let path = args.words.unwrap_or(config.storage.words_path);
    let words = load_word_list(&path)?;

    match words.find(&args.text) {
        Some(found) => println!(
            "{} Found the word {} at position {}",
            "✗".red(),
            format!("{:?}", found.needle).bold(),
            found.position
        ),
        None => println!(
            "{} No risky words found ({} needles checked)",
            "✓".green(),
            words.len()
        ),
    }

    Ok(())
}
