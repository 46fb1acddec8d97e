//! Scan command
//!
//! Page through the comment store, report risky comments and, in live mode,
//! delete them once the whole store has been scanned.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use std::io::IsTerminal;
use std::path::PathBuf;

use purge_core::offset::resolve_start_offset;
use purge_core::{
    CommentId, Config, Finding, RunMode, ScanObserver, ScanReport, Scanner,
};
use purge_storage::{load_word_list, JsonFileStore};

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Offset to start from, e.g. the last one logged by an interrupted run.
    /// Non-integers are ignored.
    pub offset: Option<String>,

    /// Request query string; its `offset` parameter is used when no
    /// positional offset is given
    #[arg(long, env = "QUERY_STRING", hide_env_values = true)]
    pub query: Option<String>,

    /// Comment store document (overrides the configuration)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Word list file (overrides the configuration)
    #[arg(long)]
    pub words: Option<PathBuf>,

    /// Comments fetched per page (overrides the configuration)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,

    /// Delete without asking for confirmation (live mode only)
    #[arg(short, long)]
    pub yes: bool,

    /// Print the final report as JSON instead of progress lines
    #[arg(long)]
    pub json: bool,
}

/// Human-readable progress on stdout
struct ConsoleObserver {
    quiet: bool,
}

impl ScanObserver for ConsoleObserver {
    fn on_hit(&mut self, finding: &Finding<'_>, mode: RunMode) {
        if self.quiet || mode.is_live() {
            return;
        }
        println!(
            "Found the word {} in comment {}",
            format!("{:?}", finding.needle).bold(),
            finding.id.to_string().cyan()
        );
        println!();
        println!("{}", finding.content);
        println!("{}", "----".dimmed());
    }

    fn on_page(&mut self, offset: usize) {
        if !self.quiet {
            println!("{} comments checked so far", offset);
        }
    }

    fn on_deleted(&mut self, id: &CommentId) {
        tracing::debug!("Purged comment {}", id);
    }

    fn on_complete(&mut self, report: &ScanReport) {
        if self.quiet {
            return;
        }
        println!("{} risky comments found", report.hits.to_string().yellow());
        println!("{} risky comments deleted", report.deleted.to_string().red());
        if report.missing > 0 {
            println!(
                "{} flagged comments were already gone",
                report.missing.to_string().dimmed()
            );
        }
    }
}

/// Execute the scan command
pub fn execute(args: ScanArgs, mut config: Config) -> Result<()> {
    if let Some(store) = args.store {
        config.storage.store_path = store;
    }
    if let Some(words) = args.words {
        config.storage.words_path = words;
    }
    if let Some(page_size) = args.page_size {
        config.scan.page_size = usize::try_from(page_size).context("Page size too large")?;
    }

    let start_offset = resolve_start_offset(args.offset.as_deref(), args.query.as_deref());

    let words = load_word_list(&config.storage.words_path)?;
    let store = JsonFileStore::open(&config.storage.store_path).context(format!(
        "Failed to open comment store {}",
        config.storage.store_path.display()
    ))?;

    let mode = config.scan.mode;
    if !args.json {
        let label = match mode {
            RunMode::Simulation => "simulation".green(),
            RunMode::Live => "LIVE".red().bold(),
        };
        eprintln!(
            "Scanning {} from offset {} ({} mode, {} needles)",
            config.storage.store_path.display(),
            start_offset,
            label,
            words.len()
        );
    }

    let scanner = Scanner::new(&store, &words, config.scan);
    let mut observer = ConsoleObserver { quiet: args.json };

    let state = scanner.scan(start_offset, &mut observer)?;

    let pending = state.pending_deletion_ids().len();
    let report = if mode.is_live() && pending > 0 && !args.yes && !confirm_deletion(pending)? {
        eprintln!("{} Deletion cancelled, no comment was removed.", "ℹ".blue());
        scanner.report_only(state, &mut observer)?
    } else {
        scanner.purge(state, &mut observer)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn confirm_deletion(pending: usize) -> Result<bool> {
    use dialoguer::Confirm;

    if !std::io::stdin().is_terminal() {
        bail!(
            "{} comments are queued for deletion; pass --yes to delete without a prompt",
            pending
        );
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("Delete {} risky comments?", pending))
        .default(false)
        .interact()?;
    Ok(confirmed)
}
