//! purge-comments - risky comment scanner CLI
//!
//! Scans a site's comments for words and phrases an advertiser deems risky
//! and deletes the flagged comments once the scan is complete.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default configuration (simulation mode)
//! purge-comments config init
//!
//! # Report risky comments without deleting anything
//! purge-comments scan
//!
//! # Resume from a logged offset
//! purge-comments scan 1200
//!
//! # Check a single text against the word list
//! purge-comments check "some comment text"
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
