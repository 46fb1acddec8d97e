//! Word list files
//!
//! Two formats are accepted. A `.toml` file holds a `words` array. Any other
//! file is read line by line: each line is one needle, kept verbatim apart
//! from a trailing carriage return, so leading and trailing spaces count.
//! Blank lines and lines starting with `#` are skipped.

use purge_core::error::{PurgeError, Result};
use purge_core::words::WordList;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct WordsToml {
    #[serde(default)]
    words: Vec<String>,
}

/// Parse the line-based format
pub fn parse_word_lines(content: &str) -> WordList {
    WordList::new(
        content
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.trim().is_empty() && !line.starts_with('#')),
    )
}

/// Parse the TOML format
pub fn parse_word_toml(content: &str) -> Result<WordList> {
    let parsed: WordsToml = toml::from_str(content)?;
    Ok(WordList::new(parsed.words))
}

/// Load a word list.
///
/// A missing file yields an empty list that matches nothing.
pub fn load_word_list(path: &Path) -> Result<WordList> {
    if !path.exists() {
        warn!("Word list {:?} not found, no comment will be flagged", path);
        return Ok(WordList::empty());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        PurgeError::Io(e).with_context(format!("Failed to read word list {}", path.display()))
    })?;

    let words = if path.extension().map(|e| e == "toml").unwrap_or(false) {
        parse_word_toml(&content)
            .map_err(|e| e.with_context(format!("Invalid word list {}", path.display())))?
    } else {
        parse_word_lines(&content)
    };

    debug!("Loaded {} needles from {:?}", words.len(), path);
    Ok(words)
}
