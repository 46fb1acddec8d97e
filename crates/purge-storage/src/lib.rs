//! purge-storage - Storage library for comment-purge
//!
//! This crate provides the file-backed comment store and word list loading.

mod comment_store;
mod word_file;

pub use comment_store::{CommentFile, JsonFileStore, CURRENT_SCHEMA_VERSION};
pub use word_file::{load_word_list, parse_word_lines, parse_word_toml};
