//! purge-core - Core library for comment-purge
//!
//! This crate provides the business logic for scanning a site's comments for
//! risky words and phrases: the word list matcher, the comment store
//! abstraction, the paginated scan loop and the deferred deletion pass.

pub mod error;
pub mod types;
pub mod config;
pub mod words;
pub mod store;
pub mod offset;
pub mod scanner;

pub use config::{Config, ScanConfig, StorageConfig};
pub use error::{PurgeError, Result};
pub use scanner::{Finding, NoopObserver, ScanObserver, ScanReport, ScanState, Scanner};
pub use store::CommentStore;
pub use types::*;
pub use words::{Match, WordList};
