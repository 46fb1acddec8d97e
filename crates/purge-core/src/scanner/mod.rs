//! Paginated scan and deferred deletion
//!
//! A run has two phases. The scan pages through the store from a starting
//! offset until an empty page comes back, flagging every comment that
//! contains a needle. Only after that, and only in live mode, the flagged
//! comments are deleted. Deleting while paging would shift later pages and
//! skip comments.
//!
//! # Example
//!
//! ```ignore
//! use purge_core::{Scanner, ScanConfig, WordList};
//!
//! let words = WordList::new(["alcohol", " ass "]);
//! let scanner = Scanner::new(&store, &words, ScanConfig::default());
//! let report = scanner.run(0, &mut observer)?;
//! println!("{} risky comments found", report.hits);
//! ```

mod observer;
mod state;

pub use observer::{Finding, NoopObserver, ScanObserver};
#[cfg(test)]
pub use observer::RecordingObserver;
pub use state::{ScanPhase, ScanState};

use crate::config::ScanConfig;
use crate::error::{PurgeError, Result};
use crate::store::CommentStore;
use crate::types::{PageRequest, RunMode};
use crate::words::WordList;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Log target for scan events
pub const LOG_TARGET: &str = "purge_comments";

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub mode: RunMode,
    pub start_offset: usize,
    /// Offset after the last non-empty page
    pub end_offset: usize,
    pub pages_fetched: usize,
    pub checked: usize,
    pub hits: usize,
    pub deleted: usize,
    /// Queued comments that were already gone at deletion time
    pub missing: usize,
}

/// Scanner over one comment store
pub struct Scanner<'a, S: CommentStore + ?Sized> {
    store: &'a S,
    words: &'a WordList,
    config: ScanConfig,
}

impl<'a, S: CommentStore + ?Sized> Scanner<'a, S> {
    pub fn new(store: &'a S, words: &'a WordList, config: ScanConfig) -> Self {
        Self {
            store,
            words,
            config,
        }
    }

    pub fn mode(&self) -> RunMode {
        self.config.mode
    }

    /// Page through the store from `start_offset` until an empty page.
    ///
    /// Store errors abort the scan. The returned state is [`ScanPhase::Done`]
    /// and, in live mode, holds the ids queued for deletion.
    pub fn scan(&self, start_offset: usize, observer: &mut dyn ScanObserver) -> Result<ScanState> {
        let prefix = &self.config.log_prefix;
        let page_size = self.config.page_size.max(1);
        let mut state = ScanState::new(start_offset, page_size, self.config.mode);

        if self.words.is_empty() {
            warn!(target: LOG_TARGET, "{}: word list is empty, nothing will match", prefix);
        }
        info!(
            target: LOG_TARGET,
            "{}: scanning from offset {} in {} mode", prefix, start_offset, self.config.mode
        );

        while !state.is_done() {
            let request = PageRequest::new(page_size, state.offset);
            let page = self.store.fetch_page(request).map_err(|e| {
                e.with_context(format!("Failed to fetch comments at offset {}", request.offset))
            })?;
            debug!("Fetched {} comments at offset {}", page.len(), request.offset);

            for comment in &page {
                let Some(found) = self.words.find(&comment.content) else {
                    continue;
                };
                state.record_hit(&comment.id);

                let finding = Finding {
                    id: &comment.id,
                    needle: found.needle,
                    content: &comment.content,
                };
                if self.config.mode.is_live() {
                    info!(
                        target: LOG_TARGET,
                        "{}: queued {} for deletion (found {:?})", prefix, comment.id, found.needle
                    );
                } else {
                    info!(target: LOG_TARGET, "{}: Would have deleted {}", prefix, comment.id);
                }
                observer.on_hit(&finding, self.config.mode);
            }

            state.finish_page(page.len());
            if !state.is_done() {
                info!(
                    target: LOG_TARGET,
                    "{}: {} comments checked so far", prefix, state.offset
                );
                observer.on_page(state.offset);
            }
        }

        observer.on_scan_done(state.hit_count, state.pending_deletion_ids().len());
        Ok(state)
    }

    /// Delete every queued comment of a finished scan and report.
    ///
    /// Does nothing to the store in simulation mode.
    pub fn purge(&self, mut state: ScanState, observer: &mut dyn ScanObserver) -> Result<ScanReport> {
        if !state.is_done() {
            return Err(PurgeError::ScanIncomplete(state.offset));
        }

        let prefix = &self.config.log_prefix;
        let mut deleted = 0;
        let mut missing = 0;

        if state.mode().is_live() {
            for id in state.take_pending() {
                let removed = self
                    .store
                    .delete_comment(&id)
                    .map_err(|e| e.with_context(format!("Failed to delete comment {}", id)))?;
                if removed {
                    deleted += 1;
                    debug!("Deleted comment {}", id);
                    observer.on_deleted(&id);
                } else {
                    missing += 1;
                    warn!(target: LOG_TARGET, "{}: comment {} was already gone", prefix, id);
                }
            }
        }

        let report = ScanReport {
            mode: state.mode(),
            start_offset: state.start_offset,
            end_offset: state.offset,
            pages_fetched: state.pages_fetched,
            checked: state.checked,
            hits: state.hit_count,
            deleted,
            missing,
        };

        info!(target: LOG_TARGET, "{}: {} risky comments found", prefix, report.hits);
        info!(target: LOG_TARGET, "{}: {} risky comments deleted", prefix, report.deleted);
        observer.on_complete(&report);
        Ok(report)
    }

    /// Report a finished scan without deleting anything, e.g. when the
    /// operator declines the deletion pass
    pub fn report_only(&self, mut state: ScanState, observer: &mut dyn ScanObserver) -> Result<ScanReport> {
        let dropped = state.take_pending().len();
        if dropped > 0 {
            info!(
                target: LOG_TARGET,
                "{}: deletion of {} comments skipped", self.config.log_prefix, dropped
            );
        }
        self.purge(state, observer)
    }

    /// Scan, then delete
    pub fn run(&self, start_offset: usize, observer: &mut dyn ScanObserver) -> Result<ScanReport> {
        let state = self.scan(start_offset, observer)?;
        self.purge(state, observer)
    }
}
