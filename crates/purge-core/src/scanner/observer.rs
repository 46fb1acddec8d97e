//! Scan event reporting

use super::ScanReport;
use crate::types::{CommentId, RunMode};

/// A flagged comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding<'a> {
    /// Flagged comment id
    pub id: &'a CommentId,
    /// Needle that triggered the flag
    pub needle: &'a str,
    /// Full comment body
    pub content: &'a str,
}

/// Receives scan events as they happen.
///
/// All methods default to doing nothing.
pub trait ScanObserver {
    /// A comment was flagged
    fn on_hit(&mut self, _finding: &Finding<'_>, _mode: RunMode) {}

    /// A page was processed; `offset` is the offset of the next page
    fn on_page(&mut self, _offset: usize) {}

    /// The scan loop reached its end and deletion is about to start
    fn on_scan_done(&mut self, _hits: usize, _pending: usize) {}

    /// A comment was deleted
    fn on_deleted(&mut self, _id: &CommentId) {}

    /// The run finished
    fn on_complete(&mut self, _report: &ScanReport) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Observer that records events for assertions
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    /// `(id, needle)` per hit
    pub hits: Vec<(CommentId, String)>,
    /// Progress offsets in order
    pub pages: Vec<usize>,
    /// Deleted ids in order
    pub deleted: Vec<CommentId>,
    /// Number of `on_scan_done` calls
    pub scan_done: usize,
    /// Final report
    pub report: Option<ScanReport>,
}

#[cfg(test)]
impl ScanObserver for RecordingObserver {
    fn on_hit(&mut self, finding: &Finding<'_>, _mode: RunMode) {
        self.hits.push((finding.id.clone(), finding.needle.to_string()));
    }

    fn on_page(&mut self, offset: usize) {
        self.pages.push(offset);
    }

    fn on_scan_done(&mut self, _hits: usize, _pending: usize) {
        self.scan_done += 1;
    }

    fn on_deleted(&mut self, id: &CommentId) {
        self.deleted.push(id.clone());
    }

    fn on_complete(&mut self, report: &ScanReport) {
        self.report = Some(report.clone());
    }
}
