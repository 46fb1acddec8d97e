//! Scan bookkeeping

use crate::types::{CommentId, RunMode};

/// Phase of the scan loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Scanning,
    Done,
}

/// Mutable state of a single run
#[derive(Debug, Clone)]
pub struct ScanState {
    /// Offset of the next page to fetch
    pub offset: usize,
    /// Offset the run started from
    pub start_offset: usize,
    /// Comments fetched per page
    pub page_size: usize,
    /// Comments examined so far
    pub checked: usize,
    /// Flagged comments so far
    pub hit_count: usize,
    /// Pages fetched, including the final empty one
    pub pages_fetched: usize,
    /// Ids to delete once scanning is done; always empty in simulation
    pending_deletion_ids: Vec<CommentId>,
    phase: ScanPhase,
    mode: RunMode,
}

impl ScanState {
    pub fn new(start_offset: usize, page_size: usize, mode: RunMode) -> Self {
        Self {
            offset: start_offset,
            start_offset,
            page_size,
            checked: 0,
            hit_count: 0,
            pages_fetched: 0,
            pending_deletion_ids: Vec::new(),
            phase: ScanPhase::Scanning,
            mode,
        }
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn is_done(&self) -> bool {
        self.phase == ScanPhase::Done
    }

    pub fn pending_deletion_ids(&self) -> &[CommentId] {
        &self.pending_deletion_ids
    }

    /// Count a flagged comment, queueing it when running live
    pub fn record_hit(&mut self, id: &CommentId) {
        self.hit_count += 1;
        if self.mode.is_live() {
            self.pending_deletion_ids.push(id.clone());
        }
    }

    /// Account for a fetched page of `len` comments.
    ///
    /// An empty page ends the scan and leaves the offset untouched.
    pub fn finish_page(&mut self, len: usize) {
        self.pages_fetched += 1;
        if len == 0 {
            self.phase = ScanPhase::Done;
        } else {
            self.checked += len;
            self.offset += self.page_size;
        }
    }

    /// Hand over the deletion queue
    pub(crate) fn take_pending(&mut self) -> Vec<CommentId> {
        std::mem::take(&mut self.pending_deletion_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_never_queues() {
        let mut state = ScanState::new(0, 100, RunMode::Simulation);
        state.record_hit(&CommentId::from("1"));
        state.record_hit(&CommentId::from("2"));
        assert_eq!(state.hit_count, 2);
        assert!(state.pending_deletion_ids().is_empty());
    }

    #[test]
    fn test_live_queues_in_order() {
        let mut state = ScanState::new(0, 100, RunMode::Live);
        state.record_hit(&CommentId::from("b"));
        state.record_hit(&CommentId::from("a"));
        assert_eq!(
            state.pending_deletion_ids(),
            &[CommentId::from("b"), CommentId::from("a")]
        );
    }

    #[test]
    fn test_page_transitions() {
        let mut state = ScanState::new(50, 100, RunMode::Simulation);
        state.finish_page(100);
        assert_eq!(state.offset, 150);
        assert_eq!(state.phase(), ScanPhase::Scanning);

        state.finish_page(30);
        assert_eq!(state.offset, 250);
        assert_eq!(state.checked, 130);

        state.finish_page(0);
        assert!(state.is_done());
        assert_eq!(state.offset, 250);
        assert_eq!(state.pages_fetched, 3);
    }
}
