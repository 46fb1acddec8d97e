//! Comment store abstraction

use crate::error::Result;
use crate::types::{Comment, CommentId, PageRequest};

/// Access to the host platform's comments
pub trait CommentStore: Send + Sync {
    /// Fetch up to `request.limit` comments starting at `request.offset`.
    ///
    /// Ordering must be stable between calls; an empty page means the end.
    fn fetch_page(&self, request: PageRequest) -> Result<Vec<Comment>>;

    /// Delete a comment. Returns `false` when no such comment exists.
    fn delete_comment(&self, id: &CommentId) -> Result<bool>;

    /// Total number of comments currently stored
    fn count(&self) -> Result<usize>;
}

/// In-memory store for tests
#[cfg(test)]
pub mod memory {
    use super::*;
    use crate::error::PurgeError;
    use std::sync::RwLock;

    /// A call observed by [`MemoryStore`]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum StoreCall {
        Fetch(PageRequest),
        Delete(CommentId),
    }

    /// In-memory comment store that records every call
    #[derive(Default)]
    pub struct MemoryStore {
        comments: RwLock<Vec<Comment>>,
        calls: RwLock<Vec<StoreCall>>,
        fail_at_offset: Option<usize>,
    }

    impl MemoryStore {
        /// Create a store holding `comments` in order
        pub fn new(comments: Vec<Comment>) -> Self {
            Self {
                comments: RwLock::new(comments),
                calls: RwLock::new(Vec::new()),
                fail_at_offset: None,
            }
        }

        /// Create a store of `n` comments produced by `content(i)`
        pub fn generate(n: usize, content: impl Fn(usize) -> String) -> Self {
            Self::new(
                (0..n)
                    .map(|i| Comment::new(CommentId::from(i as u64 + 1), content(i)))
                    .collect(),
            )
        }

        /// Make fetches at `offset` fail, simulating a lost connection
        pub fn failing_at(mut self, offset: usize) -> Self {
            self.fail_at_offset = Some(offset);
            self
        }

        /// Every call made so far, in order
        pub fn calls(&self) -> Vec<StoreCall> {
            self.calls.read().unwrap().clone()
        }

        /// Number of fetch calls made so far
        pub fn fetch_count(&self) -> usize {
            self.calls()
                .iter()
                .filter(|c| matches!(c, StoreCall::Fetch(_)))
                .count()
        }

        /// Ids deleted so far, in order
        pub fn deleted_ids(&self) -> Vec<CommentId> {
            self.calls()
                .into_iter()
                .filter_map(|c| match c {
                    StoreCall::Delete(id) => Some(id),
                    StoreCall::Fetch(_) => None,
                })
                .collect()
        }

        /// Ids still present
        pub fn remaining_ids(&self) -> Vec<CommentId> {
            self.comments
                .read()
                .unwrap()
                .iter()
                .map(|c| c.id.clone())
                .collect()
        }
    }

    impl CommentStore for MemoryStore {
        fn fetch_page(&self, request: PageRequest) -> Result<Vec<Comment>> {
            self.calls.write().unwrap().push(StoreCall::Fetch(request));
            if self.fail_at_offset == Some(request.offset) {
                return Err(PurgeError::Store("connection lost".to_string()));
            }
            let comments = self.comments.read().unwrap();
            Ok(comments
                .iter()
                .skip(request.offset)
                .take(request.limit)
                .cloned()
                .collect())
        }

        fn delete_comment(&self, id: &CommentId) -> Result<bool> {
            self.calls.write().unwrap().push(StoreCall::Delete(id.clone()));
            let mut comments = self.comments.write().unwrap();
            let before = comments.len();
            comments.retain(|c| &c.id != id);
            Ok(comments.len() < before)
        }

        fn count(&self) -> Result<usize> {
            Ok(self.comments.read().unwrap().len())
        }
    }
}
