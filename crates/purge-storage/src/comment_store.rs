//! File system storage for comments

use purge_core::error::{PurgeError, Result};
use purge_core::store::CommentStore;
use purge_core::types::{Comment, CommentId, PageRequest};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Schema version written to new documents
pub const CURRENT_SCHEMA_VERSION: &str = "1.0";

/// On-disk layout of a comment document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentFile {
    pub schema_version: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl CommentFile {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION.to_string(),
            comments,
        }
    }
}

/// Comment store backed by a single JSON document.
///
/// Every page is read from disk, so deletions made between pages are seen by
/// later fetches exactly as they would be in a live database.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open an existing comment document
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(PurgeError::StoreNotFound(path));
        }
        let store = Self { path };
        // Fail early on a malformed document
        store.read_file()?;
        Ok(store)
    }

    /// Write a new document holding `comments` and open it
    pub fn create(path: impl Into<PathBuf>, comments: Vec<Comment>) -> Result<Self> {
        let store = Self { path: path.into() };
        store.atomic_write(&CommentFile::new(comments))?;
        Ok(store)
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a temporary path for atomic writes
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("comments.json");
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    fn read_file(&self) -> Result<CommentFile> {
        let file = fs::File::open(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PurgeError::StoreNotFound(self.path.clone())
            } else {
                PurgeError::Io(e)
            }
        })?;

        let reader = BufReader::new(file);
        let comment_file: CommentFile = serde_json::from_reader(reader)?;

        if comment_file.schema_version != CURRENT_SCHEMA_VERSION {
            return Err(PurgeError::UnsupportedSchemaVersion(
                comment_file.schema_version,
            ));
        }
        Ok(comment_file)
    }

    /// Write the document atomically (write to temp, then rename)
    fn atomic_write(&self, file: &CommentFile) -> Result<()> {
        let temp_path = self.temp_path();

        let temp_file = fs::File::create(&temp_path).map_err(|e| {
            PurgeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, file)?;
        writer.flush()?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            PurgeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })?;

        debug!("Wrote {} comments to {:?}", file.comments.len(), self.path);
        Ok(())
    }
}

impl CommentStore for JsonFileStore {
    fn fetch_page(&self, request: PageRequest) -> Result<Vec<Comment>> {
        let file = self.read_file()?;
        Ok(file
            .comments
            .into_iter()
            .skip(request.offset)
            .take(request.limit)
            .collect())
    }

    fn delete_comment(&self, id: &CommentId) -> Result<bool> {
        let mut file = self.read_file()?;
        let before = file.comments.len();
        file.comments.retain(|c| &c.id != id);

        if file.comments.len() == before {
            return Ok(false);
        }

        self.atomic_write(&file)?;
        debug!("Deleted comment {} from {:?}", id, self.path);
        Ok(true)
    }

    fn count(&self) -> Result<usize> {
        Ok(self.read_file()?.comments.len())
    }
}
