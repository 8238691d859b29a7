//! File-backed post store

use std::fs;
use std::path::{Path, PathBuf};

use super::{PostStore, StoreError};
use crate::content::Post;

/// Post collection stored as one JSON document on disk
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store over the given file path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PostStore for FileStore {
    fn read_all(&self) -> Result<Vec<Post>, StoreError> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, posts: &[Post]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(posts)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
