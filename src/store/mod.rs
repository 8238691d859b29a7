//! Post collection persistence
//!
//! The collection is one JSON array read and written wholesale; there is no
//! partial or streamed access. Implementations are synchronous and carry no
//! locking discipline: writers racing a read-modify-write cycle lose updates
//! at whole-collection granularity.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::content::Post;

/// Error raised by post store implementations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("post store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The collection could not be parsed or serialized
    #[error("post collection is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Access to the persisted post collection
pub trait PostStore {
    /// Load and parse the entire collection
    fn read_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Serialize and overwrite the entire collection
    fn write_all(&self, posts: &[Post]) -> Result<(), StoreError>;
}
