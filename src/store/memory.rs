//! In-memory post store for tests and ephemeral tooling

use std::cell::RefCell;

use super::{PostStore, StoreError};
use crate::content::Post;

/// Post collection held in memory
#[derive(Default)]
pub struct MemoryStore {
    posts: RefCell<Vec<Post>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with posts
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RefCell::new(posts),
        }
    }
}

impl PostStore for MemoryStore {
    fn read_all(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.borrow().clone())
    }

    fn write_all(&self, posts: &[Post]) -> Result<(), StoreError> {
        *self.posts.borrow_mut() = posts.to_vec();
        Ok(())
    }
}
