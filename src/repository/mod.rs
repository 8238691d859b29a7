//! Queries and mutations over a post store
//!
//! Every operation loads the full collection from the store; mutations
//! transform it in memory and write the full collection back. Not-found
//! conditions resolve to `None` or a silent no-op, never an error.

use crate::content::{Post, PostPatch, Tag};
use crate::query::{self, Page, PageRequest};
use crate::store::{PostStore, StoreError};

/// Query and mutation front end over a [`PostStore`]
pub struct PostRepository<S> {
    store: S,
}

impl<S: PostStore> PostRepository<S> {
    /// Wrap a store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All posts, paginated
    pub fn all_posts(&self, request: PageRequest) -> Result<Page, StoreError> {
        let posts = self.store.read_all()?;
        Ok(query::paginate(posts, request))
    }

    /// Posts marked as featured, in store order
    pub fn featured_posts(&self) -> Result<Vec<Post>, StoreError> {
        let posts = self.store.read_all()?;
        Ok(posts.into_iter().filter(|post| post.featured).collect())
    }

    /// Posts carrying a tag whose name matches exactly, paginated
    pub fn posts_by_tag(&self, tag_name: &str, request: PageRequest) -> Result<Page, StoreError> {
        let posts = self.store.read_all()?;
        let tagged = posts
            .into_iter()
            .filter(|post| post.tags.iter().any(|tag| tag.name == tag_name))
            .collect();
        Ok(query::paginate(tagged, request))
    }

    /// Posts whose id appears in `ids`, in store order (not input order)
    pub fn related_posts(&self, ids: &[u64]) -> Result<Vec<Post>, StoreError> {
        let posts = self.store.read_all()?;
        Ok(posts
            .into_iter()
            .filter(|post| ids.contains(&post.id))
            .collect())
    }

    /// First post with the given slug, or `None`
    ///
    /// Slug collisions resolve to the first match in store order.
    pub fn single_post(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        let posts = self.store.read_all()?;
        Ok(posts.into_iter().find(|post| post.slug == slug))
    }

    /// Every distinct tag referenced by the collection, first-seen order
    pub fn all_tags(&self) -> Result<Vec<Tag>, StoreError> {
        let posts = self.store.read_all()?;
        Ok(query::unique_tags(&posts))
    }

    /// Insert or update a post.
    ///
    /// With `post_id`, the patch overwrites the provided fields of the
    /// matching post; an unmatched id rewrites the collection unchanged.
    /// Without `post_id`, a new post is appended with id = current count + 1.
    /// After a deletion that scheme can hand out an id that is still in use.
    pub fn set_post(&self, patch: PostPatch, post_id: Option<u64>) -> Result<(), StoreError> {
        let mut posts = self.store.read_all()?;

        match post_id {
            Some(id) => {
                if let Some(post) = posts.iter_mut().find(|post| post.id == id) {
                    patch.apply(post);
                    tracing::debug!("updated post {}", id);
                }
            }
            None => {
                let id = posts.len() as u64 + 1;
                posts.push(patch.into_post(id));
                tracing::debug!("created post {}", id);
            }
        }

        self.store.write_all(&posts)
    }

    /// Delete the post with the given id; silent no-op when absent
    pub fn delete_post(&self, post_id: u64) -> Result<(), StoreError> {
        let mut posts = self.store.read_all()?;
        posts.retain(|post| post.id != post_id);
        tracing::debug!("deleted post {}", post_id);
        self.store.write_all(&posts)
    }
}
