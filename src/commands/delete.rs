//! Delete a post

use anyhow::Result;

use crate::Pressroom;

/// Remove the post with the given id; absent ids are a quiet no-op
pub fn run(app: &Pressroom, post_id: u64) -> Result<()> {
    app.repository().delete_post(post_id)?;
    println!("Deleted post {}", post_id);

    Ok(())
}
