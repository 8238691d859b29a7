//! Edit an existing post

use anyhow::Result;
use std::fs;

use super::new::PostArgs;
use crate::content::PostPatch;
use crate::Pressroom;

/// Patch any subset of fields on the post with the given id
///
/// Fields not passed on the command line keep their stored values. An id
/// with no matching post leaves the collection unchanged.
pub fn run(app: &Pressroom, post_id: u64, args: &PostArgs) -> Result<()> {
    let content = match (&args.content, &args.content_file) {
        (Some(content), _) => Some(content.clone()),
        (None, Some(path)) => Some(fs::read_to_string(path)?),
        (None, None) => None,
    };

    let patch = PostPatch {
        title: args.title.clone(),
        slug: args.slug.clone(),
        content,
        summary: args.summary.clone(),
        featured_image: args.featured_image.clone(),
        featured_image_description: args.featured_image_description.clone(),
        featured_image_credit: args.featured_image_credit.clone(),
        meta_title: args.meta_title.clone(),
        meta_description: args.meta_description.clone(),
        tags: if args.tags.is_empty() {
            None
        } else {
            Some(args.tags.clone())
        },
        featured: args.featured,
        language: args.language,
        related_posts: if args.related_posts.is_empty() {
            None
        } else {
            Some(args.related_posts.clone())
        },
    };

    app.repository().set_post(patch, Some(post_id))?;
    println!("Updated post {}", post_id);

    Ok(())
}
