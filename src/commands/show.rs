//! Show a single post

use anyhow::Result;

use crate::query;
use crate::Pressroom;

/// Print one post by slug
pub fn run(app: &Pressroom, slug: &str) -> Result<()> {
    let repo = app.repository();

    let Some(post) = repo.single_post(slug)? else {
        println!("No post with slug '{}'", slug);
        return Ok(());
    };

    println!("#{} {}", post.id, post.title);
    println!(
        "slug: {}  language: {}  featured: {}",
        post.slug, post.language, post.featured
    );
    if let Some(summary) = &post.summary {
        println!("summary: {}", summary);
    }
    if !post.tags.is_empty() {
        let names: Vec<&str> = post.tags.iter().map(|tag| tag.name.as_str()).collect();
        println!("tags: {}", names.join(", "));
    }
    println!("read time: {} min", query::read_time(&post.content));

    if !post.related_posts.is_empty() {
        let related = repo.related_posts(&post.related_posts)?;
        println!("related:");
        for related_post in related {
            println!(
                "  #{:<4} {} [{}]",
                related_post.id, related_post.title, related_post.slug
            );
        }
    }

    println!();
    println!("{}", post.content);

    Ok(())
}
