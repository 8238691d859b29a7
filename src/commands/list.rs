//! List site content

use anyhow::Result;

use crate::query::PageRequest;
use crate::Pressroom;

/// List site content by type
pub fn run(
    app: &Pressroom,
    content_type: &str,
    page: usize,
    limit: usize,
    tag: Option<&str>,
) -> Result<()> {
    let repo = app.repository();

    match content_type {
        "post" | "posts" => {
            let request = PageRequest { page, limit };
            let listing = match tag {
                Some(tag) => repo.posts_by_tag(tag, request)?,
                None => repo.all_posts(request)?,
            };

            println!(
                "Posts (page {}/{}, {} total):",
                listing.page, listing.total_pages, listing.total_posts
            );
            for post in &listing.posts {
                let marker = if post.featured { "*" } else { " " };
                println!("  {} #{:<4} {} [{}]", marker, post.id, post.title, post.slug);
            }
        }
        "tag" | "tags" => {
            let tags = repo.all_tags()?;
            println!("Tags ({}):", tags.len());
            for tag in tags {
                println!("  #{:<4} {}", tag.id, tag.name);
            }
        }
        "featured" => {
            let posts = repo.featured_posts()?;
            println!("Featured posts ({}):", posts.len());
            for post in posts {
                println!("  #{:<4} {} [{}]", post.id, post.title, post.slug);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, tag, featured",
                content_type
            );
        }
    }

    Ok(())
}
