//! Create a new post

use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::content::{Language, PostPatch, Tag};
use crate::validation::{self, PostForm};
use crate::Pressroom;

/// Post fields shared by `new` and `edit`
#[derive(Debug, Args)]
pub struct PostArgs {
    /// Post title
    #[arg(long)]
    pub title: Option<String>,

    /// URL slug; derived from the title when omitted
    #[arg(long)]
    pub slug: Option<String>,

    /// Post body
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read the post body from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Short summary
    #[arg(long)]
    pub summary: Option<String>,

    /// Featured image URL
    #[arg(long)]
    pub featured_image: Option<String>,

    /// Featured image description
    #[arg(long)]
    pub featured_image_description: Option<String>,

    /// Featured image credit
    #[arg(long)]
    pub featured_image_credit: Option<String>,

    /// SEO title
    #[arg(long)]
    pub meta_title: Option<String>,

    /// SEO description
    #[arg(long)]
    pub meta_description: Option<String>,

    /// Tag as <id>:<name>, repeatable
    #[arg(long = "tag", value_parser = parse_tag)]
    pub tags: Vec<Tag>,

    /// Mark or unmark the post as featured
    #[arg(long)]
    pub featured: Option<bool>,

    /// Post language (en, de, fr)
    #[arg(long)]
    pub language: Option<Language>,

    /// Related post id, repeatable
    #[arg(long = "related")]
    pub related_posts: Vec<u64>,
}

/// Parse a `<id>:<name>` tag argument
fn parse_tag(value: &str) -> Result<Tag, String> {
    let (id, name) = value
        .split_once(':')
        .ok_or_else(|| format!("expected <id>:<name>, got '{}'", value))?;
    let id: u64 = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid tag id '{}'", id))?;
    if name.trim().is_empty() {
        return Err(format!("empty tag name in '{}'", value));
    }
    Ok(Tag {
        id,
        name: name.trim().to_string(),
    })
}

/// Create a post from command-line fields
///
/// The submission is validated first; rejections print one message per
/// offending field.
pub fn run(app: &Pressroom, args: &PostArgs) -> Result<()> {
    let title = args.title.clone().unwrap_or_default();
    let slug = match &args.slug {
        Some(slug) => slug.clone(),
        None => slug::slugify(&title),
    };
    let content = match (&args.content, &args.content_file) {
        (Some(content), _) => content.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => String::new(),
    };
    let language = args.language.unwrap_or(app.config.language);

    let form = PostForm {
        title: title.clone(),
        slug: slug.clone(),
        content: content.clone(),
        summary: args.summary.clone(),
        featured_image: args.featured_image.clone(),
        featured_image_description: args.featured_image_description.clone(),
        featured_image_credit: args.featured_image_credit.clone(),
        meta_title: args.meta_title.clone(),
        meta_description: args.meta_description.clone(),
        tags: args.tags.iter().map(|tag| tag.id).collect(),
        featured: args.featured,
        language,
        related_posts: related_ids(args),
    };

    if let Err(errors) = validation::validate_post(&form) {
        eprintln!("Post rejected:");
        for error in &errors {
            eprintln!("  {}: {}", error.field, error.message);
        }
        anyhow::bail!("validation failed with {} error(s)", errors.len());
    }

    let patch = PostPatch {
        title: Some(title),
        slug: Some(slug.clone()),
        content: Some(content),
        summary: args.summary.clone(),
        featured_image: args.featured_image.clone(),
        featured_image_description: args.featured_image_description.clone(),
        featured_image_credit: args.featured_image_credit.clone(),
        meta_title: args.meta_title.clone(),
        meta_description: args.meta_description.clone(),
        tags: Some(args.tags.clone()),
        featured: args.featured,
        language: Some(language),
        related_posts: related_ids(args),
    };

    app.repository().set_post(patch, None)?;
    println!("Created post '{}'", slug);

    Ok(())
}

fn related_ids(args: &PostArgs) -> Option<Vec<u64>> {
    if args.related_posts.is_empty() {
        None
    } else {
        Some(args.related_posts.clone())
    }
}
