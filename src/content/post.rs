//! Post, tag and language models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Store-assigned identifier
    pub id: u64,

    /// Post title
    pub title: String,

    /// URL-friendly identifier (intended unique, not enforced)
    pub slug: String,

    /// Rich-text body, stored verbatim
    pub content: String,

    /// Short summary
    #[serde(default)]
    pub summary: Option<String>,

    /// Featured image URL
    #[serde(default)]
    pub featured_image: Option<String>,

    #[serde(default)]
    pub featured_image_description: Option<String>,

    #[serde(default)]
    pub featured_image_credit: Option<String>,

    /// SEO title override
    #[serde(default)]
    pub meta_title: Option<String>,

    /// SEO description override
    #[serde(default)]
    pub meta_description: Option<String>,

    /// Ordered tag references
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Whether the post is featured on the front page
    #[serde(default)]
    pub featured: bool,

    /// Post language
    #[serde(default)]
    pub language: Language,

    /// Related post identifiers
    #[serde(default)]
    pub related_posts: Vec<u64>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(id: u64, title: String, slug: String) -> Self {
        Self {
            id,
            title,
            slug,
            content: String::new(),
            summary: None,
            featured_image: None,
            featured_image_description: None,
            featured_image_credit: None,
            meta_title: None,
            meta_description: None,
            tags: Vec::new(),
            featured: false,
            language: Language::default(),
            related_posts: Vec::new(),
        }
    }
}

/// A named label referenced by zero or more posts
///
/// Tags have no store of their own; they exist only as references inside
/// posts and are aggregated by scanning the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

/// Supported content languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
    Fr,
}

impl Language {
    /// Two-letter language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            "fr" => Ok(Language::Fr),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}

/// Error for unrecognized language codes
#[derive(Debug, thiserror::Error)]
#[error("unsupported language '{0}' (expected en, de or fr)")]
pub struct ParseLanguageError(String);

/// Partial post content for upserts
///
/// A present field overwrites the stored value; an absent field leaves the
/// stored value intact. A patch cannot clear an optional field back to
/// absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub featured_image: Option<String>,
    pub featured_image_description: Option<String>,
    pub featured_image_credit: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub tags: Option<Vec<Tag>>,
    pub featured: Option<bool>,
    pub language: Option<Language>,
    pub related_posts: Option<Vec<u64>>,
}

impl PostPatch {
    /// Overwrite the provided fields of an existing post
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(slug) = self.slug {
            post.slug = slug;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(summary) = self.summary {
            post.summary = Some(summary);
        }
        if let Some(featured_image) = self.featured_image {
            post.featured_image = Some(featured_image);
        }
        if let Some(description) = self.featured_image_description {
            post.featured_image_description = Some(description);
        }
        if let Some(credit) = self.featured_image_credit {
            post.featured_image_credit = Some(credit);
        }
        if let Some(meta_title) = self.meta_title {
            post.meta_title = Some(meta_title);
        }
        if let Some(meta_description) = self.meta_description {
            post.meta_description = Some(meta_description);
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
        if let Some(featured) = self.featured {
            post.featured = featured;
        }
        if let Some(language) = self.language {
            post.language = language;
        }
        if let Some(related_posts) = self.related_posts {
            post.related_posts = related_posts;
        }
    }

    /// Build a complete post from the patch, defaulting absent fields
    pub fn into_post(self, id: u64) -> Post {
        let mut post = Post::new(id, String::new(), String::new());
        self.apply(&mut post);
        post
    }
}
