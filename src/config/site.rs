//! Site configuration (pressroom.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::Language;
use crate::query::DEFAULT_PAGE_SIZE;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: Language,

    // URL
    pub url: String,

    // Storage
    pub posts_file: String,

    // Pagination
    pub per_page: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Pressroom".to_string(),
            description: String::new(),
            author: String::new(),
            language: Language::En,

            url: "http://example.com".to_string(),

            posts_file: "posts.json".to_string(),

            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Pressroom");
        assert_eq!(config.posts_file, "posts.json");
        assert_eq!(config.per_page, 20);
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
author: Test User
language: de
per_page: 10
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.language, Language::De);
        assert_eq!(config.per_page, 10);
        // Unlisted fields keep their defaults
        assert_eq!(config.posts_file, "posts.json");
    }
}
