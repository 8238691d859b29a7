//! Page-head metadata builder
//!
//! A pure function from post facts to the metadata block a rendered page
//! head needs. No state, no I/O.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::Language;

/// Inputs for building page metadata
#[derive(Debug, Clone)]
pub struct PageMetaOptions {
    pub meta_title: String,
    pub meta_description: String,
    pub canonical_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub locale: Language,
}

/// Robots directives
#[derive(Debug, Clone, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub nocache: bool,
}

/// Open Graph block
#[derive(Debug, Clone, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Page-head metadata
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub application_name: String,
    pub robots: Robots,
    pub open_graph: OpenGraph,
    pub published_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

/// Build the metadata block for one page
pub fn page_meta(config: &SiteConfig, options: PageMetaOptions) -> PageMeta {
    PageMeta {
        title: options.meta_title.clone(),
        description: options.meta_description.clone(),
        canonical: options.canonical_url.clone(),
        application_name: config.title.clone(),
        robots: Robots {
            index: true,
            follow: true,
            nocache: true,
        },
        open_graph: OpenGraph {
            title: options.meta_title,
            description: options.meta_description,
            url: options.canonical_url,
            site_name: config.title.clone(),
            locale: options.locale.to_string(),
            kind: "website".to_string(),
        },
        published_time: options.created_at,
        modified_time: options.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn options() -> PageMetaOptions {
        PageMetaOptions {
            meta_title: "A post title".to_string(),
            meta_description: "A post description".to_string(),
            canonical_url: "https://example.com/blog/a-post".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 4, 2, 9, 30, 0).unwrap(),
            locale: Language::De,
        }
    }

    #[test]
    fn test_page_meta_mirrors_inputs() {
        let config = SiteConfig::default();
        let meta = page_meta(&config, options());

        assert_eq!(meta.title, "A post title");
        assert_eq!(meta.canonical, "https://example.com/blog/a-post");
        assert_eq!(meta.application_name, "Pressroom");
        assert_eq!(meta.open_graph.site_name, "Pressroom");
        assert_eq!(meta.open_graph.locale, "de");
        assert!(meta.robots.index);
        assert!(meta.published_time < meta.modified_time);
    }

    #[test]
    fn test_open_graph_type_serializes_as_type() {
        let config = SiteConfig::default();
        let meta = page_meta(&config, options());

        let json = serde_json::to_string(&meta.open_graph).unwrap();
        assert!(json.contains(r#""type":"website""#));
    }
}
