//! pressroom: a file-backed blog content store with an admin CLI
//!
//! This crate keeps a blog's post collection as one JSON document on disk
//! and provides the query, mutation and validation layers a content
//! administration front end needs on top of it.

pub mod commands;
pub mod config;
pub mod content;
pub mod meta;
pub mod query;
pub mod repository;
pub mod store;
pub mod validation;

use anyhow::Result;
use std::path::Path;

/// Site configuration file name
pub const CONFIG_FILE: &str = "pressroom.yml";

/// The main Pressroom application
#[derive(Clone)]
pub struct Pressroom {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Path to the persisted post collection
    pub posts_path: std::path::PathBuf,
}

impl Pressroom {
    /// Create a new Pressroom instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_path = base_dir.join(&config.posts_file);

        Ok(Self {
            config,
            base_dir,
            posts_path,
        })
    }

    /// Repository over the on-disk post collection
    pub fn repository(&self) -> repository::PostRepository<store::FileStore> {
        repository::PostRepository::new(store::FileStore::new(&self.posts_path))
    }
}
