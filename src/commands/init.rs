//! Initialize a new site directory

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::store::{FileStore, PostStore};
use crate::CONFIG_FILE;

/// Create the config file and an empty post collection
pub fn run(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("Config already exists: {:?}", config_path);
    }

    let config = SiteConfig::default();
    fs::write(&config_path, serde_yaml::to_string(&config)?)?;

    let posts_path = target_dir.join(&config.posts_file);
    if !posts_path.exists() {
        FileStore::new(&posts_path).write_all(&[])?;
    }

    println!("Initialized site in {:?}", target_dir);

    Ok(())
}
