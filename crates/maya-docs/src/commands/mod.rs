//! CLI command implementations.

use std::path::Path;

use anyhow::{Context, Result};
use maya_docs_config::{resolve, SiteConfig};

pub mod check;
pub mod config;
pub mod edit_link;
pub mod init;
pub mod manifest;
pub mod render;

/// Resolve the site configuration with the overrides file at `path`, if any.
pub fn load_site(path: &Path) -> Result<SiteConfig> {
    resolve(Some(path)).with_context(|| format!("Failed to load {}", path.display()))
}
