//! Navigation manifest emitted alongside the resolved configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::links::page_source;
use crate::nav::{flatten_links, NavEntry, Sidebar};
use crate::site::SiteConfig;

/// File name of the navigation manifest.
pub const MANIFEST_FILE: &str = "site-manifest.json";

/// File name of the serialized configuration.
pub const CONFIG_FILE: &str = "config.json";

/// Navigation and sidebar structure for the theme layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub title: String,
    pub base: String,
    pub nav: Vec<NavEntry>,
    pub sidebar: Sidebar,
    /// Sidebar pages in display order
    pub pages: Vec<ManifestPage>,
}

/// One page reachable from the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestPage {
    pub text: String,
    pub link: String,
    /// Link joined onto the base path
    pub href: String,
    /// "Edit this page" URL, when edit links are configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
}

impl Manifest {
    /// Derive the manifest from a configuration.
    ///
    /// A link listed in several sidebar sections appears once.
    pub fn from_config(config: &SiteConfig) -> Self {
        let mut pages: Vec<ManifestPage> = Vec::new();

        for groups in config.theme.sidebar.values() {
            for group in groups {
                for (text, link) in flatten_links(&group.items) {
                    if pages.iter().any(|p| p.link == link) {
                        continue;
                    }

                    let edit_url = match (&config.theme.edit_link, page_source(link)) {
                        (Some(edit), Some(source)) => {
                            Some(edit.url_for(&source.to_string_lossy().replace('\\', "/")))
                        }
                        _ => None,
                    };

                    pages.push(ManifestPage {
                        text: text.to_string(),
                        link: link.to_string(),
                        href: config.href(link),
                        edit_url,
                    });
                }
            }
        }

        Self {
            title: config.title.clone(),
            base: config.base_path.clone(),
            nav: config.theme.nav.clone(),
            sidebar: config.theme.sidebar.clone(),
            pages,
        }
    }
}

/// Errors that can occur when writing the manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Write `site-manifest.json` and `config.json` into `out_dir`.
///
/// Returns the manifest path.
pub fn write_manifest(config: &SiteConfig, out_dir: &Path) -> Result<PathBuf, ManifestError> {
    fs::create_dir_all(out_dir).map_err(|source| ManifestError::Write {
        path: out_dir.display().to_string(),
        source,
    })?;

    let manifest = Manifest::from_config(config);
    let manifest_path = out_dir.join(MANIFEST_FILE);
    write_json(&manifest_path, &manifest)?;
    write_json(&out_dir.join(CONFIG_FILE), config)?;

    tracing::info!(
        "Wrote manifest with {} pages to {}",
        manifest.pages.len(),
        manifest_path.display()
    );

    Ok(manifest_path)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ManifestError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| ManifestError::Write {
        path: path.display().to_string(),
        source,
    })
}
