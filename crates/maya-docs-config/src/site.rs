//! Top-level site configuration.

use serde::{Deserialize, Serialize};

use crate::theme::ThemeConfig;

/// Configuration handed to the static-site generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title
    pub title: String,

    /// Site description for SEO
    pub description: String,

    /// Locale tag (e.g., "es-ES")
    pub lang: String,

    /// URL prefix the site is served under, delimited by `/` on both ends
    #[serde(rename = "base")]
    pub base_path: String,

    /// Content directory, relative to the docs project root
    #[serde(rename = "srcDir")]
    pub source_dir: String,

    /// Report dead links as warnings instead of failing the build
    pub ignore_dead_links: bool,

    /// Options passed to the diagram adapter
    #[serde(rename = "mermaid")]
    pub diagram: DiagramOptions,

    /// Theme layer options
    #[serde(rename = "themeConfig")]
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// The URL prefix every sidebar key must live under (`/{srcDir}/`).
    pub fn source_prefix(&self) -> String {
        let dir = self.source_dir.trim_matches('/');
        if dir.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", dir)
        }
    }

    /// Join an internal link onto the base path.
    ///
    /// Absolute URLs are returned untouched.
    pub fn href(&self, link: &str) -> String {
        if link.starts_with("http://") || link.starts_with("https://") {
            return link.to_string();
        }
        format!(
            "{}/{}",
            self.base_path.trim_end_matches('/'),
            link.trim_start_matches('/')
        )
    }
}

/// Options for the diagram-rendering adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagramOptions {
    /// Diagram color theme
    #[serde(default)]
    pub theme: DiagramTheme,
}

/// Color theme used when rendering diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramTheme {
    #[default]
    Light,
    Dark,
}
