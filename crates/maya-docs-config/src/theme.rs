//! Theme layer configuration: navigation, sidebar and page chrome.

use serde::{Deserialize, Serialize};

use crate::nav::{NavEntry, Sidebar};

/// Placeholder substituted with a page's relative path in edit links.
pub const PATH_PLACEHOLDER: &str = ":path";

/// Options for the generator's default theme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeConfig {
    /// Logo path, relative to the public directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Top navigation bar
    #[serde(default)]
    pub nav: Vec<NavEntry>,

    /// Sidebar groups per URL prefix
    #[serde(default)]
    pub sidebar: Sidebar,

    /// Social icons shown in the navigation bar
    #[serde(default)]
    pub social_links: Vec<SocialLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<LastUpdated>,
}

/// A social icon link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Icon identifier (e.g., "github")
    pub icon: String,
    /// Absolute URL
    pub link: String,
}

/// Footer text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Footer {
    pub message: String,
    pub copyright: String,
}

/// Search provider selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    pub provider: SearchProvider,
}

/// Where the search index comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Index built by the generator and shipped with the site
    #[default]
    Local,
    /// Hosted Algolia DocSearch
    Algolia,
}

/// "Edit this page" link template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditLink {
    /// URL template containing `:path`
    pub pattern: String,
    /// Link text
    pub text: String,
}

impl EditLink {
    /// Build the edit URL for a page path relative to the docs project root.
    pub fn url_for(&self, relative_path: &str) -> String {
        self.pattern
            .replace(PATH_PLACEHOLDER, relative_path.trim_start_matches('/'))
    }
}

/// "Last updated" label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LastUpdated {
    pub text: String,
    #[serde(default)]
    pub format_options: FormatOptions,
}

/// `Intl.DateTimeFormat` style options for the last-updated timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormatOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_style: Option<String>,
}
