//! Layering override values onto a base configuration.
//!
//! Rules:
//! - a present scalar or optional leaf replaces the base value
//! - `themeConfig` is merged field by field
//! - sequences replace, they never concatenate
//! - `sidebar` merges per key; an override key replaces that key's groups
//! - leaf structs (`footer`, `editLink`, `lastUpdated`, `search`, `mermaid`)
//!   replace wholesale

use serde::{Deserialize, Serialize};

use crate::nav::{NavEntry, Sidebar};
use crate::site::{DiagramOptions, SiteConfig};
use crate::theme::{EditLink, Footer, LastUpdated, SearchConfig, SocialLink};

/// A sparse [`SiteConfig`]; every `None` field leaves the base untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialSiteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    #[serde(rename = "base", default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    #[serde(rename = "srcDir", default, skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_dead_links: Option<bool>,

    #[serde(rename = "mermaid", default, skip_serializing_if = "Option::is_none")]
    pub diagram: Option<DiagramOptions>,

    #[serde(rename = "themeConfig", default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<PartialThemeConfig>,
}

/// A sparse [`ThemeConfig`](crate::theme::ThemeConfig).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialThemeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<Vec<NavEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<Sidebar>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLink>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<LastUpdated>,
}

impl PartialSiteConfig {
    /// True when applying this value would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Apply `overrides` on top of `base`.
pub fn merge(base: SiteConfig, overrides: PartialSiteConfig) -> SiteConfig {
    let mut merged = base;

    replace(&mut merged.title, overrides.title);
    replace(&mut merged.description, overrides.description);
    replace(&mut merged.lang, overrides.lang);
    replace(&mut merged.base_path, overrides.base_path);
    replace(&mut merged.source_dir, overrides.source_dir);
    replace(&mut merged.ignore_dead_links, overrides.ignore_dead_links);
    replace(&mut merged.diagram, overrides.diagram);

    if let Some(theme) = overrides.theme {
        let target = &mut merged.theme;

        replace(&mut target.logo, theme.logo.map(Some));
        replace(&mut target.nav, theme.nav);
        if let Some(sidebar) = theme.sidebar {
            for (prefix, groups) in sidebar {
                target.sidebar.insert(prefix, groups);
            }
        }
        replace(&mut target.social_links, theme.social_links);
        replace(&mut target.footer, theme.footer.map(Some));
        replace(&mut target.search, theme.search);
        replace(&mut target.edit_link, theme.edit_link.map(Some));
        replace(&mut target.last_updated, theme.last_updated.map(Some));
    }

    merged
}

fn replace<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{base_config, build_config};
    use crate::nav::SidebarGroup;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_overrides_keep_base() {
        let base = base_config();

        let merged = merge(base.clone(), PartialSiteConfig::default());

        assert_eq!(merged, base);
    }

    #[test]
    fn scalars_replace() {
        let merged = merge(
            base_config(),
            PartialSiteConfig {
                title: Some("Maya Signer Docs".to_string()),
                ignore_dead_links: Some(false),
                ..Default::default()
            },
        );

        assert_eq!(merged.title, "Maya Signer Docs");
        assert!(!merged.ignore_dead_links);
        assert_eq!(merged.base_path, base_config().base_path);
    }

    #[test]
    fn sequences_replace_rather_than_concatenate() {
        let base = base_config();
        assert!(base.theme.nav.len() > 1);

        let merged = merge(
            base,
            PartialSiteConfig {
                theme: Some(PartialThemeConfig {
                    nav: Some(vec![NavEntry::link("Solo", "/user/")]),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );

        assert_eq!(merged.theme.nav, vec![NavEntry::link("Solo", "/user/")]);
    }

    #[test]
    fn sidebar_merges_per_key() {
        let mut base = base_config();
        base.theme.sidebar.insert(
            "/user/".to_string(),
            vec![SidebarGroup::new("Old", vec![NavEntry::link("Old", "/user/old")])],
        );
        base.theme.sidebar.insert(
            "/user/platforms/".to_string(),
            vec![SidebarGroup::new("Kept", vec![])],
        );

        let mut sidebar = Sidebar::new();
        sidebar.insert(
            "/user/".to_string(),
            vec![SidebarGroup::new("New", vec![NavEntry::link("New", "/user/new")])],
        );

        let merged = merge(
            base,
            PartialSiteConfig {
                theme: Some(PartialThemeConfig {
                    sidebar: Some(sidebar),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );

        assert_eq!(merged.theme.sidebar["/user/"][0].text, "New");
        assert_eq!(merged.theme.sidebar["/user/"].len(), 1);
        assert_eq!(merged.theme.sidebar["/user/platforms/"][0].text, "Kept");
    }

    #[test]
    fn leaf_structs_replace_wholesale() {
        let merged = merge(
            base_config(),
            PartialSiteConfig {
                theme: Some(PartialThemeConfig {
                    footer: Some(Footer {
                        message: "m".to_string(),
                        copyright: "c".to_string(),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );

        let footer = merged.theme.footer.unwrap();
        assert_eq!(footer.message, "m");
        assert_eq!(footer.copyright, "c");
    }

    #[test]
    fn absent_optional_leaves_keep_base() {
        let base = build_config();

        let merged = merge(
            base.clone(),
            PartialSiteConfig {
                theme: Some(PartialThemeConfig {
                    logo: Some("/otro.svg".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );

        assert_eq!(merged.theme.logo.as_deref(), Some("/otro.svg"));
        assert_eq!(merged.theme.footer, base.theme.footer);
        assert_eq!(merged.theme.edit_link, base.theme.edit_link);
        assert_eq!(merged.theme.last_updated, base.theme.last_updated);
    }

    #[test]
    fn partial_rejects_unknown_fields() {
        let result: Result<PartialSiteConfig, _> = toml::from_str("titel = \"typo\"");

        assert!(result.is_err());
    }

    #[test]
    fn empty_partial_is_empty() {
        assert!(PartialSiteConfig::default().is_empty());
        assert!(!PartialSiteConfig {
            lang: Some("en-US".to_string()),
            ..Default::default()
        }
        .is_empty());
    }
}
