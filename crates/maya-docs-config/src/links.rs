//! Resolving navigation links to content pages.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::nav::{flatten_links, NavEntry};
use crate::site::SiteConfig;

/// A navigation link with no matching content page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadLink {
    /// Entry text
    pub text: String,
    /// The link as written
    pub link: String,
    /// Content file the link was expected to resolve to
    pub expected: PathBuf,
}

/// Errors that can occur while checking links.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Content directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to scan content directory: {0}")]
    Scan(#[from] walkdir::Error),
}

/// Map an internal link to the markdown file that backs it.
///
/// `/user/` maps to `user/index.md` and `/user/platforms/linux` to
/// `user/platforms/linux.md`. Fragments, query strings and `.html` suffixes
/// are ignored. Absolute URLs have no source and return `None`.
pub fn page_source(link: &str) -> Option<PathBuf> {
    if !link.starts_with('/') {
        return None;
    }

    let path = link
        .split(['#', '?'])
        .next()
        .unwrap_or(link)
        .trim_start_matches('/');

    if path.is_empty() || path.ends_with('/') {
        return Some(PathBuf::from(path).join("index.md"));
    }

    let path = path.strip_suffix(".html").unwrap_or(path);
    let path = path.strip_suffix(".md").unwrap_or(path);
    Some(PathBuf::from(format!("{}.md", path)))
}

/// Every internal `(text, link)` pair in the nav bar and sidebar.
pub fn internal_links(config: &SiteConfig) -> Vec<(&str, &str)> {
    let mut entries: Vec<&[NavEntry]> = vec![config.theme.nav.as_slice()];
    for groups in config.theme.sidebar.values() {
        for group in groups {
            entries.push(group.items.as_slice());
        }
    }

    entries
        .into_iter()
        .flat_map(flatten_links)
        .filter(|(_, link)| link.starts_with('/'))
        .collect()
}

/// Check every internal link against the markdown pages under `root`.
///
/// Each dead link is reported once, in nav-then-sidebar order.
pub fn check_links(config: &SiteConfig, root: &Path) -> Result<Vec<DeadLink>, LinkError> {
    if !root.is_dir() {
        return Err(LinkError::DirectoryNotFound(root.display().to_string()));
    }

    let mut pages = HashSet::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.loop_ancestor().is_some() => {
                tracing::warn!("Skipping symlink loop: {}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let path = entry.path();

        if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("md")
        {
            continue;
        }

        if let Ok(relative) = path.strip_prefix(root) {
            pages.insert(relative.to_path_buf());
        }
    }

    tracing::debug!("Found {} content pages under {}", pages.len(), root.display());

    let mut reported = HashSet::new();
    let mut dead = Vec::new();

    for (text, link) in internal_links(config) {
        let Some(expected) = page_source(link) else {
            continue;
        };
        if pages.contains(&expected) || !reported.insert(link) {
            continue;
        }
        dead.push(DeadLink {
            text: text.to_string(),
            link: link.to_string(),
            expected,
        });
    }

    Ok(dead)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_config;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn maps_links_to_markdown_sources() {
        assert_eq!(page_source("/"), Some(PathBuf::from("index.md")));
        assert_eq!(page_source("/user/"), Some(PathBuf::from("user/index.md")));
        assert_eq!(
            page_source("/user/platforms/linux"),
            Some(PathBuf::from("user/platforms/linux.md"))
        );
        assert_eq!(
            page_source("/user/signing.html#firma"),
            Some(PathBuf::from("user/signing.md"))
        );
        assert_eq!(page_source("https://github.com/Maya-AQSS"), None);
    }

    #[test]
    fn internal_links_skip_absolute_urls() {
        let config = build_config();

        let links: Vec<&str> = internal_links(&config).into_iter().map(|(_, l)| l).collect();

        assert!(links.contains(&"/user/platforms/macos"));
        assert!(links.iter().all(|l| l.starts_with('/')));
    }

    #[test]
    fn reports_missing_pages_once() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("user/platforms")).unwrap();
        fs::write(root.join("index.md"), "# Inicio").unwrap();
        fs::write(root.join("user/index.md"), "# Guía").unwrap();
        fs::write(root.join("user/platforms/linux.md"), "# Linux").unwrap();

        let dead = check_links(&build_config(), root).unwrap();
        let links: Vec<&str> = dead.iter().map(|d| d.link.as_str()).collect();

        assert!(!links.contains(&"/"));
        assert!(!links.contains(&"/user/"));
        assert!(!links.contains(&"/user/platforms/linux"));
        assert!(links.contains(&"/user/platforms/windows"));
        assert_eq!(
            links.iter().filter(|l| **l == "/user/platforms/windows").count(),
            1
        );
    }

    #[cfg(unix)]
    #[test]
    fn skips_symlink_loops() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("user")).unwrap();
        fs::write(root.join("user/index.md"), "# Guía").unwrap();
        std::os::unix::fs::symlink(root, root.join("user/loop")).unwrap();

        let dead = check_links(&build_config(), root).unwrap();
        let links: Vec<&str> = dead.iter().map(|d| d.link.as_str()).collect();

        assert!(!links.contains(&"/user/"));
        assert!(links.contains(&"/user/platforms/linux"));
    }

    #[test]
    fn errors_on_missing_root() {
        let temp = tempdir().unwrap();

        let result = check_links(&build_config(), &temp.path().join("nope"));

        assert!(matches!(result, Err(LinkError::DirectoryNotFound(_))));
    }
}
