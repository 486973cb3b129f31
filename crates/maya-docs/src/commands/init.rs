//! Initialize an overrides file and content stubs.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use maya_docs_config::links::internal_links;
use maya_docs_config::page_source;

use super::load_site;

/// Run the init command.
pub async fn run(config_path: &Path, docs_dir: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing documentation...");

    let created = scaffold(config_path, docs_dir, yes)?;

    tracing::info!("Initialization complete! Created {} pages.", created);
    tracing::info!("Run 'maya-docs check --root {}' to verify links.", docs_dir.display());

    Ok(())
}

/// Write the overrides file and a stub page for every internal link that
/// has none. Returns the number of pages written.
pub fn scaffold(config_path: &Path, docs_dir: &Path, yes: bool) -> Result<usize> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
    } else {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    }

    let config = load_site(config_path)?;
    let mut created = 0;
    let mut seen = HashSet::new();

    for (text, link) in internal_links(&config) {
        let Some(source) = page_source(link) else {
            continue;
        };
        let path = docs_dir.join(&source);
        if !seen.insert(path.clone()) || (path.exists() && !yes) {
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, stub_page(text))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Created {}", path.display());
        created += 1;
    }

    Ok(created)
}

fn stub_page(title: &str) -> String {
    format!("---\ntitle: {}\n---\n\n# {}\n", title, title)
}

const DEFAULT_CONFIG: &str = r#"# Maya Signer documentation overrides
#
# Values here are layered over the built-in site configuration.
# Scalars replace, lists replace, sidebar sections replace per key.

# Site title
# title = "Maya Signer"

# Base path (for deployment)
# base = "/maya-signer/"

# Fail the link check on dead links
# ignoreDeadLinks = false

# [mermaid]
# theme = "dark"

# [themeConfig.footer]
# message = "Distribuido bajo licencia MIT."
# copyright = "Copyright © 2025 Maya AQSS"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use maya_docs_config::{build_config, check_links};
    use tempfile::tempdir;

    #[test]
    fn default_config_sets_no_overrides() {
        let overrides: maya_docs_config::PartialSiteConfig =
            toml::from_str(DEFAULT_CONFIG).unwrap();

        assert!(overrides.is_empty());
    }

    #[test]
    fn scaffolds_every_linked_page() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("docs.toml");
        let docs = temp.path().join("docs");

        let created = scaffold(&config_path, &docs, false).unwrap();

        assert!(created > 0);
        assert!(config_path.exists());
        assert!(docs.join("user/platforms/macos.md").exists());
        assert!(check_links(&build_config(), &docs).unwrap().is_empty());
    }

    #[test]
    fn keeps_existing_pages_without_yes() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("docs.toml");
        let docs = temp.path().join("docs");
        fs::create_dir_all(docs.join("user")).unwrap();
        fs::write(docs.join("user/index.md"), "# Mi guía").unwrap();

        scaffold(&config_path, &docs, false).unwrap();
        assert_eq!(
            fs::read_to_string(docs.join("user/index.md")).unwrap(),
            "# Mi guía"
        );

        assert_eq!(scaffold(&config_path, &docs, false).unwrap(), 0);
    }

    #[test]
    fn stub_page_has_title() {
        assert_eq!(stub_page("Linux"), "---\ntitle: Linux\n---\n\n# Linux\n");
    }
}
