//! Configuration and link checking command.

use std::path::Path;

use anyhow::{Context, Result};
use maya_docs_config::{check_links, validate, SiteConfig};

use super::load_site;

/// Outcome of a check that did not fail.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub warnings: usize,
    pub dead_links: usize,
}

/// Validate `config` and, when `root` is given, resolve its links there.
///
/// Dead links fail the check unless `ignoreDeadLinks` is set.
pub fn check(config: &SiteConfig, root: Option<&Path>) -> Result<CheckSummary> {
    let report = validate(config);
    let mut summary = CheckSummary::default();

    for issue in report.warnings() {
        tracing::warn!("{}", issue);
        summary.warnings += 1;
    }
    for issue in report.errors() {
        tracing::error!("{}", issue);
    }
    report.into_result()?;

    let Some(root) = root else {
        return Ok(summary);
    };

    let dead = check_links(config, root)
        .with_context(|| format!("Failed to check links under {}", root.display()))?;
    summary.dead_links = dead.len();

    for link in &dead {
        let message = format!(
            "dead link '{}' ({}): {} not found",
            link.link,
            link.text,
            root.join(&link.expected).display()
        );
        if config.ignore_dead_links {
            tracing::warn!("{}", message);
        } else {
            tracing::error!("{}", message);
        }
    }

    if !dead.is_empty() && !config.ignore_dead_links {
        anyhow::bail!("{} dead links under {}", dead.len(), root.display());
    }

    Ok(summary)
}

/// Run the check command.
pub async fn run(config_path: &Path, root: Option<&Path>) -> Result<()> {
    let config = load_site(config_path)?;

    let summary = check(&config, root)?;

    tracing::info!(
        "Configuration OK ({} warnings, {} dead links)",
        summary.warnings,
        summary.dead_links
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maya_docs_config::build_config;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn built_in_config_checks_clean() {
        let summary = check(&build_config(), None).unwrap();

        assert_eq!(summary, CheckSummary::default());
    }

    #[test]
    fn validation_errors_fail() {
        let mut config = build_config();
        config.base_path = "maya-signer/".to_string();

        assert!(check(&config, None).is_err());
    }

    #[test]
    fn dead_links_respect_ignore_flag() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.md"), "# Inicio").unwrap();

        let mut config = build_config();
        config.ignore_dead_links = true;
        let summary = check(&config, Some(temp.path())).unwrap();
        assert!(summary.dead_links > 0);

        config.ignore_dead_links = false;
        assert!(check(&config, Some(temp.path())).is_err());
    }
}
