//! Structural checks on a resolved configuration.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::nav::{NavDropdown, NavEntry, NavLink};
use crate::site::SiteConfig;
use crate::theme::PATH_PLACEHOLDER;

static LOCALE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z]{2,3}(-[a-zA-Z0-9]{2,8})*$").expect("locale tag pattern is valid")
});

static ABSOLUTE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/]+").expect("url pattern is valid"));

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    /// Dotted path to the offending field (e.g., `themeConfig.nav[2]`)
    pub field: String,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}: {}", level, self.field, self.message)
    }
}

/// All findings for one configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Turn the report into an error if any finding is an error.
    pub fn into_result(self) -> Result<Vec<Issue>, ConfigError> {
        if self.has_errors() {
            Err(ConfigError::Invalid(self.issues))
        } else {
            Ok(self.issues)
        }
    }

    fn error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Error, field, message);
    }

    fn warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Warning, field, message);
    }

    fn push(&mut self, severity: Severity, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue {
            severity,
            field: field.into(),
            message: message.into(),
        });
    }
}

/// Errors raised for a malformed configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {}", summarize(.0))]
    Invalid(Vec<Issue>),
}

fn summarize(issues: &[Issue]) -> String {
    issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check a configuration for malformed values.
pub fn validate(config: &SiteConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if config.title.trim().is_empty() {
        report.error("title", "must not be empty");
    }

    if !config.base_path.starts_with('/') || !config.base_path.ends_with('/') {
        report.error(
            "base",
            format!("'{}' must begin and end with '/'", config.base_path),
        );
    }

    if !LOCALE_TAG.is_match(&config.lang) {
        report.error("lang", format!("'{}' is not a locale tag", config.lang));
    }

    for (i, entry) in config.theme.nav.iter().enumerate() {
        check_entry(&mut report, &format!("themeConfig.nav[{}]", i), entry);
    }

    let prefix = config.source_prefix();
    for (key, groups) in &config.theme.sidebar {
        let field = format!("themeConfig.sidebar[\"{}\"]", key);

        if !key.starts_with(&prefix) {
            report.error(&field, format!("key is outside the source prefix '{}'", prefix));
        }

        let mut seen = HashSet::new();
        for (g, group) in groups.iter().enumerate() {
            let group_field = format!("{}[{}]", field, g);

            if group.text.trim().is_empty() {
                report.error(format!("{}.text", group_field), "must not be empty");
            }
            if group.items.is_empty() {
                report.warning(&group_field, format!("group '{}' has no items", group.text));
            }

            for (i, entry) in group.items.iter().enumerate() {
                let entry_field = format!("{}.items[{}]", group_field, i);
                check_entry(&mut report, &entry_field, entry);

                entry.walk(&mut |e| {
                    if let Some(link) = e.target() {
                        if !seen.insert(link.to_string()) {
                            report.warning(
                                &entry_field,
                                format!("link '{}' appears more than once in this section", link),
                            );
                        }
                    }
                });
            }
        }
    }

    for (i, social) in config.theme.social_links.iter().enumerate() {
        let field = format!("themeConfig.socialLinks[{}]", i);
        if social.icon.trim().is_empty() {
            report.error(format!("{}.icon", field), "must not be empty");
        }
        if !ABSOLUTE_URL.is_match(&social.link) {
            report.error(
                format!("{}.link", field),
                format!("'{}' is not an absolute URL", social.link),
            );
        }
    }

    if let Some(edit) = &config.theme.edit_link {
        if !edit.pattern.contains(PATH_PLACEHOLDER) {
            report.error(
                "themeConfig.editLink.pattern",
                format!("must contain '{}'", PATH_PLACEHOLDER),
            );
        }
    }

    report
}

fn check_entry(report: &mut ValidationReport, field: &str, entry: &NavEntry) {
    if entry.text().trim().is_empty() {
        report.error(format!("{}.text", field), "must not be empty");
    }

    match entry {
        NavEntry::Link(NavLink { link, .. }) => {
            if !link.starts_with('/') && !ABSOLUTE_URL.is_match(link) {
                report.error(
                    format!("{}.link", field),
                    format!("'{}' must start with '/' or be an absolute URL", link),
                );
            }
        }
        NavEntry::Dropdown(NavDropdown { items, .. }) => {
            if items.is_empty() {
                report.error(format!("{}.items", field), "dropdown has no items");
            }
            for (i, item) in items.iter().enumerate() {
                check_entry(report, &format!("{}.items[{}]", field, i), item);
            }
        }
    }
}
