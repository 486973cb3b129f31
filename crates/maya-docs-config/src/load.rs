//! Loading override files from disk.

use std::fs;
use std::path::Path;

use crate::builder::build_config;
use crate::merge::{merge, PartialSiteConfig};
use crate::site::SiteConfig;

/// Errors that can occur when loading an override file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

/// Parse an override file. The format follows the extension: `.yaml`/`.yml`
/// and `.json` are supported, anything else is read as TOML.
pub fn load_overrides(path: &Path) -> Result<PartialSiteConfig, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let parse_error = |message: String| LoadError::Parse {
        path: path.display().to_string(),
        message,
    };

    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))
        }
        Some("json") => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
        _ => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
    }
}

/// Resolve the site configuration, layering `path` over [`build_config`]
/// when the file exists.
///
/// Returns an error if the file exists but is malformed.
pub fn resolve(path: Option<&Path>) -> Result<SiteConfig, LoadError> {
    let base = build_config();

    let Some(path) = path.filter(|p| p.exists()) else {
        tracing::debug!("No override file, using built-in configuration");
        return Ok(base);
    };

    let overrides = load_overrides(path)?;
    if overrides.is_empty() {
        tracing::debug!("{} sets no overrides", path.display());
    } else {
        tracing::info!("Loaded overrides from {}", path.display());
    }

    Ok(merge(base, overrides))
}
