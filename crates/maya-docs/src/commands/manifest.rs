//! Manifest emission command.

use std::path::Path;

use anyhow::{Context, Result};
use maya_docs_config::{validate, write_manifest};

use super::load_site;

/// Run the manifest command.
pub async fn run(config_path: &Path, output: &Path) -> Result<()> {
    tracing::info!("Writing site manifest...");

    let config = load_site(config_path)?;

    for warning in validate(&config).into_result()? {
        tracing::warn!("{}", warning);
    }

    let path = write_manifest(&config, output)
        .with_context(|| format!("Failed to write manifest to {}", output.display()))?;

    tracing::info!("Output: {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_manifest_files() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        run(&temp.path().join("docs.toml"), &out).await.unwrap();

        assert!(out.join("site-manifest.json").exists());
        assert!(out.join("config.json").exists());
    }

    #[tokio::test]
    async fn refuses_invalid_configuration() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("docs.toml");
        fs::write(&config_path, "base = \"maya-signer\"\n").unwrap();

        let result = run(&config_path, &temp.path().join("dist")).await;

        assert!(result.is_err());
        assert!(!temp.path().join("dist").exists());
    }
}
