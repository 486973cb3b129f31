//! Edit-link lookup command.

use std::path::Path;

use anyhow::Result;
use maya_docs_config::SiteConfig;

use super::load_site;

/// Run the edit-link command.
pub async fn run(config_path: &Path, page: &str) -> Result<()> {
    let config = load_site(config_path)?;

    println!("{}", edit_url(&config, page)?);

    Ok(())
}

fn edit_url(config: &SiteConfig, page: &str) -> Result<String> {
    let Some(edit) = &config.theme.edit_link else {
        anyhow::bail!("No editLink is configured for {}", config.title);
    };

    Ok(edit.url_for(page))
}
