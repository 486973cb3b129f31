//! Markdown rendering command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use maya_docs_diagram::{with_diagram_support, DiagramRenderer};

use super::load_site;

/// Run the render command.
pub async fn run(config_path: &Path, file: &Path) -> Result<()> {
    let markdown = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let renderer = DiagramRenderer::initialize();
    let site = with_diagram_support(load_site(config_path)?, &renderer);

    let diagrams = site.extract_diagrams(&markdown);
    tracing::debug!("{} contains {} diagrams", file.display(), diagrams.len());

    let html = site
        .render_markdown(&markdown)
        .with_context(|| format!("Failed to render {}", file.display()))?;

    print!("{}", html);

    Ok(())
}
