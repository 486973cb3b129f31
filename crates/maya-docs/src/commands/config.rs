//! Resolved configuration printing command.

use std::path::Path;

use anyhow::{Context, Result};
use maya_docs_config::SiteConfig;
use maya_docs_diagram::{with_diagram_support, DiagramRenderer};

use super::load_site;
use crate::Format;

/// Serialize the configuration in the requested format.
///
/// JSON output is the configuration as handed to the generator, diagram
/// hooks included; TOML output is the bare configuration.
pub fn render(config: SiteConfig, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let site = with_diagram_support(config, &DiagramRenderer::initialize());
            serde_json::to_string_pretty(&site).context("Failed to serialize configuration")
        }
        Format::Toml => {
            toml::to_string_pretty(&config).context("Failed to serialize configuration")
        }
    }
}

/// Run the config command.
pub async fn run(config_path: &Path, format: Format) -> Result<()> {
    let config = load_site(config_path)?;

    println!("{}", render(config, format)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maya_docs_config::build_config;

    #[test]
    fn json_includes_diagram_hooks() {
        let out = render(build_config(), Format::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["title"], "Maya Signer");
        assert_eq!(json["markdown"]["diagramLanguages"][0], "mermaid");
        assert_eq!(json["head"].as_array().map(|h| h.len()), Some(1));
    }

    #[test]
    fn toml_reads_back_as_the_same_config() {
        let out = render(build_config(), Format::Toml).unwrap();

        let config: SiteConfig = toml::from_str(&out).unwrap();

        assert_eq!(config, build_config());
    }
}
