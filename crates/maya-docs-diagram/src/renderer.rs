//! Diagram runtime initialization and site wrapping.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use maya_docs_config::SiteConfig;
use serde::Serialize;

use crate::fence::{self, DiagramBlock};
use crate::mermaid::MermaidAdapter;
use crate::traits::{DiagramAdapter, DiagramError};

/// The set of diagram adapters used for a build.
#[derive(Clone, Default)]
pub struct DiagramRenderer {
    adapters: Vec<Arc<dyn DiagramAdapter>>,
}

impl fmt::Debug for DiagramRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagramRenderer")
            .field(
                "adapters",
                &self.adapters.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl DiagramRenderer {
    /// Set up the diagram runtime with the built-in adapters.
    ///
    /// Call once at the start of a build and share the result.
    pub fn initialize() -> Self {
        let mut renderer = Self::default();
        renderer.register(Arc::new(MermaidAdapter::new()));

        tracing::debug!(
            "Diagram support initialized for: {}",
            renderer.languages().join(", ")
        );

        renderer
    }

    /// Add an adapter. Later adapters take precedence for shared languages.
    pub fn register(&mut self, adapter: Arc<dyn DiagramAdapter>) {
        self.adapters.insert(0, adapter);
    }

    /// Every fence language some adapter handles.
    pub fn languages(&self) -> Vec<&'static str> {
        let mut languages: Vec<&'static str> = Vec::new();
        for adapter in &self.adapters {
            for language in adapter.languages() {
                if !languages.contains(language) {
                    languages.push(*language);
                }
            }
        }
        languages
    }

    fn adapter_for(&self, language: &str) -> Option<&dyn DiagramAdapter> {
        self.adapters
            .iter()
            .find(|a| a.languages().iter().any(|l| *l == language))
            .map(|a| a.as_ref())
    }
}

/// Hooks the generator registers in its markdown pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownHooks {
    /// Fence languages rendered as diagrams
    pub diagram_languages: Vec<String>,
}

/// A site configuration wrapped with diagram support.
///
/// Dereferences to the wrapped [`SiteConfig`] and serializes as the config
/// plus the `markdown` hooks and `head` tags.
#[derive(Debug, Clone, Serialize)]
pub struct DiagramSite {
    #[serde(flatten)]
    config: SiteConfig,

    pub markdown: MarkdownHooks,

    /// Tags added to every page `<head>`
    pub head: Vec<String>,

    #[serde(skip)]
    renderer: DiagramRenderer,
}

/// Attach diagram support to `config`.
pub fn with_diagram_support(config: SiteConfig, renderer: &DiagramRenderer) -> DiagramSite {
    let languages = renderer.languages();

    let mut head = Vec::new();
    for adapter in &renderer.adapters {
        head.extend(adapter.head_tags(&config.diagram));
    }

    DiagramSite {
        config,
        markdown: MarkdownHooks {
            diagram_languages: languages.iter().map(|l| l.to_string()).collect(),
        },
        head,
        renderer: renderer.clone(),
    }
}

impl DiagramSite {
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Unwrap the site configuration.
    pub fn into_inner(self) -> SiteConfig {
        self.config
    }

    /// Diagram blocks in a markdown page.
    pub fn extract_diagrams(&self, markdown: &str) -> Vec<DiagramBlock> {
        fence::extract_diagrams(markdown, &self.renderer.languages())
    }

    /// Render a markdown page to HTML with diagram fences handled by the
    /// registered adapters.
    pub fn render_markdown(&self, markdown: &str) -> Result<String, DiagramError> {
        let languages = self.renderer.languages();
        fence::render_markdown(markdown, &languages, |block| {
            let adapter = self
                .renderer
                .adapter_for(&block.language)
                .ok_or_else(|| DiagramError::UnsupportedLanguage(block.language.clone()))?;
            adapter.render(block, &self.config.diagram)
        })
    }
}

impl Deref for DiagramSite {
    type Target = SiteConfig;

    fn deref(&self) -> &SiteConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maya_docs_config::{build_config, DiagramOptions, DiagramTheme};
    use pretty_assertions::assert_eq;

    struct PlantUml;

    impl DiagramAdapter for PlantUml {
        fn name(&self) -> &'static str {
            "plantuml"
        }

        fn languages(&self) -> &[&'static str] {
            &["plantuml", "puml"]
        }

        fn head_tags(&self, _options: &DiagramOptions) -> Vec<String> {
            Vec::new()
        }

        fn render(
            &self,
            block: &DiagramBlock,
            _options: &DiagramOptions,
        ) -> Result<String, DiagramError> {
            Ok(format!("<img alt=\"{}\">", block.language))
        }
    }

    #[test]
    fn wraps_without_replacing_config() {
        let renderer = DiagramRenderer::initialize();

        let site = with_diagram_support(build_config(), &renderer);

        assert_eq!(site.config(), &build_config());
        assert_eq!(site.title, "Maya Signer");
        assert_eq!(site.markdown.diagram_languages, vec!["mermaid".to_string()]);
        assert_eq!(site.head.len(), 1);
        assert_eq!(site.into_inner(), build_config());
    }

    #[test]
    fn serializes_as_config_plus_hooks() {
        let site = with_diagram_support(build_config(), &DiagramRenderer::initialize());

        let json = serde_json::to_value(&site).unwrap();

        assert_eq!(json["base"], "/maya-signer/");
        assert_eq!(json["mermaid"]["theme"], "light");
        assert_eq!(json["markdown"]["diagramLanguages"][0], "mermaid");
        assert!(json.get("renderer").is_none());
    }

    #[test]
    fn head_tags_use_configured_theme() {
        let mut config = build_config();
        config.diagram.theme = DiagramTheme::Dark;

        let site = with_diagram_support(config, &DiagramRenderer::initialize());

        assert!(site.head[0].contains("\"dark\""));
    }

    #[test]
    fn renders_page_with_mermaid() {
        let site = with_diagram_support(build_config(), &DiagramRenderer::initialize());

        let html = site
            .render_markdown("# Arquitectura\n\n```mermaid\ngraph TD\n  A --> B\n```\n")
            .unwrap();

        assert!(html.contains("<h1>Arquitectura</h1>"));
        assert!(html.contains("<pre class=\"mermaid\">graph TD\n  A --&gt; B</pre>"));
    }

    #[test]
    fn empty_mermaid_block_is_an_error() {
        let site = with_diagram_support(build_config(), &DiagramRenderer::initialize());

        let result = site.render_markdown("texto\n\n```mermaid\n```\n");

        assert!(matches!(
            result,
            Err(DiagramError::EmptyDiagram { line: 3, .. })
        ));
    }

    #[test]
    fn registered_adapters_extend_languages() {
        let mut renderer = DiagramRenderer::initialize();
        renderer.register(Arc::new(PlantUml));

        let site = with_diagram_support(build_config(), &renderer);
        let html = site
            .render_markdown("```puml\n@startuml\n@enduml\n```\n\n```mermaid\ngraph LR\n```\n")
            .unwrap();

        assert_eq!(renderer.languages(), vec!["plantuml", "puml", "mermaid"]);
        assert!(html.contains("<img alt=\"puml\">"));
        assert!(html.contains("<pre class=\"mermaid\">"));
        assert_eq!(site.extract_diagrams("```plantuml\nx\n```\n").len(), 1);
    }
}
