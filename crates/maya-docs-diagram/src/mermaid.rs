//! Mermaid adapter.
//!
//! Diagrams are emitted as `<pre class="mermaid">` elements and drawn in the
//! browser by the mermaid runtime loaded from the page head.

use maya_docs_config::{DiagramOptions, DiagramTheme};

use crate::fence::DiagramBlock;
use crate::traits::{DiagramAdapter, DiagramError};

/// ES module bundle of the mermaid runtime.
pub const MERMAID_BUNDLE: &str = "https://cdn.jsdelivr.net/npm/mermaid@11/dist/mermaid.esm.min.mjs";

/// Adapter for fenced `mermaid` blocks.
#[derive(Debug, Default)]
pub struct MermaidAdapter;

impl MermaidAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Mermaid's own name for a theme.
    pub fn theme_name(theme: DiagramTheme) -> &'static str {
        match theme {
            DiagramTheme::Light => "default",
            DiagramTheme::Dark => "dark",
        }
    }
}

impl DiagramAdapter for MermaidAdapter {
    fn name(&self) -> &'static str {
        "mermaid"
    }

    fn languages(&self) -> &[&'static str] {
        &["mermaid"]
    }

    fn head_tags(&self, options: &DiagramOptions) -> Vec<String> {
        vec![format!(
            r#"<script type="module">import mermaid from "{}"; mermaid.initialize({{ startOnLoad: true, theme: "{}" }});</script>"#,
            MERMAID_BUNDLE,
            Self::theme_name(options.theme)
        )]
    }

    fn render(
        &self,
        block: &DiagramBlock,
        _options: &DiagramOptions,
    ) -> Result<String, DiagramError> {
        let source = block.source.trim();
        if source.is_empty() {
            return Err(DiagramError::EmptyDiagram {
                language: block.language.clone(),
                line: block.line,
            });
        }

        Ok(format!("<pre class=\"mermaid\">{}</pre>\n", escape_html(source)))
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
