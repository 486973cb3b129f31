//! Trait definitions for diagram adapters.

use maya_docs_config::DiagramOptions;

use crate::fence::DiagramBlock;

/// Errors that can occur while rendering diagrams.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    #[error("Empty {language} diagram at line {line}")]
    EmptyDiagram { language: String, line: usize },

    #[error("No adapter registered for '{0}' diagrams")]
    UnsupportedLanguage(String),
}

/// Trait for diagram-language adapters.
pub trait DiagramAdapter: Send + Sync {
    /// Adapter identifier (e.g., "mermaid")
    fn name(&self) -> &'static str;

    /// Fence languages this adapter handles
    fn languages(&self) -> &[&'static str];

    /// Tags the generator must add to every page `<head>`.
    fn head_tags(&self, options: &DiagramOptions) -> Vec<String>;

    /// Render one diagram block to HTML.
    fn render(
        &self,
        block: &DiagramBlock,
        options: &DiagramOptions,
    ) -> Result<String, DiagramError>;
}
