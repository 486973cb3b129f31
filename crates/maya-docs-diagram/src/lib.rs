//! Diagram support for the Maya Signer docs configuration.
//!
//! Diagram-as-code fences (```` ```mermaid ````) are rendered into markup the
//! browser-side diagram runtime picks up. The runtime is set up by an explicit
//! [`DiagramRenderer::initialize`] call at the start of a build and attached to
//! a site configuration with [`with_diagram_support`].

pub mod fence;
pub mod mermaid;
pub mod renderer;
pub mod traits;

pub use fence::{extract_diagrams, fence_language, DiagramBlock};
pub use mermaid::MermaidAdapter;
pub use renderer::{with_diagram_support, DiagramRenderer, DiagramSite, MarkdownHooks};
pub use traits::{DiagramAdapter, DiagramError};
