//! Diagram fence extraction and markdown rendering.

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::traits::DiagramError;

/// A fenced diagram block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramBlock {
    /// Fence language, lowercased (e.g., "mermaid")
    pub language: String,

    /// Diagram source
    pub source: String,

    /// Line of the opening fence (1-indexed)
    pub line: usize,
}

/// Language named by a code fence info string (`mermaid title="x"` -> `mermaid`).
pub fn fence_language(info: &str) -> String {
    info.split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase()
}

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

fn line_at(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}

fn is_diagram(info: &str, languages: &[&str]) -> bool {
    let language = fence_language(info);
    languages.iter().any(|l| *l == language)
}

/// Collect every fenced block whose language is in `languages`.
pub fn extract_diagrams(markdown: &str, languages: &[&str]) -> Vec<DiagramBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<DiagramBlock> = None;

    for (event, range) in Parser::new_ext(markdown, options()).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info)))
                if is_diagram(&info, languages) =>
            {
                current = Some(DiagramBlock {
                    language: fence_language(&info),
                    source: String::new(),
                    line: line_at(markdown, range.start),
                });
            }
            Event::Text(text) => {
                if let Some(block) = current.as_mut() {
                    block.source.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
            }
            _ => {}
        }
    }

    blocks
}

/// Render markdown to HTML, replacing diagram fences with the output of `render`.
pub(crate) fn render_markdown<F>(
    markdown: &str,
    languages: &[&str],
    mut render: F,
) -> Result<String, DiagramError>
where
    F: FnMut(&DiagramBlock) -> Result<String, DiagramError>,
{
    let mut events = Vec::new();
    let mut current: Option<DiagramBlock> = None;

    for (event, range) in Parser::new_ext(markdown, options()).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(ref info)))
                if is_diagram(info, languages) =>
            {
                current = Some(DiagramBlock {
                    language: fence_language(info),
                    source: String::new(),
                    line: line_at(markdown, range.start),
                });
            }
            Event::Text(ref text) if current.is_some() => {
                if let Some(block) = current.as_mut() {
                    block.source.push_str(text);
                }
            }
            Event::End(TagEnd::CodeBlock) if current.is_some() => {
                if let Some(block) = current.take() {
                    events.push(Event::Html(render(&block)?.into()));
                }
            }
            other => events.push(other),
        }
    }

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());

    Ok(html_output)
}
