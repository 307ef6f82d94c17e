// src/application/ports/markdown.rs

/// Converts stored markdown into the HTML submitted to publishing targets.
///
/// Implementations must not leave any `\n` in their output.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}
