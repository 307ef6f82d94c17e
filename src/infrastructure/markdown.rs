// src/infrastructure/markdown.rs
use crate::application::ports::markdown::MarkdownRenderer;
use comrak::{Options, markdown_to_html};

/// Comrak renderer matching what WordPress targets expect: soft line breaks
/// become `<br />`, inline HTML is passed through, and the output is a single
/// line.
pub struct ComrakMarkdownRenderer {
    options: Options<'static>,
}

impl ComrakMarkdownRenderer {
    pub fn new() -> Self {
        let mut options = Options::default();
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.render.hardbreaks = true;
        options.render.r#unsafe = true;
        Self { options }
    }
}

impl Default for ComrakMarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for ComrakMarkdownRenderer {
    fn render(&self, markdown: &str) -> String {
        collapse_newlines(&markdown_to_html(markdown, &self.options))
    }
}

/// Target sites re-run their own autop filter over submitted content, so
/// line breaks in the HTML would turn into stray paragraphs.
fn collapse_newlines(html: &str) -> String {
    html.replace(['\r', '\n'], "")
}
