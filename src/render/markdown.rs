//! Markdown preview rendering.

use crate::error::Result;
use crate::model::{Document, InlineContent, Paragraph};

use super::RenderOptions;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
        }

        for block in doc.blocks() {
            self.render_paragraph(&mut output, block);
        }

        Ok(output.trim().to_string())
    }

    fn render_paragraph(&self, output: &mut String, para: &Paragraph) {
        if para.is_empty() {
            return;
        }

        if let Some(level) = para.heading_level() {
            // Markdown has no title style; it renders as a top-level heading.
            let prefix = "#".repeat(level.clamp(1, 6) as usize);
            output.push_str(&prefix);
            output.push(' ');
            self.render_inline_content(output, &para.content, " ");
            output.push_str("\n\n");
            return;
        }

        self.render_inline_content(output, &para.content, "  \n");
        output.push_str("\n\n");
    }

    fn render_inline_content(
        &self,
        output: &mut String,
        content: &[InlineContent],
        line_break: &str,
    ) {
        for item in content {
            match item {
                InlineContent::Text(text) => {
                    if self.options.escape_special_chars {
                        output.push_str(&escape_markdown(text));
                    } else {
                        output.push_str(text);
                    }
                }
                InlineContent::LineBreak => {
                    // Trailing hard-break spaces on a blank line would render literally.
                    if line_break != " " && output.ends_with("  \n") {
                        output.push('\n');
                    } else {
                        output.push_str(line_break);
                    }
                }
                InlineContent::Tab => output.push('\t'),
            }
        }
    }
}

/// Escape special Markdown characters in text.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            // Core formatting that must be escaped
            '\\' | '`' | '*' | '_' |
            // Brackets for links/images, pipe for tables
            '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
