//! Paragraph and text-level types.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Highest heading level the built-in heading styles cover.
pub const MAX_HEADING_LEVEL: u8 = 9;

/// A block node: a heading or a body paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline content in the paragraph
    pub content: Vec<InlineContent>,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self {
            content: Vec::new(),
            style: ParagraphStyle::default(),
        }
    }

    /// Create a paragraph with plain text.
    ///
    /// Newlines become line breaks and tabs become tab stops, so a
    /// multi-line string stays a single block.
    pub fn with_text(text: impl AsRef<str>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a heading paragraph.
    ///
    /// Level 0 is the document title style, levels 1-9 are the numbered
    /// heading styles. Any other level is rejected.
    pub fn heading(text: impl AsRef<str>, level: u8) -> Result<Self> {
        check_heading_level(level)?;
        let mut p = Self::with_text(text);
        p.style.heading_level = Some(level);
        Ok(p)
    }

    /// Check that the style can be written with the built-in styles.
    pub fn validate(&self) -> Result<()> {
        match self.style.heading_level {
            Some(level) => check_heading_level(level),
            None => Ok(()),
        }
    }

    /// Add text to the paragraph, translating `\n`/`\r` and `\t`.
    pub fn add_text(&mut self, text: impl AsRef<str>) {
        let mut buffer = String::new();
        for ch in text.as_ref().chars() {
            match ch {
                '\n' | '\r' => {
                    self.flush_text(&mut buffer);
                    self.content.push(InlineContent::LineBreak);
                }
                '\t' => {
                    self.flush_text(&mut buffer);
                    self.content.push(InlineContent::Tab);
                }
                _ => buffer.push(ch),
            }
        }
        self.flush_text(&mut buffer);
    }

    fn flush_text(&mut self, buffer: &mut String) {
        if !buffer.is_empty() {
            self.content
                .push(InlineContent::Text(std::mem::take(buffer)));
        }
    }

    /// Add a line break.
    pub fn add_line_break(&mut self) {
        self.content.push(InlineContent::LineBreak);
    }

    /// Add a tab.
    pub fn add_tab(&mut self) {
        self.content.push(InlineContent::Tab);
    }

    /// Set the paragraph alignment.
    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.style.alignment = alignment;
        self
    }

    /// Get the paragraph alignment.
    pub fn alignment(&self) -> Alignment {
        self.style.alignment
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                InlineContent::Text(text) => text.as_str(),
                InlineContent::LineBreak => "\n",
                InlineContent::Tab => "\t",
            })
            .collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() || self.plain_text().trim().is_empty()
    }

    /// Check if this is a heading (including the title style).
    pub fn is_heading(&self) -> bool {
        self.style.heading_level.is_some()
    }

    /// Get the heading level (0-9) or None.
    pub fn heading_level(&self) -> Option<u8> {
        self.style.heading_level
    }

    /// Semantic type of this block.
    pub fn kind(&self) -> BlockKind {
        match self.style.heading_level {
            Some(0) => BlockKind::Title,
            Some(level) => BlockKind::Heading(level),
            None => BlockKind::Body,
        }
    }

    /// Number of text lines (line breaks + 1), zero for an empty paragraph.
    pub fn line_count(&self) -> usize {
        if self.content.is_empty() {
            return 0;
        }
        1 + self
            .content
            .iter()
            .filter(|c| matches!(c, InlineContent::LineBreak))
            .count()
    }

    /// Number of lines that start with the given bullet marker.
    pub fn bullet_count(&self, marker: char) -> usize {
        self.plain_text()
            .lines()
            .filter(|line| line.trim_start().starts_with(marker))
            .count()
    }
}

fn check_heading_level(level: u8) -> Result<()> {
    if level > MAX_HEADING_LEVEL {
        return Err(Error::Style(format!(
            "heading level {} is out of range (0-{})",
            level, MAX_HEADING_LEVEL
        )));
    }
    Ok(())
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Semantic type tag of a block node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "level", rename_all = "snake_case")]
pub enum BlockKind {
    /// Document title style
    Title,
    /// Numbered heading (1-9)
    Heading(u8),
    /// Body paragraph
    Body,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Title => write!(f, "title"),
            BlockKind::Heading(level) => write!(f, "h{}", level),
            BlockKind::Body => write!(f, "paragraph"),
        }
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum InlineContent {
    /// A run of text
    Text(String),

    /// A line break inside the paragraph
    LineBreak,

    /// A tab character
    Tab,
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Heading level (0 = title, 1-9) or None for a body paragraph
    pub heading_level: Option<u8>,

    /// Text alignment
    pub alignment: Alignment,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new();
        p.add_text("Hello ");
        p.add_text("world!");

        assert_eq!(p.plain_text(), "Hello world!");
    }

    #[test]
    fn test_newlines_become_line_breaks() {
        let p = Paragraph::with_text("first\nsecond\tcol");
        assert_eq!(
            p.content,
            vec![
                InlineContent::Text("first".to_string()),
                InlineContent::LineBreak,
                InlineContent::Text("second".to_string()),
                InlineContent::Tab,
                InlineContent::Text("col".to_string()),
            ]
        );
        assert_eq!(p.plain_text(), "first\nsecond\tcol");
        assert_eq!(p.line_count(), 2);
    }

    #[test]
    fn test_blank_line_keeps_both_breaks() {
        let p = Paragraph::with_text("a\n\nb");
        assert_eq!(p.line_count(), 3);
        assert_eq!(p.plain_text(), "a\n\nb");
    }

    #[test]
    fn test_heading() {
        let h1 = Paragraph::heading("Title", 1).unwrap();
        assert!(h1.is_heading());
        assert_eq!(h1.heading_level(), Some(1));
        assert_eq!(h1.kind(), BlockKind::Heading(1));

        let title = Paragraph::heading("Doc", 0).unwrap();
        assert_eq!(title.kind(), BlockKind::Title);

        assert_eq!(Paragraph::with_text("body").kind(), BlockKind::Body);
    }

    #[test]
    fn test_heading_level_out_of_range() {
        let result = Paragraph::heading("Too deep", 10);
        assert!(matches!(result, Err(Error::Style(_))));
    }

    #[test]
    fn test_validate_rejects_hand_built_heading() {
        let mut p = Paragraph::with_text("Deep");
        assert!(p.validate().is_ok());

        p.style.heading_level = Some(MAX_HEADING_LEVEL);
        assert!(p.validate().is_ok());

        p.style.heading_level = Some(12);
        assert!(matches!(p.validate(), Err(Error::Style(_))));
    }

    #[test]
    fn test_alignment() {
        let mut p = Paragraph::with_text("centered");
        assert_eq!(p.alignment(), Alignment::Left);
        p.set_alignment(Alignment::Center);
        assert_eq!(p.alignment(), Alignment::Center);
    }

    #[test]
    fn test_bullet_count() {
        let p = Paragraph::with_text("Intro:\n• one\n• two\n\nMore:\n• three");
        assert_eq!(p.bullet_count('•'), 3);
        assert_eq!(p.bullet_count('-'), 0);
    }

    #[test]
    fn test_empty_paragraph() {
        let p = Paragraph::new();
        assert!(p.is_empty());
        assert_eq!(p.line_count(), 0);
        assert!(Paragraph::with_text("  ").is_empty());
    }
}
