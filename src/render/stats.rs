//! Document statistics for previews and inspection.

use crate::content::BULLET;
use crate::model::{BlockKind, Document};
use serde::{Deserialize, Serialize};

/// Counts collected from a document's blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Total number of blocks
    pub block_count: u32,

    /// Headings per level; index 0 is the title style
    pub headings_by_level: [u32; 10],

    /// Body paragraphs with visible text
    pub paragraph_count: u32,

    /// Body paragraphs without visible text
    pub empty_paragraph_count: u32,

    /// Lines starting with the bullet marker
    pub bullet_line_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a document.
    pub fn collect(doc: &Document) -> Self {
        let mut stats = Self::new();
        for block in doc.blocks() {
            stats.block_count += 1;
            match block.kind() {
                BlockKind::Title => stats.headings_by_level[0] += 1,
                BlockKind::Heading(level) => {
                    // Levels without a built-in style are counted as blocks only.
                    if let Some(count) = stats.headings_by_level.get_mut(level as usize) {
                        *count += 1;
                    }
                }
                BlockKind::Body if block.is_empty() => stats.empty_paragraph_count += 1,
                BlockKind::Body => stats.paragraph_count += 1,
            }
            stats.bullet_line_count += block.bullet_count(BULLET) as u32;
            stats.count_text(&block.plain_text());
        }
        stats
    }

    /// Total headings across all levels.
    pub fn heading_count(&self) -> u32 {
        self.headings_by_level.iter().sum()
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_text() {
        let mut stats = DocumentStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_collect() {
        let mut doc = Document::new();
        doc.add_heading("T", 0).unwrap();
        doc.add_heading("H1", 1).unwrap();
        doc.add_empty_paragraph();
        doc.add_heading("H3", 3).unwrap();
        doc.add_paragraph("• a\n• b\nc");

        let stats = DocumentStats::collect(&doc);
        assert_eq!(stats.block_count, 5);
        assert_eq!(stats.headings_by_level[0], 1);
        assert_eq!(stats.headings_by_level[1], 1);
        assert_eq!(stats.headings_by_level[3], 1);
        assert_eq!(stats.heading_count(), 3);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.empty_paragraph_count, 1);
        assert_eq!(stats.bullet_line_count, 2);
    }

    #[test]
    fn test_collect_with_unstyled_heading_level() {
        let mut doc = Document::new();
        doc.add_heading("H2", 2).unwrap();
        doc.add_heading("Deep", 2).unwrap();
        doc.blocks[1].style.heading_level = Some(12);

        let stats = DocumentStats::collect(&doc);
        assert_eq!(stats.block_count, 2);
        assert_eq!(stats.heading_count(), 1);
        assert_eq!(stats.word_count, 2);
    }
}
