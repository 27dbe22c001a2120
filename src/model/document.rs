//! Document-level types.

use super::Paragraph;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An in-memory word-processing document: metadata plus block nodes in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Core document properties (title, creator, etc.)
    pub metadata: Metadata,

    /// Block nodes in insertion order
    pub blocks: Vec<Paragraph>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            blocks: Vec::new(),
        }
    }

    /// Append a heading and return it for further styling.
    ///
    /// Fails with [`Error::Style`](crate::Error::Style) when `level` is
    /// outside 0-9.
    pub fn add_heading(&mut self, text: impl AsRef<str>, level: u8) -> Result<&mut Paragraph> {
        let heading = Paragraph::heading(text, level)?;
        Ok(self.append(heading))
    }

    /// Append a body paragraph and return it for further styling.
    pub fn add_paragraph(&mut self, text: impl AsRef<str>) -> &mut Paragraph {
        self.append(Paragraph::with_text(text))
    }

    /// Append an empty spacer paragraph.
    pub fn add_empty_paragraph(&mut self) -> &mut Paragraph {
        self.append(Paragraph::new())
    }

    /// Append an already-built block.
    ///
    /// The block's style is checked the same way [`Document::add_heading`]
    /// checks it; a rejected block is not appended.
    pub fn push(&mut self, paragraph: Paragraph) -> Result<&mut Paragraph> {
        paragraph.validate()?;
        Ok(self.append(paragraph))
    }

    fn append(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        log::debug!("append block #{} ({})", self.blocks.len(), paragraph.kind());
        let index = self.blocks.len();
        self.blocks.push(paragraph);
        &mut self.blocks[index]
    }

    /// All blocks in insertion order.
    pub fn blocks(&self) -> &[Paragraph] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Headings of exactly the given level, in order.
    pub fn headings(&self, level: u8) -> impl Iterator<Item = &Paragraph> + '_ {
        self.blocks
            .iter()
            .filter(move |p| p.heading_level() == Some(level))
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Write the document as a DOCX package, consuming it.
    ///
    /// The destination is replaced atomically; see [`crate::writer::save`].
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        crate::writer::save(&self, path)
    }
}

/// Core document properties (`docProps/core.xml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Document author
    pub creator: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Description / comments
    pub description: Option<String>,

    /// Last editor
    pub last_modified_by: Option<String>,

    /// Revision number
    pub revision: Option<u32>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        let fields = [
            ("title", &self.title),
            ("subject", &self.subject),
            ("creator", &self.creator),
            ("keywords", &self.keywords),
            ("description", &self.description),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                lines.push(format!("{}: \"{}\"", key, escape_yaml(value)));
            }
        }
        if let Some(revision) = self.revision {
            lines.push(format!("revision: {}", revision));
        }
        if let Some(ref created) = self.created {
            lines.push(format!("created: {}", created.to_rfc3339()));
        }
        if let Some(ref modified) = self.modified {
            lines.push(format!("modified: {}", modified.to_rfc3339()));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Alignment, BlockKind};

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }

    #[test]
    fn test_blocks_keep_insertion_order() {
        let mut doc = Document::new();
        doc.add_heading("Title", 1)
            .unwrap()
            .set_alignment(Alignment::Center);
        doc.add_empty_paragraph();
        doc.add_heading("Section", 2).unwrap();
        doc.add_paragraph("Body text");

        let kinds: Vec<_> = doc.blocks().iter().map(|b| b.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading(1),
                BlockKind::Body,
                BlockKind::Heading(2),
                BlockKind::Body,
            ]
        );
        assert_eq!(doc.blocks()[0].alignment(), Alignment::Center);
    }

    #[test]
    fn test_rejected_heading_is_not_appended() {
        let mut doc = Document::new();
        let result = doc.add_heading("Nope", 42);
        assert!(matches!(result, Err(Error::Style(_))));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_push_rejects_out_of_range_heading() {
        let mut doc = Document::new();
        let mut p = Paragraph::with_text("Too deep");
        p.style.heading_level = Some(12);

        let result = doc.push(p);
        assert!(matches!(result, Err(Error::Style(_))));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_push_accepts_valid_block() {
        let mut doc = Document::new();
        let heading = Paragraph::heading("Section", 2).unwrap();
        doc.push(heading).unwrap().set_alignment(Alignment::Right);

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.blocks()[0].kind(), BlockKind::Heading(2));
        assert_eq!(doc.blocks()[0].alignment(), Alignment::Right);
    }

    #[test]
    fn test_headings_filter() {
        let mut doc = Document::new();
        doc.add_heading("A", 2).unwrap();
        doc.add_heading("a", 3).unwrap();
        doc.add_heading("B", 2).unwrap();

        let texts: Vec<_> = doc.headings(2).map(|h| h.plain_text()).collect();
        assert_eq!(texts, vec!["A", "B"]);
    }

    #[test]
    fn test_metadata_frontmatter() {
        let mut metadata = Metadata::with_title("Test \"Document\"");
        metadata.creator = Some("synopsis".to_string());
        metadata.revision = Some(1);

        let yaml = metadata.to_yaml_frontmatter();
        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("title: \"Test \\\"Document\\\"\""));
        assert!(yaml.contains("creator: \"synopsis\""));
        assert!(yaml.contains("revision: 1"));
        assert!(!yaml.contains("subject"));
    }
}
