//! Document model types.
//!
//! This module defines the in-memory representation that the content
//! builder fills and that the DOCX writer and reader translate to and from
//! the package format.

mod document;
mod paragraph;

pub use document::{Document, Metadata};
pub use paragraph::{
    Alignment, BlockKind, InlineContent, Paragraph, ParagraphStyle, MAX_HEADING_LEVEL,
};
