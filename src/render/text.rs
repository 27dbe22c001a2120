//! Plain text preview rendering.

use crate::model::Document;

/// Convert a document to plain text, one blank line between blocks.
pub fn to_text(doc: &Document) -> String {
    doc.blocks()
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.plain_text())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One line per block: kind and first line of text.
pub fn outline(doc: &Document) -> Vec<(String, String)> {
    doc.blocks()
        .iter()
        .map(|p| {
            let text = p.plain_text();
            let first = text.lines().next().unwrap_or_default().to_string();
            (p.kind().to_string(), first)
        })
        .collect()
}
