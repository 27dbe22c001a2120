//! WordprocessingML vocabulary shared by the writer, reader, and detector.

use crate::model::Alignment;

/// Package part names.
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const PACKAGE_RELS_PART: &str = "_rels/.rels";
pub const DOCUMENT_PART: &str = "word/document.xml";
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
pub const STYLES_PART: &str = "word/styles.xml";
pub const CORE_PROPS_PART: &str = "docProps/core.xml";
pub const APP_PROPS_PART: &str = "docProps/app.xml";

/// Namespaces.
pub const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const NS_PKG_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
pub const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// Relationship types.
pub const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
pub const REL_CORE_PROPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
pub const REL_EXTENDED_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
pub const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

/// Content types.
pub const CT_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
pub const CT_STYLES: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
pub const CT_CORE_PROPS: &str = "application/vnd.openxmlformats-package.core-properties+xml";
pub const CT_EXTENDED_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.extended-properties+xml";
pub const CT_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";

/// Style id of the paragraph style for a heading level.
pub fn heading_style_id(level: u8) -> String {
    if level == 0 {
        "Title".to_string()
    } else {
        format!("Heading{}", level)
    }
}

/// Heading level for a paragraph style id, if it names a heading style.
///
/// Accepts both the style ids Word writes (`Heading2`) and the
/// space-separated form some producers use (`heading 2`).
pub fn heading_level_from_style_id(style_id: &str) -> Option<u8> {
    if style_id.eq_ignore_ascii_case("title") {
        return Some(0);
    }
    let lower = style_id.to_ascii_lowercase();
    let digits = lower.strip_prefix("heading")?.trim_start();
    match digits.parse::<u8>() {
        Ok(level) if (1..=9).contains(&level) => Some(level),
        _ => None,
    }
}

/// `w:jc` value for an alignment, or None for the default.
pub fn justification(alignment: Alignment) -> Option<&'static str> {
    match alignment {
        Alignment::Left => None,
        Alignment::Center => Some("center"),
        Alignment::Right => Some("right"),
        Alignment::Justify => Some("both"),
    }
}

/// Alignment for a `w:jc` value.
pub fn alignment_from_justification(value: &str) -> Alignment {
    match value {
        "center" => Alignment::Center,
        "right" | "end" => Alignment::Right,
        "both" | "distribute" => Alignment::Justify,
        _ => Alignment::Left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_style_ids() {
        assert_eq!(heading_style_id(0), "Title");
        assert_eq!(heading_style_id(1), "Heading1");
        assert_eq!(heading_style_id(3), "Heading3");
    }

    #[test]
    fn test_heading_level_from_style_id() {
        assert_eq!(heading_level_from_style_id("Title"), Some(0));
        assert_eq!(heading_level_from_style_id("Heading2"), Some(2));
        assert_eq!(heading_level_from_style_id("heading 3"), Some(3));
        assert_eq!(heading_level_from_style_id("Heading10"), None);
        assert_eq!(heading_level_from_style_id("Normal"), None);
        assert_eq!(heading_level_from_style_id("ListParagraph"), None);
    }

    #[test]
    fn test_justification_mapping() {
        for alignment in [
            Alignment::Left,
            Alignment::Center,
            Alignment::Right,
            Alignment::Justify,
        ] {
            let value = justification(alignment).unwrap_or("left");
            assert_eq!(alignment_from_justification(value), alignment);
        }
    }
}
