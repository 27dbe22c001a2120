//! DOCX package reader.
//!
//! Parses a WordprocessingML package back into the [`Document`] model.
//! Only what the model can express is kept: paragraph style (heading
//! level), justification, text, line breaks and tabs. Everything else in
//! the package is skipped.

use crate::detect;
use crate::error::Result;
use crate::model::{Document, InlineContent, Metadata, Paragraph};
use crate::ooxml;
use chrono::{DateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// Read a DOCX file into a document.
///
/// # Example
///
/// ```no_run
/// let doc = synopsis::reader::read_file("synopsis.docx").unwrap();
/// println!("{} blocks", doc.len());
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let file = File::open(path)?;
    read_from(BufReader::new(file))
}

/// Read DOCX bytes into a document.
pub fn read_bytes(data: &[u8]) -> Result<Document> {
    if !detect::is_zip_bytes(data) {
        return Err(crate::Error::UnknownFormat);
    }
    read_from(Cursor::new(data))
}

/// Read a DOCX package from any seekable reader.
pub fn read_from<R: Read + Seek>(reader: R) -> Result<Document> {
    let mut archive = detect::open_archive(reader)?;
    let format = detect::inspect_archive(&mut archive)?;

    let body = detect::read_part(&mut archive, &format.main_part)?
        .ok_or_else(|| crate::Error::MissingPart(format.main_part.clone()))?;
    let blocks = parse_document_xml(&body)?;

    let metadata = match detect::read_part(&mut archive, ooxml::CORE_PROPS_PART)? {
        Some(core) => parse_core_props(&core)?,
        None => Metadata::default(),
    };

    log::debug!(
        "read {} blocks from {} ({} parts)",
        blocks.len(),
        format.main_part,
        format.part_count
    );
    Ok(Document { metadata, blocks })
}

/// Parse the main document part into block nodes.
pub(crate) fn parse_document_xml(xml: &str) -> Result<Vec<Paragraph>> {
    let mut reader = Reader::from_str(xml);
    let mut blocks = Vec::new();
    let mut current: Option<Paragraph> = None;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => current = Some(Paragraph::new()),
                b"r" => in_run = true,
                b"t" if in_run => in_text = true,
                _ => apply_empty(&e, current.as_mut(), in_run)?,
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" => blocks.push(Paragraph::new()),
                _ => apply_empty(&e, current.as_mut(), in_run)?,
            },
            Event::Text(t) if in_text => {
                if let Some(p) = current.as_mut() {
                    let text = t.unescape()?;
                    if !text.is_empty() {
                        p.content.push(InlineContent::Text(text.into_owned()));
                    }
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"p" => {
                    if let Some(p) = current.take() {
                        blocks.push(p);
                    }
                }
                b"r" => in_run = false,
                b"t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(blocks)
}

/// Apply a property or inline element (`pStyle`, `jc`, `br`, `tab`, `cr`).
fn apply_empty(
    e: &BytesStart<'_>,
    paragraph: Option<&mut Paragraph>,
    in_run: bool,
) -> Result<()> {
    let Some(p) = paragraph else {
        return Ok(());
    };
    match e.local_name().as_ref() {
        b"pStyle" if !in_run => {
            if let Some(style_id) = attr_value(e, b"val")? {
                match ooxml::heading_level_from_style_id(&style_id) {
                    Some(level) => p.style.heading_level = Some(level),
                    None if style_id.to_ascii_lowercase().starts_with("heading") => {
                        log::warn!("ignoring unsupported heading style {:?}", style_id);
                    }
                    None => {}
                }
            }
        }
        b"jc" if !in_run => {
            if let Some(value) = attr_value(e, b"val")? {
                p.style.alignment = ooxml::alignment_from_justification(&value);
            }
        }
        b"br" | b"cr" if in_run => {
            let kind = attr_value(e, b"type")?;
            if matches!(kind.as_deref(), None | Some("textWrapping")) {
                p.add_line_break();
            }
        }
        b"tab" if in_run => p.add_tab(),
        _ => {}
    }
    Ok(())
}

fn attr_value(e: &BytesStart<'_>, local: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == local {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Parse `docProps/core.xml`.
pub(crate) fn parse_core_props(xml: &str) -> Result<Metadata> {
    let mut reader = Reader::from_str(xml);
    let mut metadata = Metadata::default();
    let mut field: Option<Vec<u8>> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => field = Some(e.local_name().as_ref().to_vec()),
            Event::Text(t) => {
                let Some(name) = field.as_deref() else {
                    continue;
                };
                let value = t.unescape()?.trim().to_string();
                if value.is_empty() {
                    continue;
                }
                match name {
                    b"title" => metadata.title = Some(value),
                    b"subject" => metadata.subject = Some(value),
                    b"creator" => metadata.creator = Some(value),
                    b"keywords" => metadata.keywords = Some(value),
                    b"description" => metadata.description = Some(value),
                    b"lastModifiedBy" => metadata.last_modified_by = Some(value),
                    b"revision" => metadata.revision = value.parse().ok(),
                    b"created" => metadata.created = parse_w3cdtf(&value),
                    b"modified" => metadata.modified = parse_w3cdtf(&value),
                    _ => {}
                }
            }
            Event::End(_) => field = None,
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(metadata)
}

fn parse_w3cdtf(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, BlockKind};
    use crate::Error;
    use chrono::TimeZone;

    const NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

    fn body(inner: &str) -> String {
        format!("<w:document {}><w:body>{}</w:body></w:document>", NS, inner)
    }

    #[test]
    fn test_parse_heading_with_break() {
        let xml = body(concat!(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/><w:jc w:val="center"/></w:pPr>"#,
            r#"<w:r><w:t>SYNOPSIS</w:t><w:br/><w:t xml:space="preserve">Second &amp; line</w:t></w:r></w:p>"#,
        ));
        let blocks = parse_document_xml(&xml).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind(), BlockKind::Heading(1));
        assert_eq!(blocks[0].alignment(), Alignment::Center);
        assert_eq!(blocks[0].plain_text(), "SYNOPSIS\nSecond & line");
    }

    #[test]
    fn test_parse_empty_and_multi_run_paragraphs() {
        let xml = body(concat!(
            "<w:p/>",
            "<w:p><w:r><w:t>one </w:t></w:r><w:r><w:tab/><w:t>two</w:t></w:r></w:p>",
            "<w:p></w:p>",
        ));
        let blocks = parse_document_xml(&xml).unwrap();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].is_empty());
        assert_eq!(blocks[1].plain_text(), "one \ttwo");
        assert!(blocks[2].is_empty());
    }

    #[test]
    fn test_tab_stops_in_properties_are_not_text() {
        let xml = body(concat!(
            r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr>"#,
            "<w:r><w:t>x</w:t></w:r></w:p>",
        ));
        let blocks = parse_document_xml(&xml).unwrap();
        assert_eq!(blocks[0].plain_text(), "x");
    }

    #[test]
    fn test_page_break_is_not_line_break() {
        let xml = body(r#"<w:p><w:r><w:t>a</w:t><w:br w:type="page"/><w:t>b</w:t></w:r></w:p>"#);
        let blocks = parse_document_xml(&xml).unwrap();
        assert_eq!(blocks[0].plain_text(), "ab");
    }

    #[test]
    fn test_unknown_style_is_body() {
        let xml = body(concat!(
            r#"<w:p><w:pPr><w:pStyle w:val="ListParagraph"/></w:pPr>"#,
            r#"<w:r><w:t>x</w:t></w:r></w:p>"#,
        ));
        let blocks = parse_document_xml(&xml).unwrap();
        assert_eq!(blocks[0].kind(), BlockKind::Body);
    }

    #[test]
    fn test_malformed_xml() {
        let result = parse_document_xml("<w:document><w:body></w:document>");
        assert!(matches!(result, Err(Error::Xml(_))));
    }

    #[test]
    fn test_parse_core_props() {
        let xml = concat!(
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>Synopsis</dc:title><dc:creator>synopsis</dc:creator><dc:subject/>",
            "<cp:revision>3</cp:revision>",
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2024-03-01T09:30:00Z</dcterms:created>"#,
            "</cp:coreProperties>",
        );
        let metadata = parse_core_props(xml).unwrap();
        assert_eq!(metadata.title.as_deref(), Some("Synopsis"));
        assert_eq!(metadata.creator.as_deref(), Some("synopsis"));
        assert_eq!(metadata.subject, None);
        assert_eq!(metadata.revision, Some(3));
        assert_eq!(
            metadata.created,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_read_bytes_round_trip() {
        let mut doc = Document::new();
        doc.metadata = Metadata::with_title("Round trip");
        doc.add_heading("Head", 2).unwrap();
        doc.add_empty_paragraph();
        doc.add_paragraph("• a\n• b")
            .set_alignment(Alignment::Justify);

        let bytes = crate::writer::to_bytes(&doc).unwrap();
        let back = read_bytes(&bytes).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_read_bytes_rejects_non_docx() {
        assert!(matches!(read_bytes(b"plain text"), Err(Error::UnknownFormat)));
    }
}
