//! XML bodies of the individual package parts.

use crate::error::{Error, Result};
use crate::model::{Document, InlineContent, Metadata, Paragraph, MAX_HEADING_LEVEL};
use crate::ooxml;
use chrono::{DateTime, Utc};
use quick_xml::escape::escape;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Letter page, 1" top/bottom and 1.25" left/right margins (twips).
const SECTION_PROPERTIES: &str = concat!(
    r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/>"#,
    r#"<w:pgMar w:top="1440" w:right="1800" w:bottom="1440" w:left="1800" "#,
    r#"w:header="720" w:footer="720" w:gutter="0"/>"#,
    r#"<w:cols w:space="720"/></w:sectPr>"#
);

/// Half-point sizes for Heading1..Heading9.
const HEADING_SIZES: [u8; MAX_HEADING_LEVEL as usize] = [32, 26, 24, 22, 22, 22, 22, 22, 22];

pub(crate) fn content_types_xml() -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!(r#"<Types xmlns="{}">"#, ooxml::NS_CONTENT_TYPES));
    xml.push_str(&format!(
        r#"<Default Extension="rels" ContentType="{}"/>"#,
        ooxml::CT_RELATIONSHIPS
    ));
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    for (part, content_type) in [
        (ooxml::DOCUMENT_PART, ooxml::CT_DOCUMENT),
        (ooxml::STYLES_PART, ooxml::CT_STYLES),
        (ooxml::CORE_PROPS_PART, ooxml::CT_CORE_PROPS),
        (ooxml::APP_PROPS_PART, ooxml::CT_EXTENDED_PROPS),
    ] {
        xml.push_str(&format!(
            r#"<Override PartName="/{}" ContentType="{}"/>"#,
            part, content_type
        ));
    }
    xml.push_str("</Types>");
    xml
}

pub(crate) fn package_rels_xml() -> String {
    relationships_xml(&[
        ("rId1", ooxml::REL_OFFICE_DOCUMENT, ooxml::DOCUMENT_PART),
        ("rId2", ooxml::REL_CORE_PROPS, ooxml::CORE_PROPS_PART),
        ("rId3", ooxml::REL_EXTENDED_PROPS, ooxml::APP_PROPS_PART),
    ])
}

pub(crate) fn document_rels_xml() -> String {
    relationships_xml(&[("rId1", ooxml::REL_STYLES, "styles.xml")])
}

fn relationships_xml(rels: &[(&str, &str, &str)]) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!(r#"<Relationships xmlns="{}">"#, ooxml::NS_PKG_RELS));
    for (id, rel_type, target) in rels {
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            id, rel_type, target
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

pub(crate) fn document_xml(doc: &Document) -> Result<String> {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!(
        r#"<w:document xmlns:w="{}" xmlns:r="{}"><w:body>"#,
        ooxml::NS_W,
        ooxml::NS_R
    ));
    for (index, paragraph) in doc.blocks().iter().enumerate() {
        write_paragraph(&mut xml, index, paragraph)?;
    }
    xml.push_str(SECTION_PROPERTIES);
    xml.push_str("</w:body></w:document>");
    Ok(xml)
}

fn write_paragraph(xml: &mut String, index: usize, paragraph: &Paragraph) -> Result<()> {
    // `blocks` is public, so a block may not have gone through `Document::push`.
    if let Some(level) = paragraph.heading_level().filter(|&l| l > MAX_HEADING_LEVEL) {
        return Err(Error::Style(format!(
            "block #{}: heading level {} has no style (0-{})",
            index, level, MAX_HEADING_LEVEL
        )));
    }

    let style_id = paragraph.heading_level().map(ooxml::heading_style_id);
    let jc = ooxml::justification(paragraph.alignment());

    if paragraph.content.is_empty() && style_id.is_none() && jc.is_none() {
        xml.push_str("<w:p/>");
        return Ok(());
    }

    xml.push_str("<w:p>");
    if style_id.is_some() || jc.is_some() {
        xml.push_str("<w:pPr>");
        if let Some(ref id) = style_id {
            xml.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, id));
        }
        if let Some(jc) = jc {
            xml.push_str(&format!(r#"<w:jc w:val="{}"/>"#, jc));
        }
        xml.push_str("</w:pPr>");
    }

    if !paragraph.content.is_empty() {
        xml.push_str("<w:r>");
        for inline in &paragraph.content {
            match inline {
                InlineContent::Text(text) => {
                    check_xml_chars(index, text)?;
                    xml.push_str(r#"<w:t xml:space="preserve">"#);
                    xml.push_str(&escape(text.as_str()));
                    xml.push_str("</w:t>");
                }
                InlineContent::LineBreak => xml.push_str("<w:br/>"),
                InlineContent::Tab => xml.push_str("<w:tab/>"),
            }
        }
        xml.push_str("</w:r>");
    }

    xml.push_str("</w:p>");
    Ok(())
}

/// Reject characters XML 1.0 cannot carry (NUL and most C0 controls).
fn check_xml_chars(index: usize, text: &str) -> Result<()> {
    match text.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(Error::Xml(format!(
            "block #{}: character U+{:04X} is not allowed in XML text",
            index, c as u32
        ))),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{FFFE}' | '\u{FFFF}' => false,
        c => c >= '\u{20}',
    }
}

pub(crate) fn styles_xml() -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!(r#"<w:styles xmlns:w="{}">"#, ooxml::NS_W));
    xml.push_str(concat!(
        "<w:docDefaults><w:rPrDefault><w:rPr>",
        r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:eastAsia="Calibri" w:cs="Calibri"/>"#,
        r#"<w:sz w:val="22"/><w:szCs w:val="22"/><w:lang w:val="en-US"/>"#,
        "</w:rPr></w:rPrDefault><w:pPrDefault><w:pPr>",
        r#"<w:spacing w:after="200" w:line="276" w:lineRule="auto"/>"#,
        "</w:pPr></w:pPrDefault></w:docDefaults>",
    ));
    xml.push_str(concat!(
        r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#,
        r#"<w:name w:val="Normal"/><w:qFormat/></w:style>"#,
    ));
    xml.push_str(concat!(
        r#"<w:style w:type="paragraph" w:styleId="Title">"#,
        r#"<w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
        r#"<w:pPr><w:spacing w:after="300"/></w:pPr>"#,
        r#"<w:rPr><w:color w:val="17365D"/><w:sz w:val="52"/><w:szCs w:val="52"/></w:rPr>"#,
        "</w:style>",
    ));
    for level in 1..=MAX_HEADING_LEVEL {
        let size = HEADING_SIZES[(level - 1) as usize];
        xml.push_str(&format!(
            concat!(
                r#"<w:style w:type="paragraph" w:styleId="Heading{level}">"#,
                r#"<w:name w:val="heading {level}"/><w:basedOn w:val="Normal"/>"#,
                r#"<w:next w:val="Normal"/><w:uiPriority w:val="9"/><w:qFormat/>"#,
                r#"<w:pPr><w:keepNext/><w:keepLines/><w:spacing w:before="{before}" w:after="0"/>"#,
                r#"<w:outlineLvl w:val="{outline}"/></w:pPr>"#,
                r#"<w:rPr><w:b/><w:bCs/><w:color w:val="{color}"/>"#,
                r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/></w:rPr></w:style>"#,
            ),
            level = level,
            before = if level == 1 { 480 } else { 200 },
            outline = level - 1,
            color = if level == 1 { "365F91" } else { "4F81BD" },
            size = size,
        ));
    }
    xml.push_str("</w:styles>");
    xml
}

pub(crate) fn core_props_xml(metadata: &Metadata) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(concat!(
        "<cp:coreProperties ",
        r#"xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
        r#"xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" "#,
        r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    ));
    let fields = [
        ("dc:title", &metadata.title),
        ("dc:subject", &metadata.subject),
        ("dc:creator", &metadata.creator),
        ("cp:keywords", &metadata.keywords),
        ("dc:description", &metadata.description),
        ("cp:lastModifiedBy", &metadata.last_modified_by),
    ];
    for (tag, value) in fields {
        if let Some(value) = value {
            xml.push_str(&format!("<{tag}>{}</{tag}>", escape(value.as_str()), tag = tag));
        }
    }
    if let Some(revision) = metadata.revision {
        xml.push_str(&format!("<cp:revision>{}</cp:revision>", revision));
    }
    for (tag, value) in [
        ("dcterms:created", &metadata.created),
        ("dcterms:modified", &metadata.modified),
    ] {
        if let Some(value) = value {
            xml.push_str(&format!(
                r#"<{tag} xsi:type="dcterms:W3CDTF">{}</{tag}>"#,
                w3cdtf(value),
                tag = tag
            ));
        }
    }
    xml.push_str("</cp:coreProperties>");
    xml
}

fn w3cdtf(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

pub(crate) fn app_props_xml(doc: &Document) -> String {
    let text = doc.plain_text();
    let words = text.split_whitespace().count();
    let characters = text.chars().filter(|c| !c.is_whitespace()).count();

    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(concat!(
        "<Properties ",
        r#"xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    ));
    xml.push_str("<Application>synopsis</Application>");
    xml.push_str(&format!("<Words>{}</Words>", words));
    xml.push_str(&format!("<Characters>{}</Characters>", characters));
    xml.push_str(&format!("<Paragraphs>{}</Paragraphs>", doc.len()));
    xml.push_str("</Properties>");
    xml
}
