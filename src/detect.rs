//! DOCX package detection and validation.

use crate::error::{Error, Result};
use crate::ooxml;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// DOCX package information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxFormat {
    /// Name of the main document part (normally `word/document.xml`)
    pub main_part: String,
    /// Number of parts in the package
    pub part_count: usize,
    /// Whether the package carries `docProps/core.xml`
    pub has_core_properties: bool,
}

impl std::fmt::Display for DocxFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DOCX ({} parts)", self.part_count)
    }
}

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Detect a DOCX package from a file path.
///
/// # Example
/// ```no_run
/// use synopsis::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("synopsis.docx").unwrap();
/// println!("main part: {}", format.main_part);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocxFormat> {
    let file = File::open(path)?;
    detect_format(BufReader::new(file))
}

/// Detect a DOCX package from bytes.
///
/// # Returns
/// * `Ok(DocxFormat)` if the data is a ZIP package with a main document part
/// * `Err(Error::UnknownFormat)` if the data is not a ZIP/OPC package
/// * `Err(Error::MissingPart)` if the package has no main document part
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocxFormat> {
    if !is_zip_bytes(data) {
        return Err(Error::UnknownFormat);
    }
    detect_format(Cursor::new(data))
}

/// Detect a DOCX package from any seekable reader.
pub fn detect_format<R: Read + Seek>(reader: R) -> Result<DocxFormat> {
    let mut archive = open_archive(reader)?;
    inspect_archive(&mut archive)
}

/// Open a ZIP archive, reporting non-ZIP input as an unknown format.
pub(crate) fn open_archive<R: Read + Seek>(reader: R) -> Result<ZipArchive<R>> {
    ZipArchive::new(reader).map_err(|e| match e {
        ZipError::InvalidArchive(_) | ZipError::UnsupportedArchive(_) => Error::UnknownFormat,
        other => other.into(),
    })
}

/// Validate an opened archive as a WordprocessingML package.
pub(crate) fn inspect_archive<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<DocxFormat> {
    if !has_part(archive, ooxml::CONTENT_TYPES_PART) {
        return Err(Error::UnknownFormat);
    }

    let main_part = match read_part(archive, ooxml::PACKAGE_RELS_PART)? {
        Some(rels) => office_document_target(&rels)?,
        None => None,
    }
    .unwrap_or_else(|| ooxml::DOCUMENT_PART.to_string());

    if !has_part(archive, &main_part) {
        return Err(Error::MissingPart(main_part));
    }

    Ok(DocxFormat {
        main_part,
        part_count: archive.len(),
        has_core_properties: has_part(archive, ooxml::CORE_PROPS_PART),
    })
}

fn has_part<R: Read + Seek>(archive: &ZipArchive<R>, name: &str) -> bool {
    archive.file_names().any(|n| n == name)
}

/// Read a part as UTF-8 text, or None if the package lacks it.
pub(crate) fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>> {
    match archive.by_name(name) {
        Ok(mut file) => {
            let mut text = String::new();
            file.read_to_string(&mut text)?;
            Ok(Some(text))
        }
        Err(ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Target of the officeDocument relationship in `_rels/.rels`.
fn office_document_target(rels: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(rels);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                let mut rel_type = None;
                let mut target = None;
                for attr in e.attributes() {
                    let attr = attr?;
                    match attr.key.local_name().as_ref() {
                        b"Type" => rel_type = Some(attr.unescape_value()?.into_owned()),
                        b"Target" => target = Some(attr.unescape_value()?.into_owned()),
                        _ => {}
                    }
                }
                if rel_type.as_deref() == Some(ooxml::REL_OFFICE_DOCUMENT) {
                    return Ok(target.map(|t| t.trim_start_matches('/').to_string()));
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Check if a file is a DOCX package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes start with a ZIP local file header.
pub fn is_zip_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}
