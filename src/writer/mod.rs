//! DOCX package writer.
//!
//! Serializes a [`Document`] into an Office Open XML package. Output is
//! deterministic: ZIP entries carry a fixed timestamp and core-property
//! dates are only written when set, so the same document always produces
//! the same bytes.

mod parts;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::ooxml;
use std::fs;
use std::io::{self, Cursor, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Serialize a document to DOCX bytes.
pub fn to_bytes(doc: &Document) -> Result<Vec<u8>> {
    let cursor = write_to(doc, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

/// Serialize a document as a DOCX package into `writer`.
///
/// Returns the writer once the ZIP central directory has been written.
pub fn write_to<W: Write + Seek>(doc: &Document, writer: W) -> Result<W> {
    // Render the body first so a content error never leaves a half-written archive.
    let document_xml = parts::document_xml(doc)?;

    let entries = [
        (ooxml::CONTENT_TYPES_PART, parts::content_types_xml()),
        (ooxml::PACKAGE_RELS_PART, parts::package_rels_xml()),
        (ooxml::DOCUMENT_PART, document_xml),
        (ooxml::DOCUMENT_RELS_PART, parts::document_rels_xml()),
        (ooxml::STYLES_PART, parts::styles_xml()),
        (ooxml::CORE_PROPS_PART, parts::core_props_xml(&doc.metadata)),
        (ooxml::APP_PROPS_PART, parts::app_props_xml(doc)),
    ];

    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    let mut zip = ZipWriter::new(writer);
    for (name, body) in &entries {
        log::debug!("writing part {} ({} bytes)", name, body.len());
        zip.start_file(*name, options)?;
        zip.write_all(body.as_bytes())?;
    }
    Ok(zip.finish()?)
}

/// Save a document to `path`, replacing any existing file atomically.
///
/// The package is fully serialized in memory, written to a temporary file
/// in the destination directory, flushed, and renamed over `path`. If any
/// step fails the destination is left as it was.
///
/// A read-only destination is refused with a `PermissionDenied` I/O error
/// rather than renamed over, even when the directory would allow it.
pub fn save<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(doc)?;

    if let Ok(meta) = fs::metadata(path) {
        if meta.permissions().readonly() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", path.display()),
            )));
        }
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".synopsis-")
        .suffix(".docx.tmp")
        .tempfile_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    tmp.persist(path).map_err(|e| Error::Io(e.error))?;
    log::info!("saved {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Alignment;
    use std::io::Read;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.add_heading("Report", 1)
            .unwrap()
            .set_alignment(Alignment::Center);
        doc.add_paragraph("Body");
        doc
    }

    #[test]
    fn test_to_bytes_is_zip() {
        let bytes = to_bytes(&sample()).unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));
    }

    #[test]
    fn test_package_contains_all_parts() {
        let bytes = to_bytes(&sample()).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<_> = archive.file_names().collect();
        for part in [
            ooxml::CONTENT_TYPES_PART,
            ooxml::PACKAGE_RELS_PART,
            ooxml::DOCUMENT_PART,
            ooxml::DOCUMENT_RELS_PART,
            ooxml::STYLES_PART,
            ooxml::CORE_PROPS_PART,
            ooxml::APP_PROPS_PART,
        ] {
            assert!(names.contains(&part), "missing {}", part);
        }
    }

    #[test]
    fn test_document_part_content() {
        let bytes = to_bytes(&sample()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name(ooxml::DOCUMENT_PART)
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        assert!(xml.contains("Heading1"));
        assert!(xml.contains(">Body</w:t>"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let first = to_bytes(&sample()).unwrap();
        let second = to_bytes(&sample()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_range_heading_is_not_written() {
        let mut doc = sample();
        doc.blocks[0].style.heading_level = Some(12);

        let result = to_bytes(&doc);
        assert!(matches!(result, Err(Error::Style(_))));
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        std::fs::write(&path, b"old contents").unwrap();

        save(&sample(), &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, to_bytes(&sample()).unwrap());
        // No temporary files left behind.
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.docx");

        let result = save(&sample(), &path);
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_refuses_read_only_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        std::fs::write(&path, b"locked").unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&path, perms).unwrap();

        match save(&sample(), &path) {
            Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("expected PermissionDenied, got {:?}", other),
        }
        assert_eq!(std::fs::read(&path).unwrap(), b"locked");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_content_error_leaves_destination_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        std::fs::write(&path, b"previous").unwrap();

        let mut doc = Document::new();
        doc.add_paragraph("nul \u{0000} byte");
        assert!(matches!(save(&doc, &path), Err(Error::Xml(_))));
        assert_eq!(std::fs::read(&path).unwrap(), b"previous");
    }
}
