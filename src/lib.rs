//! # synopsis
//!
//! Generates the two-page project synopsis for the College Event &
//! Placement Management System as a DOCX document.
//!
//! The content is fixed. The crate carries the small document layer it
//! needs: an in-memory model, a deterministic OOXML writer with atomic
//! file replacement, and a reader that parses the package back.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> synopsis::Result<()> {
//!     // Writes College_Event_Placement_Management_System_Synopsis.docx
//!     // into the current working directory.
//!     let path = synopsis::generate()?;
//!     println!("{}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Building other documents
//!
//! ```no_run
//! use synopsis::{Alignment, Document};
//!
//! let mut doc = Document::new();
//! doc.add_heading("Report", 1)?.set_alignment(Alignment::Center);
//! doc.add_paragraph("• first\n• second");
//! doc.save("report.docx")?;
//! # Ok::<(), synopsis::Error>(())
//! ```

pub mod content;
pub mod detect;
pub mod error;
pub mod model;
pub mod ooxml;
pub mod reader;
pub mod render;
pub mod writer;

// Re-export commonly used types
pub use content::{synopsis, BULLET, OUTPUT_FILE_NAME};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, DocxFormat};
pub use error::{Error, Result};
pub use model::{Alignment, BlockKind, Document, InlineContent, Metadata, Paragraph};
pub use reader::{read_bytes, read_file};
pub use render::{DocumentStats, JsonFormat, RenderOptions};

use std::path::{Path, PathBuf};

/// Write the synopsis into the current working directory.
///
/// Overwrites any existing file named [`OUTPUT_FILE_NAME`] and returns
/// its path.
pub fn generate() -> Result<PathBuf> {
    generate_in(".")
}

/// Write the synopsis into `dir` and return the file path.
///
/// # Example
///
/// ```no_run
/// let path = synopsis::generate_in("out").unwrap();
/// assert!(path.ends_with(synopsis::OUTPUT_FILE_NAME));
/// ```
pub fn generate_in<P: AsRef<Path>>(dir: P) -> Result<PathBuf> {
    let path = dir.as_ref().join(OUTPUT_FILE_NAME);
    let doc = content::synopsis()?;
    doc.save(&path)?;
    Ok(path)
}
