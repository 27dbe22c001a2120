//! Error types for the synopsis library.

use std::io;
use thiserror::Error;

/// Result type alias for synopsis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building, writing, or reading documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The ZIP container could not be written or read.
    #[error("ZIP container error: {0}")]
    Zip(String),

    /// A package part contains malformed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// A requested style cannot be represented in the output format.
    #[error("Unsupported style: {0}")]
    Style(String),

    /// The data is not recognized as a DOCX package.
    #[error("Unknown file format: not a valid DOCX package")]
    UnknownFormat,

    /// A required package part is missing.
    #[error("Missing package part: {0}")]
    MissingPart(String),

    /// Error during preview rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => Error::MissingPart(err.to_string()),
            _ => Error::Zip(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(err.to_string())
    }
}
