//! Error types for formdump library.

use std::io;
use thiserror::Error;

/// Result type alias for formdump operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading catalogs and documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading files or writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a ZIP-based Office Open XML package.
    #[error("Unknown file format: not a valid DOCX package")]
    UnknownFormat,

    /// The file is a recognized document format that cannot be read.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The ZIP container is damaged or uses unsupported features.
    #[error("Archive error: {0}")]
    Archive(String),

    /// A required package part or element is missing.
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// A package part is not well-formed XML.
    #[error("XML error in {part}: {message}")]
    Xml {
        /// Package part name (e.g. `word/document.xml`)
        part: String,
        /// Parser message
        message: String,
    },

    /// The form catalog is malformed.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build an XML error for the given package part.
    pub fn xml(part: impl Into<String>, err: roxmltree::Error) -> Self {
        Error::Xml {
            part: part.into(),
            message: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Archive(err.to_string()),
        }
    }
}
