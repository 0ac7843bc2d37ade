//! DOCX container detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Container format of a word-processor file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFormat {
    /// ZIP package (Office Open XML)
    Zip,
    /// Empty ZIP package (only an end-of-central-directory record)
    EmptyZip,
}

impl std::fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerFormat::Zip => write!(f, "ZIP package"),
            ContainerFormat::EmptyZip => write!(f, "empty ZIP package"),
        }
    }
}

/// ZIP local file header: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
/// ZIP end of central directory (archive with no entries): PK\x05\x06
const ZIP_EMPTY_MAGIC: &[u8] = b"PK\x05\x06";
/// OLE2 compound file, used by legacy .doc and encrypted .docx
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
const HEADER_LEN: usize = 8;

/// Detect the container format from a file path.
///
/// # Example
/// ```no_run
/// use formdump::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("form.docx").unwrap();
/// println!("Container: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<ContainerFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = Vec::with_capacity(HEADER_LEN);
    reader
        .by_ref()
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the container format from the first bytes of a file.
///
/// # Returns
/// * `Ok(ContainerFormat)` if the data starts with a ZIP signature
/// * `Err(Error::UnsupportedFormat)` for legacy OLE2 documents
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<ContainerFormat> {
    if data.starts_with(ZIP_MAGIC) {
        return Ok(ContainerFormat::Zip);
    }
    if data.starts_with(ZIP_EMPTY_MAGIC) {
        return Ok(ContainerFormat::EmptyZip);
    }
    if data.starts_with(OLE_MAGIC) {
        return Err(Error::UnsupportedFormat(
            "OLE2 compound file (legacy .doc or encrypted package)".to_string(),
        ));
    }
    Err(Error::UnknownFormat)
}

/// Check if a file looks like a DOCX package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like a DOCX package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
