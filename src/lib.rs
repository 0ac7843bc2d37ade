//! # formdump
//!
//! Console audit of Word (`.docx`) form templates.
//!
//! This library opens word-processor documents and prints their paragraph
//! text with formatting hints, and their tables row by row, so a batch of
//! form templates can be reviewed without a document editor.
//!
//! ## Quick Start
//!
//! ```no_run
//! use formdump::{FormCatalog, FormDumper};
//!
//! fn main() -> formdump::Result<()> {
//!     let catalog = FormCatalog::builtin();
//!     let stdout = std::io::stdout();
//!     FormDumper::new().report(&catalog, "E:/Capstone/ElderCare", &mut stdout.lock())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Formatting hints**: bold, alignment and paragraph style per line
//! - **Merged cells**: grid-expanded rows with adjacent repeats collapsed
//! - **Batch tolerant**: missing or broken files are reported and skipped

pub mod catalog;
pub mod detect;
pub mod dumper;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use catalog::{Category, FormCatalog, DEFAULT_BASE_PATH};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, ContainerFormat};
pub use dumper::{BatchSummary, FileOutcome, FormDumper};
pub use error::{Error, Result};
pub use model::{Alignment, Document, Paragraph, Table, TableRow, TextRun};
pub use parser::{DocxParser, ErrorMode, ParseOptions};
pub use render::{ReportOptions, ReportRenderer};

use std::io::Read;
use std::path::Path;

/// Parse a DOCX file and return the document model.
///
/// # Example
///
/// ```no_run
/// use formdump::parse_file;
///
/// let doc = parse_file("form.docx").unwrap();
/// println!("Tables: {}", doc.table_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a DOCX file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a DOCX from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a DOCX from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Render the report body for a DOCX file.
///
/// # Example
///
/// ```no_run
/// use formdump::{to_report, ReportOptions};
///
/// let text = to_report("form.docx", &ReportOptions::default()).unwrap();
/// print!("{}", text);
/// ```
pub fn to_report<P: AsRef<Path>>(path: P, options: &ReportOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::render_document(&doc, options)
}
