//! Document model types.
//!
//! This module defines the read-only view of a word-processor document
//! that the parser produces and the report renderer walks. Attributes a
//! document may leave unset are kept as `Option`s; defaults are applied
//! by the accessors.

mod document;
mod paragraph;
mod table;

pub use document::Document;
pub use paragraph::{Alignment, Paragraph, TextRun, DEFAULT_STYLE_NAME};
pub use table::{Table, TableRow};
