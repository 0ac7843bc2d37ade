//! Document-level types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A loaded word-processor document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Number of layout sections
    pub sections: usize,

    /// Body paragraphs in document order (table content excluded)
    pub paragraphs: Vec<Paragraph>,

    /// Body tables in document order
    pub tables: Vec<Table>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Number of layout sections.
    pub fn section_count(&self) -> usize {
        self.sections
    }

    /// Number of body paragraphs, empty ones included.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Number of body tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}
