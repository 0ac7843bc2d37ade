//! Report options and configuration.

/// Rows printed per table before the rest is summarized.
pub const DEFAULT_MAX_ROWS: usize = 26;

/// Separator used both inside and between cells.
pub const DEFAULT_SEPARATOR: &str = " | ";

/// Options for rendering a document report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Rows printed per table (at least 1)
    pub max_rows: usize,

    /// Replacement for line breaks inside a cell
    pub line_separator: String,

    /// Separator between cells of a row
    pub cell_separator: String,
}

impl ReportOptions {
    /// Create new report options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rows printed per table.
    pub fn with_max_rows(mut self, rows: usize) -> Self {
        self.max_rows = rows.max(1);
        self
    }

    /// Set the replacement for line breaks inside a cell.
    pub fn with_line_separator(mut self, separator: impl Into<String>) -> Self {
        self.line_separator = separator.into();
        self
    }

    /// Set the separator between cells.
    pub fn with_cell_separator(mut self, separator: impl Into<String>) -> Self {
        self.cell_separator = separator.into();
        self
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            line_separator: DEFAULT_SEPARATOR.to_string(),
            cell_separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}
