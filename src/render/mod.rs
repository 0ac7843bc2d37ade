//! Rendering module for the console form report.

mod options;
mod report;

pub use options::{ReportOptions, DEFAULT_MAX_ROWS, DEFAULT_SEPARATOR};
pub use report::{collapse_adjacent, format_hints, paragraph_line, render_document, ReportRenderer};
