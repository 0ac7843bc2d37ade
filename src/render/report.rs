//! Console report rendering for documents.

use std::io::{self, Write};

use crate::error::Result;
use crate::model::{Alignment, Document, Paragraph, Table, TableRow, DEFAULT_STYLE_NAME};

use super::ReportOptions;

const CATEGORY_RULE: &str = "#";
const FILE_RULE: &str = "=";
const SECTION_RULE: &str = "-";
const BANNER_WIDTH: usize = 80;
const SECTION_WIDTH: usize = 40;

/// Render a document report (everything after the file banner) to a string.
pub fn render_document(doc: &Document, options: &ReportOptions) -> Result<String> {
    let mut buf = Vec::new();
    ReportRenderer::new(options.clone()).write_document(&mut buf, doc)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Line-oriented report renderer.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    options: ReportOptions,
}

impl ReportRenderer {
    /// Create a new renderer.
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Get the report options.
    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Banner opening a service category.
    pub fn write_category_banner<W: Write>(&self, out: &mut W, name: &str) -> io::Result<()> {
        let rule = CATEGORY_RULE.repeat(BANNER_WIDTH);
        writeln!(out)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "# {}", name.to_uppercase())?;
        writeln!(out, "{}", rule)
    }

    /// Banner opening one file's report.
    pub fn write_file_banner<W: Write>(&self, out: &mut W, file_name: &str) -> io::Result<()> {
        let rule = FILE_RULE.repeat(BANNER_WIDTH);
        writeln!(out)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "FILE: {}", file_name)?;
        writeln!(out, "{}", rule)?;
        writeln!(out)
    }

    /// Metadata, paragraphs and tables of a loaded document.
    pub fn write_document<W: Write>(&self, out: &mut W, doc: &Document) -> io::Result<()> {
        writeln!(out, "[DOCUMENT INFO]")?;
        writeln!(out, "Sections: {}", doc.section_count())?;
        writeln!(out, "Paragraphs: {}", doc.paragraph_count())?;
        writeln!(out, "Tables: {}", doc.table_count())?;
        writeln!(out)?;

        writeln!(out, "[CONTENT]")?;
        writeln!(out, "{}", SECTION_RULE.repeat(SECTION_WIDTH))?;
        for line in doc.paragraphs.iter().filter_map(paragraph_line) {
            writeln!(out, "{}", line)?;
        }

        if !doc.tables.is_empty() {
            writeln!(out)?;
            writeln!(out, "[TABLES: {}]", doc.table_count())?;
            writeln!(out, "{}", SECTION_RULE.repeat(SECTION_WIDTH))?;
            for (idx, table) in doc.tables.iter().enumerate() {
                self.write_table(out, idx + 1, table)?;
            }
        }

        writeln!(out)
    }

    fn write_table<W: Write>(&self, out: &mut W, number: usize, table: &Table) -> io::Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "--- Table {} ({} rows x {} cols) ---",
            number,
            table.row_count(),
            table.column_count()
        )?;

        for (row_idx, row) in table.rows.iter().enumerate() {
            if row_idx >= self.options.max_rows {
                // the summary counts from the last printed row's index
                let remaining = table.row_count() + 1 - self.options.max_rows;
                writeln!(out, "  ... ({} more rows)", remaining)?;
                break;
            }
            writeln!(out, "  Row {}: {}", row_idx, self.row_text(row))?;
        }
        Ok(())
    }

    /// Flattened, de-duplicated text of one row.
    pub fn row_text(&self, row: &TableRow) -> String {
        let cells = row
            .cells
            .iter()
            .map(|c| c.trim().replace('\n', self.options.line_separator.as_str()));
        collapse_adjacent(cells).join(self.options.cell_separator.as_str())
    }
}

/// Report line for a paragraph, or `None` if it has no visible text.
pub fn paragraph_line(paragraph: &Paragraph) -> Option<String> {
    let text = paragraph.text();
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let hints = format_hints(paragraph);
    if hints.is_empty() {
        Some(text.to_string())
    } else {
        Some(format!("{} [{}]", text, hints.join(", ")))
    }
}

/// Formatting hints in report order: bold, alignment, style.
pub fn format_hints(paragraph: &Paragraph) -> Vec<String> {
    let mut hints = Vec::new();
    if paragraph.is_bold() {
        hints.push("BOLD".to_string());
    }
    let alignment = paragraph.alignment();
    if alignment != Alignment::Left {
        hints.push(alignment.to_string());
    }
    let style = paragraph.style_name();
    if style != DEFAULT_STYLE_NAME {
        hints.push(format!("Style:{}", style));
    }
    hints
}

/// Collapse runs of identical adjacent values into one.
///
/// Merged cells show up as consecutive repeats; repeats that are not
/// adjacent are kept.
pub fn collapse_adjacent<I>(cells: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut unique: Vec<String> = Vec::new();
    for cell in cells {
        if unique.last() != Some(&cell) {
            unique.push(cell);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextRun;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn table_with_rows(count: usize) -> Table {
        let mut table = Table::new(1);
        for i in 0..count {
            table.add_row(TableRow::new([format!("r{}", i)]));
        }
        table
    }

    #[test]
    fn test_collapse_adjacent() {
        let cells = strings(&["A", "A", "B", "B", "B", "C"]);
        assert_eq!(collapse_adjacent(cells), strings(&["A", "B", "C"]));
    }

    #[test]
    fn test_collapse_keeps_non_adjacent() {
        let cells = strings(&["A", "B", "A", "A"]);
        assert_eq!(collapse_adjacent(cells), strings(&["A", "B", "A"]));
    }

    #[test]
    fn test_collapse_empty_cells() {
        let cells = strings(&["", "", "X"]);
        assert_eq!(collapse_adjacent(cells), strings(&["", "X"]));
    }

    #[test]
    fn test_hint_order() {
        let mut p = Paragraph::with_text("FINAL INCIDENT REPORT")
            .aligned(Alignment::Center)
            .styled("Title");
        p.add_run(TextRun::bold(""));
        assert_eq!(
            paragraph_line(&p).unwrap(),
            "FINAL INCIDENT REPORT [BOLD, CENTER, Style:Title]"
        );
    }

    #[test]
    fn test_no_hints_no_brackets() {
        let p = Paragraph::with_text("  Date:  ")
            .aligned(Alignment::Left)
            .styled("Normal");
        assert_eq!(paragraph_line(&p).unwrap(), "Date:");
    }

    #[test]
    fn test_partial_hints() {
        let p = Paragraph::with_text("Signature").aligned(Alignment::Right);
        assert_eq!(paragraph_line(&p).unwrap(), "Signature [RIGHT]");

        let p = Paragraph::with_text("Remarks").styled("List Paragraph");
        assert_eq!(paragraph_line(&p).unwrap(), "Remarks [Style:List Paragraph]");
    }

    #[test]
    fn test_empty_paragraph_skipped() {
        let p = Paragraph::with_text("   ").styled("Heading 1");
        assert!(paragraph_line(&p).is_none());
        assert!(paragraph_line(&Paragraph::new()).is_none());
    }

    #[test]
    fn test_row_text_flattens_lines() {
        let renderer = ReportRenderer::default();
        let row = TableRow::new([" Name \n(print) ", "Name \n(print)", "Age"]);
        assert_eq!(renderer.row_text(&row), "Name  | (print) | Age");
    }

    #[test]
    fn test_document_sections() {
        let mut doc = Document::new();
        doc.sections = 1;
        doc.add_paragraph(Paragraph::with_text("PROGRESS NOTES").aligned(Alignment::Center));
        doc.add_paragraph(Paragraph::new());

        let report = render_document(&doc, &ReportOptions::default()).unwrap();
        assert_eq!(
            report,
            "[DOCUMENT INFO]\nSections: 1\nParagraphs: 2\nTables: 0\n\n\
             [CONTENT]\n----------------------------------------\n\
             PROGRESS NOTES [CENTER]\n\n"
        );
    }

    #[test]
    fn test_zero_row_table() {
        let mut doc = Document::new();
        doc.add_table(Table::new(4));
        let report = render_document(&doc, &ReportOptions::default()).unwrap();
        assert!(report.contains("[TABLES: 1]"));
        assert!(report.contains("--- Table 1 (0 rows x 4 cols) ---"));
        assert!(!report.contains("Row "));
    }

    #[test]
    fn test_row_cap_at_27_rows() {
        let mut doc = Document::new();
        doc.add_table(table_with_rows(27));
        let report = render_document(&doc, &ReportOptions::default()).unwrap();

        assert!(report.contains("  Row 25: r25\n"));
        assert!(!report.contains("Row 26"));
        assert!(report.contains("  ... (2 more rows)\n"));
        assert_eq!(report.matches("  Row ").count(), 26);
    }

    #[test]
    fn test_row_cap_not_reached() {
        let mut doc = Document::new();
        doc.add_table(table_with_rows(26));
        let report = render_document(&doc, &ReportOptions::default()).unwrap();
        assert!(report.contains("  Row 25: r25\n"));
        assert!(!report.contains("more rows"));
    }

    #[test]
    fn test_row_cap_custom() {
        let mut doc = Document::new();
        doc.add_table(table_with_rows(10));
        let options = ReportOptions::new().with_max_rows(3);
        let report = render_document(&doc, &options).unwrap();
        assert_eq!(report.matches("  Row ").count(), 3);
        assert!(report.contains("  ... (8 more rows)\n"));
    }

    #[test]
    fn test_table_numbering_and_declared_counts() {
        let mut doc = Document::new();
        let mut first = Table::new(6);
        first.add_row(TableRow::new(["A", "A", "B", "B", "B", "C"]));
        doc.add_table(first);
        doc.add_table(Table::new(2));

        let report = render_document(&doc, &ReportOptions::default()).unwrap();
        assert!(report.contains("--- Table 1 (1 rows x 6 cols) ---\n  Row 0: A | B | C\n"));
        assert!(report.contains("--- Table 2 (0 rows x 2 cols) ---"));
    }

    #[test]
    fn test_banners() {
        let renderer = ReportRenderer::default();
        let mut out = Vec::new();
        renderer.write_category_banner(&mut out, "Home Life Service").unwrap();
        renderer.write_file_banner(&mut out, "form.docx").unwrap();
        let text = String::from_utf8(out).unwrap();

        let hashes = "#".repeat(80);
        let equals = "=".repeat(80);
        assert_eq!(
            text,
            format!(
                "\n{h}\n# HOME LIFE SERVICE\n{h}\n\n{e}\nFILE: form.docx\n{e}\n\n",
                h = hashes,
                e = equals
            )
        );
    }
}
