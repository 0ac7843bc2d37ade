//! DOCX document reader using zip and roxmltree.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use roxmltree::Node;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::{Alignment, Document, Paragraph, Table, TableRow, TextRun};

use super::options::ParseOptions;
use super::styles::StyleSheet;
use super::xml::{is_wml, wml, wml_attr, wml_bool, wml_children, PKG_REL_NS, WML_NS};

const PACKAGE_RELS: &str = "_rels/.rels";
const DEFAULT_MAIN_PART: &str = "word/document.xml";
const OFFICE_DOCUMENT_REL: &str = "/officeDocument";
const STYLES_REL: &str = "/styles";

/// Grid positions a row may occupy when the table declares no grid.
const MAX_GRID_COLUMNS: usize = 64;

/// DOCX document parser.
///
/// The package is read eagerly: opening copies the main document and
/// styles parts out of the archive, so no file handle outlives the
/// constructor.
pub struct DocxParser {
    main_part: String,
    document_xml: String,
    styles: StyleSheet,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();

        // Verify it's a ZIP package
        detect_format_from_path(path)?;

        log::debug!("Opening {}", path.display());
        let file = File::open(path)?;
        Self::from_archive(BufReader::new(file), options)
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a DOCX from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        detect_format_from_bytes(data)?;
        Self::from_archive(Cursor::new(data), options)
    }

    /// Parse a DOCX from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a DOCX from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    fn from_archive<R: Read + Seek>(reader: R, options: ParseOptions) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;

        let main_part = main_part_name(&mut archive, &options)?;
        let document_xml = read_part(&mut archive, &main_part)?
            .ok_or_else(|| Error::MissingPart(main_part.clone()))?;

        let styles_part = styles_part_name(&mut archive, &main_part, &options)?;
        let styles = match read_part(&mut archive, &styles_part)? {
            None => StyleSheet::default(),
            Some(xml) => match StyleSheet::parse(&xml) {
                Ok(sheet) => sheet,
                Err(e) if options.is_lenient() => {
                    log::warn!("Ignoring malformed {}: {}", styles_part, e);
                    StyleSheet::default()
                }
                Err(e) => return Err(Error::xml(styles_part, e)),
            },
        };
        log::debug!("{} paragraph styles loaded", styles.len());

        Ok(Self {
            main_part,
            document_xml,
            styles,
            options,
        })
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse the document and return the structured model.
    pub fn parse(&self) -> Result<Document> {
        let xml = roxmltree::Document::parse(&self.document_xml)
            .map_err(|e| Error::xml(self.main_part.as_str(), e))?;
        let body = wml(xml.root_element(), "body")
            .ok_or_else(|| Error::MissingPart(format!("w:body in {}", self.main_part)))?;

        let mut document = Document::new();
        for node in body.children().filter(Node::is_element) {
            if is_wml(&node, "p") {
                let breaks_section = wml(node, "pPr").and_then(|ppr| wml(ppr, "sectPr"));
                if breaks_section.is_some() {
                    document.sections += 1;
                }
                document.add_paragraph(self.parse_paragraph(node));
            } else if is_wml(&node, "tbl") {
                document.add_table(parse_table(node));
            } else if is_wml(&node, "sectPr") {
                document.sections += 1;
            }
        }

        log::debug!(
            "Parsed {}: {} sections, {} paragraphs, {} tables",
            self.main_part,
            document.section_count(),
            document.paragraph_count(),
            document.table_count()
        );
        Ok(document)
    }

    fn parse_paragraph(&self, node: Node) -> Paragraph {
        let ppr = wml(node, "pPr");
        let alignment = ppr
            .and_then(|p| wml_attr(p, "jc"))
            .and_then(Alignment::from_wml);
        let style_id = ppr.and_then(|p| wml_attr(p, "pStyle"));

        Paragraph {
            runs: paragraph_runs(node),
            alignment,
            style_name: self.styles.resolve(style_id),
        }
    }
}

/// Runs of a paragraph, including those inside hyperlinks.
///
/// Hyperlink runs are flagged so they count toward the text only.
fn paragraph_runs(node: Node) -> Vec<TextRun> {
    let mut runs = Vec::new();
    for child in node.children().filter(Node::is_element) {
        if is_wml(&child, "r") {
            runs.push(parse_run(child));
        } else if is_wml(&child, "hyperlink") {
            runs.extend(wml_children(child, "r").map(|r| parse_run(r).linked()));
        }
    }
    runs
}

fn parse_run(node: Node) -> TextRun {
    let bold = wml(node, "rPr").and_then(|rpr| wml_bool(rpr, "b"));

    let mut text = String::new();
    for child in node.children().filter(|n| n.tag_name().namespace() == Some(WML_NS)) {
        match child.tag_name().name() {
            "t" => text.push_str(child.text().unwrap_or("")),
            "tab" | "ptab" => text.push('\t'),
            "cr" => text.push('\n'),
            "noBreakHyphen" => text.push('-'),
            // page and column breaks carry no text
            "br" => match child.attribute((WML_NS, "type")) {
                None | Some("textWrapping") => text.push('\n'),
                Some(_) => {}
            },
            _ => {}
        }
    }

    TextRun {
        text,
        bold,
        in_hyperlink: false,
    }
}

/// Read a table, expanding each row to one cell per grid position.
///
/// A cell spanning `n` grid columns is repeated `n` times, never past the
/// end of the grid; a vertically merged continuation repeats the text of
/// the cell above it at the same grid column. Positions skipped by
/// `w:gridBefore` produce no cells.
fn parse_table(node: Node) -> Table {
    let declared = wml(node, "tblGrid").map(|grid| wml_children(grid, "gridCol").count());
    let grid_width = declared.unwrap_or(MAX_GRID_COLUMNS);

    let mut table = Table::new(declared.unwrap_or(0));
    // text by grid column of the previous row
    let mut above: Vec<String> = Vec::new();

    for tr in wml_children(node, "tr") {
        let offset = wml(tr, "trPr")
            .and_then(|pr| wml_attr(pr, "gridBefore"))
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(0)
            .min(grid_width);

        let mut cells: Vec<String> = Vec::new();
        for tc in wml_children(tr, "tc") {
            let column = offset + cells.len();
            let tc_pr = wml(tc, "tcPr");
            let span = tc_pr
                .and_then(|pr| wml_attr(pr, "gridSpan"))
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(1)
                .min(grid_width.saturating_sub(column))
                .max(1);
            let continues = tc_pr
                .and_then(|pr| wml(pr, "vMerge"))
                .is_some_and(|m| m.attribute((WML_NS, "val")) != Some("restart"));

            let text = if continues {
                above.get(column).cloned().unwrap_or_default()
            } else {
                cell_text(tc)
            };
            for _ in 0..span {
                cells.push(text.clone());
            }
        }

        above = vec![String::new(); offset];
        above.extend(cells.iter().cloned());
        table.add_row(TableRow { cells });
    }

    if declared.is_none() {
        table.columns = table.rows.iter().map(TableRow::len).max().unwrap_or(0);
    }
    table
}

/// Cell text: the text of its paragraphs joined by newlines.
fn cell_text(tc: Node) -> String {
    wml_children(tc, "p")
        .map(|p| {
            paragraph_runs(p)
                .into_iter()
                .map(|r| r.text)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read a package part as UTF-8 text. A missing part yields `None`.
fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(Some(content))
}

/// Locate the main document part via the package relationships.
fn main_part_name<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    options: &ParseOptions,
) -> Result<String> {
    let target = relationship_target(archive, PACKAGE_RELS, "", OFFICE_DOCUMENT_REL, options)?;
    Ok(target.unwrap_or_else(|| DEFAULT_MAIN_PART.to_string()))
}

/// Locate the styles part via the main part's relationships.
fn styles_part_name<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    main_part: &str,
    options: &ParseOptions,
) -> Result<String> {
    let (dir, file_name) = main_part.rsplit_once('/').unwrap_or(("", main_part));
    let rels_part = if dir.is_empty() {
        format!("_rels/{}.rels", file_name)
    } else {
        format!("{}/_rels/{}.rels", dir, file_name)
    };

    let target = relationship_target(archive, &rels_part, dir, STYLES_REL, options)?;
    Ok(target.unwrap_or_else(|| join_part(dir, "styles.xml")))
}

/// Resolve the first internal relationship whose type ends in `rel_suffix`.
fn relationship_target<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    rels_part: &str,
    base_dir: &str,
    rel_suffix: &str,
    options: &ParseOptions,
) -> Result<Option<String>> {
    let Some(xml) = read_part(archive, rels_part)? else {
        return Ok(None);
    };
    let doc = match roxmltree::Document::parse(&xml) {
        Ok(doc) => doc,
        Err(e) if options.is_lenient() => {
            log::warn!("Ignoring malformed {}: {}", rels_part, e);
            return Ok(None);
        }
        Err(e) => return Err(Error::xml(rels_part, e)),
    };

    let target = doc
        .root_element()
        .children()
        .filter(|n| {
            n.tag_name().name() == "Relationship" && n.tag_name().namespace() == Some(PKG_REL_NS)
        })
        .filter(|n| n.attribute("TargetMode") != Some("External"))
        .find(|n| n.attribute("Type").is_some_and(|t| t.ends_with(rel_suffix)))
        .and_then(|n| n.attribute("Target"));

    Ok(target.map(|t| match t.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => join_part(base_dir, t),
    }))
}

/// Join a relative part reference onto a package directory.
fn join_part(base_dir: &str, target: &str) -> String {
    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}
