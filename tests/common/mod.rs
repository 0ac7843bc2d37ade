//! Builds small but complete .docx packages for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

pub const STANDARD_STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/></w:style>
  <w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/></w:style>
  <w:style w:type="paragraph" w:styleId="ListParagraph"><w:name w:val="List Paragraph"/></w:style>
  <w:style w:type="table" w:styleId="TableGrid"><w:name w:val="Table Grid"/></w:style>
</w:styles>"#;

/// Fluent builder for a WordprocessingML package.
pub struct DocxBuilder {
    body: String,
    styles: Option<String>,
    main_part: String,
    include_document: bool,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self {
            body: String::new(),
            styles: Some(STANDARD_STYLES.to_string()),
            main_part: "word/document.xml".to_string(),
            include_document: true,
        }
    }

    /// Append raw body XML.
    pub fn raw(mut self, xml: &str) -> Self {
        self.body.push_str(xml);
        self
    }

    /// Append a plain paragraph.
    pub fn paragraph(self, text: &str) -> Self {
        let xml = format!("<w:p>{}</w:p>", run(text));
        self.raw(&xml)
    }

    /// Append a paragraph with properties (`w:pPr` content) and runs.
    pub fn paragraph_with(self, ppr: &str, runs: &[String]) -> Self {
        let xml = format!("<w:p><w:pPr>{}</w:pPr>{}</w:p>", ppr, runs.concat());
        self.raw(&xml)
    }

    /// Append a table of plain cells; `columns` grid columns are declared.
    pub fn table(self, columns: usize, rows: &[Vec<&str>]) -> Self {
        let grid = "<w:gridCol w:w=\"2000\"/>".repeat(columns);
        let body: String = rows
            .iter()
            .map(|row| {
                let cells: String = row.iter().map(|c| cell(c)).collect();
                format!("<w:tr>{}</w:tr>", cells)
            })
            .collect();
        let xml = format!("<w:tbl><w:tblGrid>{}</w:tblGrid>{}</w:tbl>", grid, body);
        self.raw(&xml)
    }

    /// Close the body with a section.
    pub fn section(self) -> Self {
        self.raw("<w:sectPr><w:pgSz w:w=\"12240\" w:h=\"15840\"/></w:sectPr>")
    }

    pub fn styles(mut self, xml: &str) -> Self {
        self.styles = Some(xml.to_string());
        self
    }

    pub fn without_styles(mut self) -> Self {
        self.styles = None;
        self
    }

    pub fn without_document(mut self) -> Self {
        self.include_document = false;
        self
    }

    /// Store the main part under a non-default name.
    pub fn main_part(mut self, name: &str) -> Self {
        self.main_part = name.to_string();
        self
    }

    pub fn document_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body>{}</w:body></w:document>"#,
            WML_NS, self.body
        )
    }

    pub fn build(&self) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        let package_rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="{}"/>
</Relationships>"#,
            self.main_part
        );
        let (main_dir, main_file) = self
            .main_part
            .rsplit_once('/')
            .unwrap_or(("", self.main_part.as_str()));
        let document_rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

        let mut parts: Vec<(String, String)> = vec![
            ("[Content_Types].xml".to_string(), CONTENT_TYPES.to_string()),
            ("_rels/.rels".to_string(), package_rels),
            (
                format!("{}/_rels/{}.rels", main_dir, main_file),
                document_rels.to_string(),
            ),
        ];
        if self.include_document {
            parts.push((self.main_part.clone(), self.document_xml()));
        }
        if let Some(ref styles) = self.styles {
            parts.push((format!("{}/styles.xml", main_dir), styles.clone()));
        }

        for (name, content) in parts {
            zip.start_file(name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    pub fn write_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, self.build()).unwrap();
    }
}

/// A plain run.
pub fn run(text: &str) -> String {
    format!(r#"<w:r><w:t xml:space="preserve">{}</w:t></w:r>"#, text)
}

/// A run with `w:b`, optionally with an explicit value.
pub fn bold_run(text: &str, val: Option<&str>) -> String {
    let b = match val {
        Some(v) => format!(r#"<w:b w:val="{}"/>"#, v),
        None => "<w:b/>".to_string(),
    };
    format!(
        r#"<w:r><w:rPr>{}</w:rPr><w:t xml:space="preserve">{}</w:t></w:r>"#,
        b, text
    )
}

/// A table cell; `\n` in the text starts a new paragraph.
pub fn cell(text: &str) -> String {
    let paragraphs: String = text
        .split('\n')
        .map(|line| format!("<w:p>{}</w:p>", run(line)))
        .collect();
    format!("<w:tc>{}</w:tc>", paragraphs)
}
