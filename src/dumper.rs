//! Batch driver: walks a catalog and writes one report per form.

use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::catalog::FormCatalog;
use crate::error::Result;
use crate::parser::{DocxParser, ParseOptions};
use crate::render::{render_document, ReportOptions, ReportRenderer};

/// Result of reporting a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The document loaded; holds the report body
    Reported(String),
    /// Opening or reading the document failed; holds the error message
    Failed(String),
}

impl FileOutcome {
    /// Check if the document was reported.
    pub fn is_reported(&self) -> bool {
        matches!(self, FileOutcome::Reported(_))
    }
}

/// Counts of what happened during a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents reported
    pub reported: usize,
    /// Catalog entries whose file does not exist
    pub missing: usize,
    /// Documents that could not be read
    pub failed: usize,
}

impl BatchSummary {
    /// Total catalog entries visited.
    pub fn total(&self) -> usize {
        self.reported + self.missing + self.failed
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files: {} reported, {} not found, {} failed",
            self.total(),
            self.reported,
            self.missing,
            self.failed
        )
    }
}

/// Writes the form report for a catalog or a list of files.
///
/// # Example
///
/// ```no_run
/// use formdump::{FormCatalog, FormDumper};
///
/// let catalog = FormCatalog::builtin();
/// let stdout = std::io::stdout();
/// let summary = FormDumper::new()
///     .report(&catalog, "E:/Capstone/ElderCare", &mut stdout.lock())?;
/// eprintln!("{}", summary);
/// # Ok::<(), formdump::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormDumper {
    parse_options: ParseOptions,
    report_options: ReportOptions,
}

impl FormDumper {
    /// Create a dumper with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set report options.
    pub fn with_report_options(mut self, options: ReportOptions) -> Self {
        self.report_options = options;
        self
    }

    /// Load and render one document.
    ///
    /// The document is loaded completely before anything is rendered, so a
    /// failure never leaves a partial report behind.
    pub fn dump_document(&self, path: &Path) -> FileOutcome {
        let rendered = DocxParser::open_with_options(path, self.parse_options.clone())
            .and_then(|parser| parser.parse())
            .and_then(|doc| render_document(&doc, &self.report_options));

        match rendered {
            Ok(report) => FileOutcome::Reported(report),
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                FileOutcome::Failed(e.to_string())
            }
        }
    }

    /// Report every file of every category, resolving paths against `base`.
    ///
    /// Missing and unreadable files are reported inline and do not stop the
    /// batch; only errors writing to `out` are returned.
    pub fn report<W: Write>(
        &self,
        catalog: &FormCatalog,
        base: impl AsRef<Path>,
        out: &mut W,
    ) -> Result<BatchSummary> {
        let base = base.as_ref();
        let renderer = ReportRenderer::new(self.report_options.clone());
        let mut summary = BatchSummary::default();

        for category in catalog.categories() {
            renderer.write_category_banner(out, &category.name)?;
            for file in &category.files {
                self.write_entry(&renderer, out, file, &base.join(file), &mut summary)?;
            }
        }

        log::info!("{}", summary);
        Ok(summary)
    }

    /// Report individual files, outside of any category.
    pub fn report_files<W, P>(&self, paths: &[P], out: &mut W) -> Result<BatchSummary>
    where
        W: Write,
        P: AsRef<Path>,
    {
        let renderer = ReportRenderer::new(self.report_options.clone());
        let mut summary = BatchSummary::default();

        for path in paths {
            let path = path.as_ref();
            let shown = path.display().to_string();
            self.write_entry(&renderer, out, &shown, path, &mut summary)?;
        }

        log::info!("{}", summary);
        Ok(summary)
    }

    fn write_entry<W: Write>(
        &self,
        renderer: &ReportRenderer,
        out: &mut W,
        shown: &str,
        full_path: &Path,
        summary: &mut BatchSummary,
    ) -> Result<()> {
        if !full_path.exists() {
            log::debug!("Missing {}", full_path.display());
            writeln!(out, "File not found: {}", shown)?;
            summary.missing += 1;
            return Ok(());
        }

        let file_name = full_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| shown.to_string());
        renderer.write_file_banner(out, &file_name)?;

        match self.dump_document(full_path) {
            FileOutcome::Reported(report) => {
                out.write_all(report.as_bytes())?;
                summary.reported += 1;
            }
            FileOutcome::Failed(message) => {
                writeln!(
                    out,
                    "Error processing {}: {}",
                    full_path.display(),
                    message
                )?;
                summary.failed += 1;
            }
        }
        Ok(())
    }
}
