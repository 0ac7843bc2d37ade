//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Style name reported when a paragraph has no resolvable style.
pub const DEFAULT_STYLE_NAME: &str = "Normal";

/// A paragraph of text content.
///
/// Formatting attributes that the document leaves unset stay `None`;
/// the accessors apply the defaults (LEFT, "Normal", not bold).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in document order
    pub runs: Vec<TextRun>,

    /// Explicit paragraph alignment
    pub alignment: Option<Alignment>,

    /// Display name of the paragraph style
    pub style_name: Option<String>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Set the alignment.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set the style name.
    pub fn styled(mut self, name: impl Into<String>) -> Self {
        self.style_name = Some(name.into());
        self
    }

    /// Add a plain run.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(TextRun::new(text));
    }

    /// Add a run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.trim().is_empty())
    }

    /// Alignment, LEFT when unset.
    pub fn alignment(&self) -> Alignment {
        self.alignment.unwrap_or_default()
    }

    /// Style name, "Normal" when unset.
    pub fn style_name(&self) -> &str {
        self.style_name.as_deref().unwrap_or(DEFAULT_STYLE_NAME)
    }

    /// True if any direct run is explicitly marked bold.
    ///
    /// Runs nested in hyperlinks contribute text but not boldness.
    pub fn is_bold(&self) -> bool {
        self.runs
            .iter()
            .any(|r| !r.in_hyperlink && r.bold == Some(true))
    }
}

/// A run of text sharing one formatting state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Explicit bold toggle: `Some(false)` turns bold off, `None` inherits
    pub bold: Option<bool>,

    /// Run sits inside a `w:hyperlink` rather than directly in the paragraph
    #[serde(default)]
    pub in_hyperlink: bool,
}

impl TextRun {
    /// Create a run with no direct formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: None,
            in_hyperlink: false,
        }
    }

    /// Create an explicitly bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: Some(true),
            in_hyperlink: false,
        }
    }

    /// Create a run with bold explicitly switched off.
    pub fn not_bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: Some(false),
            in_hyperlink: false,
        }
    }

    /// Mark the run as hyperlink content.
    pub fn linked(mut self) -> Self {
        self.in_hyperlink = true;
        self
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// Upper-case name used in formatting hints.
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "LEFT",
            Alignment::Center => "CENTER",
            Alignment::Right => "RIGHT",
            Alignment::Justify => "JUSTIFY",
        }
    }

    /// Map a WordprocessingML `w:jc` value.
    ///
    /// Values outside the four named alignments (`distribute`,
    /// `thaiDistribute`, ...) return `None`.
    pub fn from_wml(value: &str) -> Option<Self> {
        match value {
            "left" | "start" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" | "end" => Some(Alignment::Right),
            "both" => Some(Alignment::Justify),
            _ => None,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
