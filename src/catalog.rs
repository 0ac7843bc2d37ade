//! Form catalog: which files to report, grouped by service category.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Base directory the built-in catalog's paths are relative to.
pub const DEFAULT_BASE_PATH: &str = "E:/Capstone/ElderCare";

/// An ordered list of service categories and their form templates.
///
/// # Example
///
/// ```
/// use formdump::FormCatalog;
///
/// let catalog = FormCatalog::from_json_str(
///     r#"{"categories": [{"name": "Social Service", "files": ["forms/case.docx"]}]}"#,
/// ).unwrap();
/// assert_eq!(catalog.file_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormCatalog {
    /// Base directory for relative paths, if the catalog names one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,

    /// Categories in report order
    pub categories: Vec<Category>,
}

/// One service category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name as shown in the banner (upper-cased on output)
    pub name: String,

    /// File paths relative to the base directory
    pub files: Vec<String>,
}

impl Category {
    /// Create a category.
    pub fn new<I, S>(name: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

impl FormCatalog {
    /// Create a catalog from categories.
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            base_path: None,
            categories,
        }
    }

    /// Set the base directory recorded in the catalog.
    pub fn with_base_path(mut self, base: impl Into<PathBuf>) -> Self {
        self.base_path = Some(base.into());
        self
    }

    /// The ElderCare form templates.
    pub fn builtin() -> Self {
        Self::new(vec![
            Category::new(
                "Social Service",
                ["form_templates/Social Service/2025 CASE FOLDER.docx"],
            ),
            Category::new(
                "Home Life Service",
                [
                    "form_templates/Home Life Service/FINAL INVENTORY UPON DISCHARGE 2025.docx",
                    "form_templates/Home Life Service/FINAL PROGRESS NOTES 2025.docx",
                    "form_templates/Home Life Service/FINAL INVENTORY UPON ADMISSION 2025.docx",
                    "form_templates/Home Life Service/FINAL INCIDENT REPORT 2025.docx",
                    "form_templates/Home Life Service/FIINAL NEW OUT ON PASS 1.docx",
                    "form_templates/Home Life Service/FINAL INVENTORY REPORTS 2025.docx",
                ],
            ),
            Category::new(
                "Psychological Service",
                [
                    "form_templates/Psychological Service/Psych Service Progress Notes.docx",
                    "form_templates/Psychological Service/Psych Service Group Session I Activity.docx",
                    "form_templates/Psychological Service/Inter-Service Referral (1).docx",
                    "form_templates/Psychological Service/Individual Sessions Report Blank Template.docx",
                    "form_templates/Psychological Service/Initial Psychological Assessment.docx",
                    "form_templates/Psychological Service/Psychometricians Report.docx",
                ],
            ),
        ])
        .with_base_path(DEFAULT_BASE_PATH)
    }

    /// Parse and validate a JSON catalog.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a JSON catalog file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check that every category is named and every path is relative.
    pub fn validate(&self) -> Result<()> {
        for category in &self.categories {
            if category.name.trim().is_empty() {
                return Err(Error::InvalidCatalog("category name is empty".to_string()));
            }
            for file in &category.files {
                if file.trim().is_empty() {
                    return Err(Error::InvalidCatalog(format!(
                        "empty file path in category '{}'",
                        category.name
                    )));
                }
                if Path::new(file).is_absolute() || file.starts_with('/') {
                    return Err(Error::InvalidCatalog(format!(
                        "path '{}' in category '{}' is not relative",
                        file, category.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Categories in report order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Total number of files across categories.
    pub fn file_count(&self) -> usize {
        self.categories.iter().map(|c| c.files.len()).sum()
    }

    /// Check if the catalog names no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for FormCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
