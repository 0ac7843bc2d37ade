//! Paragraph style names from `word/styles.xml`.

use std::collections::HashMap;

use super::xml::{wml_attr, WML_NS};

/// Built-in styles whose stored name differs from the name Word shows.
const UI_NAMES: &[(&str, &str)] = &[
    ("caption", "Caption"),
    ("footer", "Footer"),
    ("header", "Header"),
    ("heading 1", "Heading 1"),
    ("heading 2", "Heading 2"),
    ("heading 3", "Heading 3"),
    ("heading 4", "Heading 4"),
    ("heading 5", "Heading 5"),
    ("heading 6", "Heading 6"),
    ("heading 7", "Heading 7"),
    ("heading 8", "Heading 8"),
    ("heading 9", "Heading 9"),
];

/// Paragraph style lookup table.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    /// Style id to display name
    names: HashMap<String, String>,
    /// Display name of the default paragraph style
    default_name: Option<String>,
}

impl StyleSheet {
    /// Parse the styles part.
    ///
    /// Only paragraph styles are kept. A style without `w:name` is known
    /// by its id.
    pub fn parse(xml: &str) -> Result<Self, roxmltree::Error> {
        let doc = roxmltree::Document::parse(xml)?;
        let mut sheet = Self::default();

        for style in doc.root_element().children().filter(|n| {
            n.tag_name().name() == "style" && n.tag_name().namespace() == Some(WML_NS)
        }) {
            let kind = style.attribute((WML_NS, "type")).unwrap_or("paragraph");
            if kind != "paragraph" {
                continue;
            }
            let Some(id) = style.attribute((WML_NS, "styleId")) else {
                continue;
            };
            let name = wml_attr(style, "name")
                .map(ui_name)
                .unwrap_or_else(|| id.to_string());

            let is_default = style
                .attribute((WML_NS, "default"))
                .is_some_and(|v| v == "1" || v == "true" || v == "on");
            // the last default in document order wins
            if is_default {
                sheet.default_name = Some(name.clone());
            }
            sheet.names.insert(id.to_string(), name);
        }

        Ok(sheet)
    }

    /// Resolve a `w:pStyle` id to a display name.
    ///
    /// An absent or unknown id resolves to the default paragraph style,
    /// which may itself be absent.
    pub fn resolve(&self, style_id: Option<&str>) -> Option<String> {
        style_id
            .and_then(|id| self.names.get(id))
            .or(self.default_name.as_ref())
            .cloned()
    }

    /// Number of known paragraph styles.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no paragraph styles are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Map a stored style name to its UI name.
fn ui_name(name: &str) -> String {
    UI_NAMES
        .iter()
        .find(|(stored, _)| *stored == name)
        .map(|(_, ui)| (*ui).to_string())
        .unwrap_or_else(|| name.to_string())
}
