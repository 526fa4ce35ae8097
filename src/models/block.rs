//! Structured display units derived from a markdown report.

use serde::Serialize;

/// One rendered line of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayBlock {
    Heading { level: u8, text: String },
    ListItem { text: String },
    Paragraph { text: String },
}

impl DisplayBlock {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        DisplayBlock::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn list_item(text: impl Into<String>) -> Self {
        DisplayBlock::ListItem { text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        DisplayBlock::Paragraph { text: text.into() }
    }

    /// The block's visible text.
    pub fn text(&self) -> &str {
        match self {
            DisplayBlock::Heading { text, .. }
            | DisplayBlock::ListItem { text }
            | DisplayBlock::Paragraph { text } => text,
        }
    }
}
