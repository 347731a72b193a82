//! Core data structures for extraction results
//!
//! This module defines the public types produced by an extraction and the
//! names that locate the document body inside its container.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Archive entry holding the main document body
pub const BODY_PART: &str = "word/document.xml";
/// WordprocessingML main namespace (transitional)
pub const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const PARAGRAPH_TAG: &str = "p";
pub const TEXT_TAG: &str = "t";

/// Where the body lives and which elements carry its text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyLayout {
    pub body_part: String,
    pub namespace: String,
    pub paragraph_tag: String,
    pub text_tag: String,
}

impl Default for BodyLayout {
    fn default() -> Self {
        BodyLayout {
            body_part: BODY_PART.to_string(),
            namespace: WORDPROCESSING_NS.to_string(),
            paragraph_tag: PARAGRAPH_TAG.to_string(),
            text_tag: TEXT_TAG.to_string(),
        }
    }
}

/// Non-empty paragraphs of a document, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    pub paragraphs: Vec<String>,
}

impl ExtractedText {
    /// Paragraphs joined by a single newline, without a trailing one
    pub fn to_text(&self) -> String {
        self.paragraphs.join("\n")
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .map(|paragraph| paragraph.unicode_words().count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

impl std::fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<ExtractedText> for String {
    fn from(text: ExtractedText) -> Self {
        text.to_text()
    }
}
