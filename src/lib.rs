//! paratext: paragraph text extraction for .docx files
//!
//! This library opens Microsoft Word documents, walks the body markup and
//! returns the visible text one paragraph per line.

pub mod config;
pub mod document;
pub mod export;
pub mod logging;

use serde::{Deserialize, Serialize};

/// Output format options
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one paragraph per line
    #[default]
    Text,
    /// One JSON report per input file
    Json,
}

// Re-export commonly used types
pub use config::Config;
pub use document::{
    extract, extract_or_describe, extract_paragraphs, BodyLayout, ExtractError, ExtractedText,
    Extractor,
};
pub use export::ExtractionReport;
