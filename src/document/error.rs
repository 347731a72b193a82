//! Error types for document extraction
//!
//! Every failure carries the path of the input so the rendered message is
//! useful on its own when printed next to other results.

use std::path::PathBuf;
use thiserror::Error;

/// A failed extraction. The `Display` form is the human-readable description
/// handed to callers that only print results.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a readable document archive: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("{} has no {part} entry{}", .path.display(), container_hint(.found))]
    MissingBody {
        path: PathBuf,
        part: String,
        /// What the archive appears to hold instead, when recognizable
        found: Option<&'static str>,
    },

    #[error("cannot read {part} from {}: {source}", .path.display())]
    ReadBody {
        path: PathBuf,
        part: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed markup in {part} of {}: {source}", .path.display())]
    Markup {
        path: PathBuf,
        part: String,
        #[source]
        source: MarkupError,
    },
}

impl ExtractError {
    /// Path of the document the failure belongs to
    pub fn path(&self) -> &std::path::Path {
        match self {
            ExtractError::Open { path, .. }
            | ExtractError::Archive { path, .. }
            | ExtractError::MissingBody { path, .. }
            | ExtractError::ReadBody { path, .. }
            | ExtractError::Markup { path, .. } => path,
        }
    }
}

fn container_hint(found: &Option<&'static str>) -> String {
    match found {
        Some(kind) => format!("; this appears to be {kind}, not a Word document"),
        None => "; the file may be corrupted or is not a Word document".to_string(),
    }
}

/// Reasons a body resource could not be turned into a tree
#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),

    #[error("no root element found")]
    NoRoot,

    #[error("unexpected element <{0}> after the root element")]
    TrailingElement(String),

    #[error("unexpected end of input, <{0}> is not closed")]
    Unclosed(String),

    #[error("text outside the root element: '{0}'")]
    TextOutsideRoot(String),

    #[error("unbound namespace prefix '{0}'")]
    UnboundPrefix(String),
}
