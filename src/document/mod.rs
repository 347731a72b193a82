//! Document container reading and text extraction
//!
//! This module opens Word (.docx) containers, parses the body part into a
//! markup tree and rebuilds the visible paragraph text.

pub mod error;
pub(crate) mod io;
pub mod loader;
pub mod models;
pub mod tree;

pub use error::{ExtractError, MarkupError};
pub use loader::{extract, extract_or_describe, extract_paragraphs, Extractor};
pub use models::*;
pub use tree::MarkupTree;
