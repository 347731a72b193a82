//! Paragraph text extraction
//!
//! This module contains the extraction pipeline: open the container, read
//! the body part, build a markup tree and collect paragraph text from it.
//!
//! Every call is self-contained. Nothing is cached between calls and the
//! archive handle is dropped before the call returns.

use std::io::{Read, Seek};
use std::path::Path;
use tracing::debug;

use super::error::ExtractError;
use super::io::{container_from_reader, open_container, read_body_part};
use super::models::{BodyLayout, ExtractedText};
use super::tree::{ElementId, MarkupTree};

/// Extracts paragraph text using a configurable [`BodyLayout`]
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    layout: BodyLayout,
}

impl Extractor {
    pub fn new(layout: BodyLayout) -> Self {
        Extractor { layout }
    }

    pub fn layout(&self) -> &BodyLayout {
        &self.layout
    }

    /// Extract the paragraphs of the document at `path`
    pub fn extract_paragraphs(&self, path: &Path) -> Result<ExtractedText, ExtractError> {
        let body = {
            let mut archive = open_container(path)?;
            read_body_part(&mut archive, path, &self.layout.body_part)?
        };
        self.paragraphs_from_body(&body, path)
    }

    /// Same as [`Extractor::extract_paragraphs`] over an in-memory or
    /// otherwise seekable container. `label` names the source in errors.
    pub fn extract_from_reader<R: Read + Seek>(
        &self,
        reader: R,
        label: &Path,
    ) -> Result<ExtractedText, ExtractError> {
        let body = {
            let mut archive = container_from_reader(reader, label)?;
            read_body_part(&mut archive, label, &self.layout.body_part)?
        };
        self.paragraphs_from_body(&body, label)
    }

    /// Extract the document at `path` as newline-joined paragraphs
    pub fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        self.extract_paragraphs(path).map(|text| text.to_text())
    }

    fn paragraphs_from_body(&self, body: &[u8], path: &Path) -> Result<ExtractedText, ExtractError> {
        let tree = MarkupTree::parse(body).map_err(|source| ExtractError::Markup {
            path: path.to_path_buf(),
            part: self.layout.body_part.clone(),
            source,
        })?;

        let paragraphs: Vec<String> = tree
            .find_all(tree.root(), &self.layout.namespace, &self.layout.paragraph_tag)
            .map(|paragraph| self.paragraph_text(&tree, paragraph))
            .filter(|text| !text.is_empty())
            .collect();

        debug!(
            path = %path.display(),
            elements = tree.len(),
            paragraphs = paragraphs.len(),
            "extracted paragraphs"
        );
        Ok(ExtractedText { paragraphs })
    }

    /// Concatenate every text element under `paragraph`, nested paragraphs
    /// included
    fn paragraph_text(&self, tree: &MarkupTree, paragraph: ElementId) -> String {
        tree.find_all(paragraph, &self.layout.namespace, &self.layout.text_tag)
            .map(|id| tree.element(id).text.as_str())
            .collect()
    }
}

/// Extract the document at `path` with the WordprocessingML layout
pub fn extract(path: impl AsRef<Path>) -> Result<String, ExtractError> {
    Extractor::default().extract(path.as_ref())
}

pub fn extract_paragraphs(path: impl AsRef<Path>) -> Result<ExtractedText, ExtractError> {
    Extractor::default().extract_paragraphs(path.as_ref())
}

/// Text on success, the failure description otherwise
pub fn extract_or_describe(path: impl AsRef<Path>) -> String {
    extract(path).unwrap_or_else(|err| err.to_string())
}
