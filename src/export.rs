//! Rendering extraction results for output
//!
//! Truncation happens here, on the way out. Extraction itself always returns
//! the full text.

use anyhow::Result;
use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

use crate::document::{ExtractError, ExtractedText};
use crate::OutputFormat;

const ELLIPSIS: &str = "...";

/// Outcome of one extraction, ready to print
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    pub path: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub paragraphs: usize,
    pub words: usize,
}

impl ExtractionReport {
    pub fn new(
        path: &Path,
        result: &Result<ExtractedText, ExtractError>,
        max_chars: Option<usize>,
    ) -> Self {
        let path = path.display().to_string();
        match result {
            Ok(extracted) => {
                let text = extracted.to_text();
                let text = match max_chars {
                    Some(limit) => truncate_graphemes(&text, limit).into_owned(),
                    None => text,
                };
                ExtractionReport {
                    path,
                    ok: true,
                    text: Some(text),
                    error: None,
                    paragraphs: extracted.paragraph_count(),
                    words: extracted.word_count(),
                }
            }
            Err(err) => ExtractionReport {
                path,
                ok: false,
                text: None,
                error: Some(err.to_string()),
                paragraphs: 0,
                words: 0,
            },
        }
    }

    /// Text when extraction succeeded, `Error: ...` otherwise
    pub fn body(&self) -> String {
        match (&self.text, &self.error) {
            (Some(text), _) => text.clone(),
            (None, Some(error)) => format!("Error: {error}"),
            (None, None) => String::new(),
        }
    }
}

/// Keep the first `limit` grapheme clusters of `text`, marking the cut
pub fn truncate_graphemes(text: &str, limit: usize) -> Cow<'_, str> {
    match text.grapheme_indices(true).nth(limit) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

pub fn render(reports: &[ExtractionReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
    }
}

/// A lone report prints bare; several get a `==> path <==` header each
pub fn render_text(reports: &[ExtractionReport]) -> String {
    if let [report] = reports {
        return report.body();
    }

    reports
        .iter()
        .map(|report| format!("==> {} <==\n{}", report.path, report.body()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extracted(paragraphs: &[&str]) -> ExtractedText {
        ExtractedText {
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_truncate_keeps_short_text() {
        assert!(matches!(truncate_graphemes("short", 10), Cow::Borrowed("short")));
        assert_eq!(truncate_graphemes("exact", 5), "exact");
    }

    #[test]
    fn test_truncate_counts_graphemes() {
        // "e" + combining acute counts as one character
        let text = "cafe\u{301} au lait";
        assert_eq!(truncate_graphemes(text, 4), "cafe\u{301}...");
    }

    #[test]
    fn test_successful_report() {
        let report = ExtractionReport::new(
            Path::new("a.docx"),
            &Ok(extracted(&["Hello World", "Second line"])),
            None,
        );
        assert!(report.ok);
        assert_eq!(report.body(), "Hello World\nSecond line");
        assert_eq!(report.paragraphs, 2);
        assert_eq!(report.words, 4);
    }

    #[test]
    fn test_report_truncates_text_only() {
        let report = ExtractionReport::new(
            Path::new("a.docx"),
            &Ok(extracted(&["abcdefgh"])),
            Some(3),
        );
        assert_eq!(report.text.as_deref(), Some("abc..."));
        assert_eq!(report.words, 1);
    }

    #[test]
    fn test_failed_report() {
        let err = ExtractError::MissingBody {
            path: "b.zip".into(),
            part: "word/document.xml".to_string(),
            found: None,
        };
        let report = ExtractionReport::new(Path::new("b.zip"), &Err(err), Some(3));
        assert!(!report.ok);
        assert!(report.body().starts_with("Error: b.zip has no word/document.xml entry"));
    }

    #[test]
    fn test_render_text_headers_multiple_reports() {
        let reports = vec![
            ExtractionReport::new(Path::new("a.docx"), &Ok(extracted(&["One"])), None),
            ExtractionReport::new(Path::new("b.docx"), &Ok(extracted(&["Two"])), None),
        ];
        assert_eq!(
            render_text(&reports),
            "==> a.docx <==\nOne\n\n==> b.docx <==\nTwo"
        );
        assert_eq!(render_text(&reports[..1]), "One");
    }

    #[test]
    fn test_render_json() {
        let reports = vec![ExtractionReport::new(
            Path::new("a.docx"),
            &Ok(extracted(&["One"])),
            None,
        )];
        let json = render(&reports, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["path"], "a.docx");
        assert_eq!(value[0]["ok"], true);
        assert_eq!(value[0]["text"], "One");
        assert!(value[0].get("error").is_none());
    }
}
