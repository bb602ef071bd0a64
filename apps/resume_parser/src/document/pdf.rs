use std::fmt::Display;
use std::panic::{self, UnwindSafe};
use std::path::Path;

use tracing::debug;

use crate::document::{DocumentContent, DocumentReader};
use crate::errors::ParseError;

/// PDF reader. PDFs carry no table or text-box structure we can recover, so
/// every extracted line becomes a paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReader;

impl DocumentReader for PdfReader {
    fn read(&self, path: &Path) -> Result<DocumentContent, ParseError> {
        if !path.exists() {
            return Err(ParseError::FileNotFound(path.display().to_string()));
        }
        let text = extract_guarded(|| pdf_extract::extract_text(path))?;
        debug!(path = %path.display(), chars = text.len(), "read pdf");
        Ok(content_from_text(&text))
    }
}

/// Runs a PDF extraction, turning both its errors and its panics into
/// `ParseError::Pdf`. pdf-extract panics on some malformed files.
fn extract_guarded<F, E>(extract: F) -> Result<String, ParseError>
where
    F: FnOnce() -> Result<String, E> + UnwindSafe,
    E: Display,
{
    match panic::catch_unwind(extract) {
        Ok(result) => result.map_err(|e| ParseError::Pdf(e.to_string())),
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(ParseError::Pdf(format!("extractor panicked: {reason}")))
        }
    }
}

fn content_from_text(text: &str) -> DocumentContent {
    DocumentContent {
        paragraphs: text.lines().map(str::to_string).collect(),
        ..DocumentContent::default()
    }
}
