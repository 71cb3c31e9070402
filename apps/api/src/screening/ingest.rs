//! Document ingestion — turns uploaded bytes into plain text.
//!
//! Extraction is best-effort. Low-quality output is returned as-is; only
//! documents that cannot be decoded at all produce an `ExtractionError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document is empty")]
    Empty,

    #[error("could not decode document: {0}")]
    Decode(String),

    #[error("text extraction aborted: {0}")]
    Aborted(String),
}

/// The ingestion collaborator. Carried in `AppState` as `Arc<dyn TextExtractor>`
/// so tests can swap in a plain-text stub.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, document: &[u8]) -> Result<String, ExtractionError>;
}

/// PDF extractor backed by `pdf-extract`. No layout or table awareness.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, document: &[u8]) -> Result<String, ExtractionError> {
        if document.is_empty() {
            return Err(ExtractionError::Empty);
        }
        pdf_extract::extract_text_from_mem(document)
            .map_err(|e| ExtractionError::Decode(e.to_string()))
    }
}
