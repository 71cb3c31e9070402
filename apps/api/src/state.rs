use std::sync::Arc;

use crate::config::Config;
use crate::screening::ingest::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document-to-text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
