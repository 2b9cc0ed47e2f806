use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::summary::summarizer::Summarizer;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no mutable state: each request extracts, prompts and calls out on its own.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document reader. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    pub summarizer: Summarizer,
}
