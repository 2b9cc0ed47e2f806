//! Text extraction — turns an uploaded resume into one plain-text string.
//!
//! The concrete PDF library sits behind `TextExtractor` so it can be swapped
//! (or mocked) without touching the summary pipeline. Scanned pages with no
//! text layer contribute nothing; there is no OCR fallback.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Error extracting text from PDF: {0}")]
    Open(String),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Where the document comes from. Never mutated; read once per extraction.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    // The HTTP shell only sees uploads; paths serve local callers and tests.
    #[allow(dead_code)]
    Path(PathBuf),
    Bytes(Bytes),
}

/// Carried in `AppState` as `Arc<dyn TextExtractor>`.
///
/// Implementations block; async callers should go through `extract_blocking`.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, source: &DocumentSource) -> Result<String, ExtractionError>;
}

/// `pdf-extract` backed extractor. Pages are read in document order.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, source: &DocumentSource) -> Result<String, ExtractionError> {
        // pdf-extract panics on some malformed pages (e.g. an undefined font).
        let pages = panic::catch_unwind(AssertUnwindSafe(|| match source {
            DocumentSource::Path(path) => pdf_extract::extract_text_by_pages(path),
            DocumentSource::Bytes(bytes) => pdf_extract::extract_text_from_mem_by_pages(bytes),
        }))
        .map_err(|payload| ExtractionError::Open(panic_message(payload.as_ref())))?
        .map_err(|e| ExtractionError::Open(e.to_string()))?;

        debug!("PDF opened: {} page(s)", pages.len());
        Ok(concat_pages(pages))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown cause".to_string());
    format!("unreadable page content ({detail})")
}

/// Appends page texts with no separator and trims the whole result.
/// A document with no pages yields an empty string.
pub fn concat_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        text.push_str(page.as_ref());
    }
    text.trim().to_string()
}

/// Runs an extractor on the blocking pool so the runtime is not stalled by
/// large documents. A panic inside the PDF library surfaces as `Task`.
pub async fn extract_blocking(
    extractor: Arc<dyn TextExtractor>,
    source: DocumentSource,
) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || extractor.extract(&source))
        .await
        .map_err(|e| ExtractionError::Task(e.to_string()))?
}
