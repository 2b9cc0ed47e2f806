//! Axum route handlers for the Summary API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_blocking, DocumentSource};
use crate::llm_client::models::{default_model, list_models};
use crate::state::AppState;
use crate::summary::export::SummaryExport;

/// Below this many characters the extraction is treated as a failed read
/// (usually a scanned resume without a text layer).
pub const MIN_EXTRACTED_CHARS: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<&'static str>,
    pub default: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub request_id: Uuid,
    pub file_name: String,
    pub file_size_bytes: usize,
    pub model: String,
    pub extracted_characters: usize,
    pub extracted_text: String,
    pub summary: String,
    pub export: SummaryExport,
    pub generated_at: DateTime<Utc>,
}

/// The parts of the multipart form this API reads.
struct Upload {
    file_name: String,
    bytes: Bytes,
    model: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/models
pub async fn handle_list_models() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: list_models().to_vec(),
        default: default_model(),
    })
}

/// POST /api/v1/summaries
///
/// Multipart form: `file` (PDF, required), `model` (optional).
/// Extract → sufficiency check → one Groq call. Stops at the first failure.
pub async fn handle_summarize(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SummaryResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    let request_id = Uuid::new_v4();

    let span = info_span!("summarize", %request_id, model = %upload.model);
    summarize_upload(state, upload, request_id)
        .instrument(span)
        .await
        .map(Json)
}

async fn summarize_upload(
    state: AppState,
    upload: Upload,
    request_id: Uuid,
) -> Result<SummaryResponse, AppError> {
    info!(
        "Upload received: {} ({:.2} KB)",
        upload.file_name,
        upload.bytes.len() as f64 / 1024.0
    );

    let file_size_bytes = upload.bytes.len();
    let resume_text = extract_blocking(
        state.extractor.clone(),
        DocumentSource::Bytes(upload.bytes),
    )
    .await?;

    let extracted_characters = resume_text.chars().count();
    if extracted_characters < MIN_EXTRACTED_CHARS {
        return Err(AppError::UnprocessableEntity(
            "Could not extract sufficient text from PDF.".to_string(),
        ));
    }
    info!("Extracted {extracted_characters} characters from resume");

    let summary = state
        .summarizer
        .summarize(&resume_text, &upload.model)
        .await?;

    let export = SummaryExport::new(&upload.file_name, &upload.model, &summary);

    Ok(SummaryResponse {
        request_id,
        file_name: upload.file_name,
        file_size_bytes,
        model: upload.model,
        extracted_characters,
        extracted_text: resume_text,
        summary,
        export,
        generated_at: Utc::now(),
    })
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut model: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let content_type = field.content_type().map(str::to_string);
                if !is_pdf(&file_name, content_type.as_deref()) {
                    return Err(AppError::Validation(format!(
                        "{file_name} is not a PDF document"
                    )));
                }
                file = Some((file_name, field.bytes().await?));
            }
            Some("model") => {
                let value = field.text().await?;
                let value = value.trim();
                if !value.is_empty() {
                    model = Some(value.to_string());
                }
            }
            _ => {}
        }
    }

    let (file_name, bytes) =
        file.ok_or_else(|| AppError::Validation("file field is required".to_string()))?;
    if bytes.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }

    Ok(Upload {
        file_name,
        bytes,
        model: model.unwrap_or_else(|| default_model().to_string()),
    })
}

fn is_pdf(file_name: &str, content_type: Option<&str>) -> bool {
    file_name.to_ascii_lowercase().ends_with(".pdf") || content_type == Some("application/pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pdf_by_extension() {
        assert!(is_pdf("resume.pdf", None));
        assert!(is_pdf("RESUME.PDF", Some("application/octet-stream")));
        assert!(!is_pdf("resume.docx", None));
    }

    #[test]
    fn test_is_pdf_by_content_type() {
        assert!(is_pdf("upload", Some("application/pdf")));
        assert!(!is_pdf("upload", Some("text/plain")));
    }

    #[tokio::test]
    async fn test_list_models_response() {
        let Json(response) = handle_list_models().await;
        assert_eq!(response.models, list_models());
        assert_eq!(response.default, "llama-3.3-70b-versatile");
    }
}
