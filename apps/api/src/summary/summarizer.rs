//! Summary requester — credential → prompt → one completion call.
//!
//! Flow: resolve GROQ_API_KEY → build_prompt → ChatCompletion::complete.
//! A missing key stops before any request is made. A failed request is
//! reported once; there is no retry and no partial result.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::llm_client::prompts::TECHNICAL_TRANSLATOR_SYSTEM;
use crate::llm_client::{ChatCompletion, SamplingParams};
use crate::summary::credentials::{ConfigurationError, CredentialResolver, GROQ_API_KEY};
use crate::summary::prompts::build_prompt;

/// The remote call failed: transport, auth, remote error or malformed response.
#[derive(Debug, Error)]
#[error("Error generating summary with Groq: {0}")]
pub struct SummarizationError(pub String);

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Summarization(#[from] SummarizationError),
}

#[derive(Clone)]
pub struct Summarizer {
    llm: Arc<dyn ChatCompletion>,
    credentials: Arc<CredentialResolver>,
}

impl Summarizer {
    pub fn new(llm: Arc<dyn ChatCompletion>, credentials: Arc<CredentialResolver>) -> Self {
        Self { llm, credentials }
    }

    pub async fn summarize(&self, resume_text: &str, model: &str) -> Result<String, SummarizeError> {
        let api_key = self.credentials.resolve(GROQ_API_KEY)?;
        let prompt = build_prompt(resume_text);

        info!(
            "Requesting project summary: model={model}, prompt_chars={}",
            prompt.len()
        );

        let summary = self
            .llm
            .complete(
                &api_key,
                TECHNICAL_TRANSLATOR_SYSTEM,
                &prompt,
                model,
                &SamplingParams::default(),
            )
            .await
            .map_err(|e| SummarizationError(e.to_string()))?;

        info!("Summary received: {} chars", summary.len());
        Ok(summary)
    }
}
