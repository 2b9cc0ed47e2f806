//! LLM Client — the single point of entry for chat-completion calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Groq API directly.
//! Callers depend on the `ChatCompletion` trait; `GroqClient` is the only
//! production implementation.
//!
//! One `complete` call is exactly one HTTP request. There is no retry loop
//! and no client-side timeout; the remote service's own limits apply.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod models;
pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Sampling settings sent with every completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: u32,
    /// 1.0 leaves nucleus sampling effectively off.
    pub top_p: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 4096,
            top_p: 1.0,
        }
    }
}

/// A remote chat-completion backend.
///
/// Carried in `AppState` as `Arc<dyn ChatCompletion>` so tests can count calls.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Sends one system + one user message and returns the first choice's text.
    async fn complete(
        &self,
        api_key: &str,
        system: &str,
        user: &str,
        model: &str,
        params: &SamplingParams,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl<'a> ChatRequest<'a> {
    fn new(system: &'a str, user: &'a str, model: &'a str, params: &SamplingParams) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: params.top_p,
            stream: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Text of the first choice. Additional choices are ignored.
    pub fn first_text(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.message.content)
    }
}

#[derive(Debug, Deserialize)]
struct GroqError {
    error: GroqErrorBody,
}

#[derive(Debug, Deserialize)]
struct GroqErrorBody {
    message: String,
}

/// Groq's OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_url: String,
}

impl GroqClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl ChatCompletion for GroqClient {
    async fn complete(
        &self,
        api_key: &str,
        system: &str,
        user: &str,
        model: &str,
        params: &SamplingParams,
    ) -> Result<String, LlmError> {
        let request_body = ChatRequest::new(system, user, model, params);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let chat: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat.usage {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={}, completion_tokens={}",
                model, usage.prompt_tokens, usage.completion_tokens
            );
        }

        chat.first_text().ok_or(LlmError::EmptyContent)
    }
}

/// Pulls `error.message` out of an error body, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<GroqError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}
