// Resume project summaries.
// Implements: prompt building, API key lookup, the Groq summary call, exports
// and the HTTP handlers that drive extraction → summary for one upload.
// All LLM calls go through llm_client; no direct HTTP calls here.

pub mod credentials;
pub mod export;
pub mod handlers;
pub mod prompts;
pub mod summarizer;
