//! Groq models offered for selection, in presentation order.
//!
//! Informational only: nothing here is checked against the live service.

const AVAILABLE_MODELS: [&str; 4] = [
    "llama-3.3-70b-versatile",
    "llama-3.1-70b-versatile",
    "mixtral-8x7b-32768",
    "gemma2-9b-it",
];

pub fn list_models() -> &'static [&'static str] {
    &AVAILABLE_MODELS
}

/// The recommended model — always the first registry entry.
pub fn default_model() -> &'static str {
    AVAILABLE_MODELS[0]
}
