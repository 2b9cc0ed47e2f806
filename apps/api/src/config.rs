use anyhow::{Context, Result};

pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Application configuration loaded from environment variables.
///
/// The Groq API key is intentionally absent: it is resolved per request by
/// `summary::credentials` so a key added to the secrets file is picked up
/// without a restart.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub groq_api_url: String,
    pub secrets_file: String,
    pub max_upload_mb: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            groq_api_url: env_or("GROQ_API_URL", DEFAULT_GROQ_API_URL),
            secrets_file: env_or("SECRETS_FILE", "secrets.json"),
            max_upload_mb: env_or("MAX_UPLOAD_MB", "10")
                .parse::<usize>()
                .context("MAX_UPLOAD_MB must be a whole number of megabytes")?,
        })
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
