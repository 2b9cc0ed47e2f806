//! API key lookup. Sources are consulted in order; the first non-blank value
//! wins. Values are never logged, only the name of the source that matched.

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

pub const GROQ_API_KEY: &str = "GROQ_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("{key} not found. Please set it in the secrets file or the environment.")]
    MissingCredential { key: String },
}

pub trait CredentialSource: Send + Sync {
    fn name(&self) -> &'static str;
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Structured secret store: a flat JSON object of string values.
///
/// A missing or malformed file counts as "no store", not as an error.
pub struct SecretsFile {
    path: PathBuf,
}

impl SecretsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Option<HashMap<String, serde_json::Value>> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(secrets) => Some(secrets),
            Err(e) => {
                warn!("Ignoring unreadable secrets file {}: {e}", self.path.display());
                None
            }
        }
    }
}

impl CredentialSource for SecretsFile {
    fn name(&self) -> &'static str {
        "secrets file"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.load()?
            .get(key)
            .and_then(|v| v.as_str())
            .map(String::from)
    }
}

/// Process environment (after `.env` has been loaded by `Config`).
pub struct EnvSource;

impl CredentialSource for EnvSource {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

pub struct CredentialResolver {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl CredentialResolver {
    pub fn new(sources: Vec<Box<dyn CredentialSource>>) -> Self {
        Self { sources }
    }

    /// Secrets file first, then the environment.
    pub fn standard(secrets_file: impl Into<PathBuf>) -> Self {
        Self::new(vec![
            Box::new(SecretsFile::new(secrets_file)),
            Box::new(EnvSource),
        ])
    }

    pub fn resolve(&self, key: &str) -> Result<String, ConfigurationError> {
        for source in &self.sources {
            if let Some(value) = source.lookup(key) {
                let value = value.trim();
                if !value.is_empty() {
                    debug!("{key} resolved from {}", source.name());
                    return Ok(value.to_string());
                }
            }
        }
        Err(ConfigurationError::MissingCredential {
            key: key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    struct Fixed(&'static str, Option<&'static str>);

    impl CredentialSource for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn lookup(&self, _key: &str) -> Option<String> {
            self.1.map(String::from)
        }
    }

    fn secrets_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_first_source_wins() {
        let resolver = CredentialResolver::new(vec![
            Box::new(Fixed("store", Some("gsk_store"))),
            Box::new(Fixed("env", Some("gsk_env"))),
        ]);
        assert_eq!(resolver.resolve(GROQ_API_KEY).unwrap(), "gsk_store");
    }

    #[test]
    fn test_blank_value_falls_through() {
        let resolver = CredentialResolver::new(vec![
            Box::new(Fixed("store", Some("   "))),
            Box::new(Fixed("env", Some("gsk_env"))),
        ]);
        assert_eq!(resolver.resolve(GROQ_API_KEY).unwrap(), "gsk_env");
    }

    #[test]
    fn test_missing_everywhere_is_configuration_error() {
        let resolver = CredentialResolver::new(vec![
            Box::new(Fixed("store", None)),
            Box::new(Fixed("env", Some(""))),
        ]);
        let err = resolver.resolve(GROQ_API_KEY).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::MissingCredential { ref key } if key == GROQ_API_KEY
        ));
        assert!(err.to_string().contains("GROQ_API_KEY not found"));
    }

    #[test]
    fn test_no_sources_is_configuration_error() {
        assert!(CredentialResolver::new(vec![]).resolve(GROQ_API_KEY).is_err());
    }

    #[test]
    fn test_secrets_file_lookup() {
        let file = secrets_file(r#"{"GROQ_API_KEY": "gsk_from_file", "OTHER": 3}"#);
        let store = SecretsFile::new(file.path());
        assert_eq!(store.lookup(GROQ_API_KEY).as_deref(), Some("gsk_from_file"));
        assert_eq!(store.lookup("OTHER"), None);
        assert_eq!(store.lookup("ABSENT"), None);
    }

    #[test]
    fn test_secrets_file_missing_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = SecretsFile::new(dir.path().join("secrets.json"));
        assert_eq!(store.lookup(GROQ_API_KEY), None);
    }

    #[test]
    fn test_secrets_file_malformed_is_unavailable() {
        let file = secrets_file("GROQ_API_KEY = \"toml, not json\"");
        let store = SecretsFile::new(file.path());
        assert_eq!(store.lookup(GROQ_API_KEY), None);
    }

    #[test]
    fn test_secrets_file_preferred_over_later_source() {
        let file = secrets_file(r#"{"GROQ_API_KEY": "gsk_from_file"}"#);
        let resolver = CredentialResolver::new(vec![
            Box::new(SecretsFile::new(file.path())),
            Box::new(Fixed("env", Some("gsk_env"))),
        ]);
        assert_eq!(resolver.resolve(GROQ_API_KEY).unwrap(), "gsk_from_file");
    }
}
