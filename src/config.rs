//! Client Configuration
//!
//! Backend location and generation ordering, read from the environment.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Used when `VIBE_BACKEND_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const BACKEND_URL_ENV: &str = "VIBE_BACKEND_URL";
pub const ORDERING_ENV: &str = "VIBE_GENERATION_ORDERING";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown generation ordering '{0}' (expected 'arrival' or 'latest')")]
    UnknownOrdering(String),
}

/// How overlapping generate responses are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationOrdering {
    /// Every successful response is prepended when it arrives; the last one to
    /// resolve ends up at the front.
    #[default]
    Arrival,
    /// Only the most recently dispatched request may apply its response;
    /// older responses are discarded.
    Latest,
}

impl FromStr for GenerationOrdering {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arrival" => Ok(GenerationOrdering::Arrival),
            "latest" => Ok(GenerationOrdering::Latest),
            other => Err(ConfigError::UnknownOrdering(other.to_string())),
        }
    }
}

impl fmt::Display for GenerationOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationOrdering::Arrival => f.write_str("arrival"),
            GenerationOrdering::Latest => f.write_str("latest"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service root without trailing slash
    pub base_url: String,
    pub ordering: GenerationOrdering,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            ordering: GenerationOrdering::default(),
        }
    }

    /// Runtime env first (native), then the value baked in at compile time
    /// (wasm has no process environment), then the local default.
    pub fn from_env() -> Self {
        let runtime_url = std::env::var(BACKEND_URL_ENV).ok();
        let runtime_ordering = std::env::var(ORDERING_ENV).ok();
        Self::from_sources(
            runtime_url.as_deref().or(option_env!("VIBE_BACKEND_URL")),
            runtime_ordering.as_deref().or(option_env!("VIBE_GENERATION_ORDERING")),
        )
    }

    fn from_sources(base_url: Option<&str>, ordering: Option<&str>) -> Self {
        let mut config = Self::new(base_url.unwrap_or(DEFAULT_BASE_URL));

        if let Some(raw) = ordering.filter(|s| !s.trim().is_empty()) {
            match raw.parse() {
                Ok(ordering) => config.ordering = ordering,
                Err(e) => tracing::warn!("{}, using '{}'", e, config.ordering),
            }
        }
        config
    }

    /// Absolute URL for a path under the service root
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_sources(None, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.ordering, GenerationOrdering::Arrival);
    }

    #[test]
    fn test_base_url_is_normalized() {
        assert_eq!(ClientConfig::new("https://api.example.com/").base_url, "https://api.example.com");
        assert_eq!(ClientConfig::new("   ").base_url, DEFAULT_BASE_URL);
        assert_eq!(
            ClientConfig::new("http://host:9000//").url("/api/todos"),
            "http://host:9000/api/todos"
        );
    }

    #[test]
    fn test_ordering_parsing() {
        assert_eq!("Latest".parse::<GenerationOrdering>(), Ok(GenerationOrdering::Latest));
        assert_eq!(" arrival ".parse::<GenerationOrdering>(), Ok(GenerationOrdering::Arrival));
        assert_eq!(
            "newest".parse::<GenerationOrdering>(),
            Err(ConfigError::UnknownOrdering("newest".to_string()))
        );
    }

    #[test]
    fn test_invalid_ordering_falls_back() {
        let config = ClientConfig::from_sources(Some("http://svc"), Some("sometimes"));
        assert_eq!(config.base_url, "http://svc");
        assert_eq!(config.ordering, GenerationOrdering::Arrival);

        let config = ClientConfig::from_sources(None, Some("latest"));
        assert_eq!(config.ordering, GenerationOrdering::Latest);
    }
}
