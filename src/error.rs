//! Error types for provider access and configuration.

use thiserror::Error;

/// Failures while acquiring or talking to the news search provider.
#[derive(Debug, Error)]
pub enum NewsError {
    /// No API key was configured (absent or blank).
    #[error("NewsAPI key not found; set NEWS_API_KEY")]
    MissingApiKey,

    /// The `reqwest::Client` could not be built.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Network failure, timeout, or an unreadable body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("provider returned HTTP {status}: {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("failed to decode response for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl NewsError {
    /// Whether this failure happened before any request could be sent.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            NewsError::MissingApiKey | NewsError::ClientBuild(_) | NewsError::InvalidBaseUrl { .. }
        )
    }
}

/// Failures while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
