//! Provider and retrieval settings.
//!
//! Settings are layered: built-in defaults, then an optional YAML file, then
//! values coming from the command line or the environment (see [`Overrides`]).
//!
//! ```yaml
//! base_url: https://newsapi.org
//! timeout_secs: 10
//! language: en
//! sort_by: relevancy
//! lookback_days: 7
//! max_articles: 3
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_SORT_BY: &str = "relevancy";
pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;
pub const DEFAULT_MAX_ARTICLES: usize = 3;
pub const MAX_LOOKBACK_DAYS: u32 = 365;

/// Everything needed to build a provider client and run one retrieval.
#[derive(Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct NewsApiConfig {
    /// NewsAPI credential. Blank values count as missing.
    pub api_key: Option<String>,
    /// Scheme and host of the provider, without the `/v2/...` path.
    pub base_url: String,
    /// Upper bound on a single request, connect included.
    pub timeout_secs: u64,
    pub language: String,
    pub sort_by: String,
    /// Length of the trailing window, in calendar days.
    pub lookback_days: u32,
    /// How many articles of the first result page are rendered.
    pub max_articles: usize,
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            language: DEFAULT_LANGUAGE.to_string(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            max_articles: DEFAULT_MAX_ARTICLES,
        }
    }
}

// Hand-written so the credential never ends up in logs.
impl fmt::Debug for NewsApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("language", &self.language)
            .field("sort_by", &self.sort_by)
            .field("lookback_days", &self.lookback_days)
            .field("max_articles", &self.max_articles)
            .finish()
    }
}

/// Values supplied on the command line or through the environment.
///
/// `None` leaves the file/default value untouched.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl NewsApiConfig {
    /// The configured credential, or `None` when absent or blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Apply command-line/environment values on top of this configuration.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(key) = overrides.api_key {
            self.api_key = Some(key);
        }
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        self
    }

    /// Reject settings that would make every retrieval fail or hang.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "timeout_secs",
                reason: "must be at least 1 second".to_string(),
            });
        }
        if self.max_articles == 0 {
            return Err(ConfigError::Invalid {
                field: "max_articles",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.language.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "language",
                reason: "must not be empty".to_string(),
            });
        }
        if self.sort_by.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "sort_by",
                reason: "must not be empty".to_string(),
            });
        }
        if self.lookback_days == 0 || self.lookback_days > MAX_LOOKBACK_DAYS {
            return Err(ConfigError::Invalid {
                field: "lookback_days",
                reason: format!("must be between 1 and {MAX_LOOKBACK_DAYS}"),
            });
        }
        Ok(())
    }
}

/// Load a YAML configuration file. Missing keys fall back to defaults.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the file cannot be read and
/// [`ConfigError::Parse`] if it is not valid YAML for [`NewsApiConfig`].
#[instrument(level = "info")]
pub fn load_config(path: &str) -> Result<NewsApiConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    let config = parse_config(&raw, path)?;
    debug!(?config, "Loaded configuration file");
    Ok(config)
}

fn parse_config(raw: &str, path: &str) -> Result<NewsApiConfig, ConfigError> {
    // An empty file deserializes to YAML null, which serde_yaml refuses for a struct.
    if raw.trim().is_empty() {
        return Ok(NewsApiConfig::default());
    }
    serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}
