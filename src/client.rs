//! HTTP client for the NewsAPI "everything" search.
//!
//! [`SearchProvider`] is the seam the retriever talks to; [`NewsApiClient`]
//! is the production implementation. A client is built once from a
//! [`NewsApiConfig`] and reused for every retrieval in the process.

use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::NewsApiConfig;
use crate::error::NewsError;
use crate::models::{EverythingQuery, EverythingResponse};
use crate::utils::truncate_for_log;

const EVERYTHING_PATH: &str = "v2/everything";
const API_KEY_HEADER: &str = "X-Api-Key";
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Something that can answer a "search everything" request.
pub trait SearchProvider {
    /// Run one search and return the provider's envelope as-is.
    ///
    /// A response whose `status` is not `"ok"` is still `Ok(..)`; only
    /// transport, HTTP and decoding failures are errors.
    async fn search_everything(
        &self,
        query: &EverythingQuery,
    ) -> Result<EverythingResponse, NewsError>;
}

/// Client for the NewsAPI REST API.
///
/// Use [`NewsApiClient::from_config`] in production or
/// [`NewsApiClient::with_base_url`] to point at a mock server in tests.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl std::fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl NewsApiClient {
    /// Build a client from the configured key, base URL and timeout.
    ///
    /// # Errors
    ///
    /// - [`NewsError::MissingApiKey`] if no non-blank key is configured.
    /// - [`NewsError::InvalidBaseUrl`] if `base_url` does not parse.
    /// - [`NewsError::ClientBuild`] if the `reqwest::Client` cannot be built.
    pub fn from_config(config: &NewsApiConfig) -> Result<Self, NewsError> {
        let api_key = config.api_key().ok_or(NewsError::MissingApiKey)?;
        Self::with_base_url(api_key, config.timeout_secs, &config.base_url)
    }

    /// Build a client against an explicit base URL.
    ///
    /// # Errors
    ///
    /// Same as [`NewsApiClient::from_config`], minus the missing-key case.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, NewsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS.min(timeout_secs)))
            .user_agent(concat!("news_recommender/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(NewsError::ClientBuild)?;

        // Exactly one trailing slash, so joining the endpoint path appends to it.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| NewsError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Full request URL with percent-encoded query parameters.
    fn build_url(&self, query: &EverythingQuery) -> Result<Url, NewsError> {
        let mut url = self
            .base_url
            .join(EVERYTHING_PATH)
            .map_err(|e| NewsError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query.query_pairs() {
                pairs.append_pair(k, &v);
            }
        }
        Ok(url)
    }
}

impl SearchProvider for NewsApiClient {
    #[instrument(level = "info", skip_all, fields(q = %query.q))]
    async fn search_everything(
        &self,
        query: &EverythingQuery,
    ) -> Result<EverythingResponse, NewsError> {
        let url = self.build_url(query)?;
        let t0 = Instant::now();

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        let dt = t0.elapsed();

        if !status.is_success() {
            let envelope = serde_json::from_str::<EverythingResponse>(&body).ok();
            let (code, message) = match envelope {
                Some(e) => (
                    e.code.unwrap_or_else(|| "unknown".to_string()),
                    e.message.unwrap_or_default(),
                ),
                None => ("unknown".to_string(), truncate_for_log(&body, 200)),
            };
            warn!(
                http_status = status.as_u16(),
                %code,
                elapsed_ms = dt.as_millis() as u64,
                "Provider returned an error status"
            );
            return Err(NewsError::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }

        debug!(
            bytes = body.len(),
            elapsed_ms = dt.as_millis() as u64,
            "Provider responded"
        );
        serde_json::from_str(&body).map_err(|source| NewsError::Deserialize {
            context: format!("everything(q={})", query.q),
            source,
        })
    }
}
