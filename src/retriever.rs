//! Topic-scoped recent-news retrieval.
//!
//! One call computes the lookback window, sends exactly one search to the
//! provider, and turns whatever comes back into a [`Recommendation`]. No
//! failure escapes: every error becomes a variant of the outcome.
//!
//! The provider is injected. `main` builds a [`NewsApiClient`] once per
//! process and hands the result of that construction to [`recommend`] on
//! every call.
//!
//! [`NewsApiClient`]: crate::client::NewsApiClient

use chrono::NaiveDateTime;
use std::time::Instant;
use tracing::{error, info, instrument, warn};

use crate::client::SearchProvider;
use crate::config::NewsApiConfig;
use crate::error::NewsError;
use crate::models::{EverythingQuery, TimeWindow};
use crate::report::{Recommendation, RenderedArticle, Report};

/// Search parameters that do not vary between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalSettings {
    pub language: String,
    pub sort_by: String,
    pub lookback_days: u32,
    pub max_articles: usize,
}

impl From<&NewsApiConfig> for RetrievalSettings {
    fn from(config: &NewsApiConfig) -> Self {
        Self {
            language: config.language.clone(),
            sort_by: config.sort_by.clone(),
            lookback_days: config.lookback_days,
            max_articles: config.max_articles,
        }
    }
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self::from(&NewsApiConfig::default())
    }
}

/// Retrieve with a provider that may have failed to construct.
///
/// A construction failure is reported as [`Recommendation::ConfigError`]
/// and no request is sent.
pub async fn recommend<P: SearchProvider>(
    provider: &Result<P, NewsError>,
    topic: &str,
    now: NaiveDateTime,
    settings: &RetrievalSettings,
) -> Recommendation {
    match provider {
        Ok(provider) => retrieve(provider, topic, now, settings).await,
        Err(e) => {
            error!(error = %e, "News provider is not configured");
            Recommendation::config_error(e)
        }
    }
}

/// Search the provider for `topic` over the window ending at `now`.
///
/// The topic is used verbatim and is expected to be non-empty. The first
/// `settings.max_articles` articles are kept in the order the provider
/// returned them.
#[instrument(level = "info", skip_all, fields(%topic, %now))]
pub async fn retrieve<P: SearchProvider>(
    provider: &P,
    topic: &str,
    now: NaiveDateTime,
    settings: &RetrievalSettings,
) -> Recommendation {
    let window = TimeWindow::ending_at(now, settings.lookback_days);
    let query = EverythingQuery {
        q: topic.to_string(),
        language: settings.language.clone(),
        sort_by: settings.sort_by.clone(),
        window,
    };
    info!(from = %window.from, to = %window.to, "Searching recent news");

    let t0 = Instant::now();
    let response = match provider.search_everything(&query).await {
        Ok(response) => response,
        Err(e) if e.is_configuration() => {
            error!(error = %e, "News provider is misconfigured");
            return Recommendation::config_error(&e);
        }
        Err(e) => {
            error!(
                elapsed_ms = t0.elapsed().as_millis() as u64,
                error = %e,
                "News search failed"
            );
            return Recommendation::transport_error(&e);
        }
    };

    if !response.is_ok() {
        warn!(
            status = %response.status,
            code = ?response.code,
            "Provider reported a non-ok status"
        );
        return Recommendation::ProviderError;
    }

    if response.articles.is_empty() {
        info!("No articles found");
        return Recommendation::EmptyResult {
            topic: topic.to_string(),
        };
    }

    let articles: Vec<RenderedArticle> = response
        .articles
        .iter()
        .take(settings.max_articles)
        .map(RenderedArticle::from)
        .collect();
    info!(
        returned = response.articles.len(),
        total_results = ?response.total_results,
        kept = articles.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Retrieved recent news"
    );

    Recommendation::Success {
        report: Report {
            topic: topic.to_string(),
            window,
            articles,
        },
    }
}
