//! Retrieval outcomes and the per-article view used for rendering.
//!
//! [`Recommendation`] distinguishes every outcome of a retrieval so callers
//! can branch on the variant; its `Display` impl (see
//! [`crate::outputs::markdown`]) produces the human-readable text.

use serde::Serialize;

use crate::error::NewsError;
use crate::models::{Article, TimeWindow};
use crate::utils::date_portion;

pub const NO_TITLE: &str = "No title available";
pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_URL: &str = "#";
pub const UNKNOWN_SOURCE: &str = "Unknown source";

pub const PROVIDER_ERROR_MESSAGE: &str = "Error: Unable to fetch news articles.";
pub const MISSING_KEY_MESSAGE: &str =
    "Error: NewsAPI key not configured properly. Please check your API key.";

/// An article with every fallback already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedArticle {
    pub title: String,
    pub url: String,
    pub source: String,
    /// Calendar-date part of `publishedAt`; empty when the provider sent none.
    pub date: String,
    pub description: String,
}

impl From<&Article> for RenderedArticle {
    fn from(article: &Article) -> Self {
        let source = article
            .source
            .as_ref()
            .and_then(|s| s.name.clone())
            .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());
        let date = article
            .published_at
            .as_deref()
            .map(date_portion)
            .unwrap_or_default()
            .to_string();

        Self {
            title: article.title.clone().unwrap_or_else(|| NO_TITLE.to_string()),
            url: article.url.clone().unwrap_or_else(|| NO_URL.to_string()),
            source,
            date,
            description: article
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}

/// A successful retrieval: the topic, the searched window, and up to
/// `max_articles` articles in provider order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub topic: String,
    pub window: TimeWindow,
    pub articles: Vec<RenderedArticle>,
}

/// Outcome of one retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    Success { report: Report },
    /// The provider client could not be acquired; no request was sent.
    ConfigError { detail: String },
    /// The provider answered with a status other than `"ok"`.
    ProviderError,
    /// Transport, HTTP or decoding failure.
    TransportError { detail: String },
    /// The provider found nothing for the topic.
    EmptyResult { topic: String },
}

impl Recommendation {
    /// Map a client-acquisition failure to its diagnostic.
    pub fn config_error(err: &NewsError) -> Self {
        let detail = match err {
            NewsError::MissingApiKey => MISSING_KEY_MESSAGE.to_string(),
            other => format!("Error initializing NewsAPI client: {other}"),
        };
        Recommendation::ConfigError { detail }
    }

    pub fn transport_error(err: &NewsError) -> Self {
        Recommendation::TransportError {
            detail: err.to_string(),
        }
    }

    /// `true` for the three failure kinds; success and empty results are not errors.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Recommendation::ConfigError { .. }
                | Recommendation::ProviderError
                | Recommendation::TransportError { .. }
        )
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Recommendation::Success { .. } => "success",
            Recommendation::ConfigError { .. } => "config_error",
            Recommendation::ProviderError => "provider_error",
            Recommendation::TransportError { .. } => "transport_error",
            Recommendation::EmptyResult { .. } => "empty_result",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArticleSource;

    fn full_article() -> Article {
        Article {
            source: Some(ArticleSource {
                id: None,
                name: Some("Example Wire".to_string()),
            }),
            title: Some("Headline".to_string()),
            description: Some("Body text".to_string()),
            url: Some("https://example.com/a".to_string()),
            published_at: Some("2024-03-05T10:00:00Z".to_string()),
        }
    }

    #[test]
    fn full_article_is_taken_verbatim() {
        let rendered = RenderedArticle::from(&full_article());
        assert_eq!(rendered.title, "Headline");
        assert_eq!(rendered.url, "https://example.com/a");
        assert_eq!(rendered.source, "Example Wire");
        assert_eq!(rendered.date, "2024-03-05");
        assert_eq!(rendered.description, "Body text");
    }

    #[test]
    fn missing_title_falls_back() {
        let article = Article {
            title: None,
            ..full_article()
        };
        let rendered = RenderedArticle::from(&article);
        assert_eq!(rendered.title, NO_TITLE);
        assert_eq!(rendered.description, "Body text");
    }

    #[test]
    fn missing_description_falls_back() {
        let article = Article {
            description: None,
            ..full_article()
        };
        let rendered = RenderedArticle::from(&article);
        assert_eq!(rendered.description, NO_DESCRIPTION);
        assert_eq!(rendered.title, "Headline");
    }

    #[test]
    fn missing_url_falls_back_to_hash() {
        let article = Article {
            url: None,
            ..full_article()
        };
        assert_eq!(RenderedArticle::from(&article).url, "#");
    }

    #[test]
    fn missing_source_or_source_name_falls_back() {
        let article = Article {
            source: None,
            ..full_article()
        };
        assert_eq!(RenderedArticle::from(&article).source, UNKNOWN_SOURCE);

        let article = Article {
            source: Some(ArticleSource {
                id: Some("wire".to_string()),
                name: None,
            }),
            ..full_article()
        };
        assert_eq!(RenderedArticle::from(&article).source, UNKNOWN_SOURCE);
    }

    #[test]
    fn missing_published_at_renders_empty_date() {
        let article = Article {
            published_at: None,
            ..full_article()
        };
        assert_eq!(RenderedArticle::from(&article).date, "");
    }

    #[test]
    fn published_at_without_separator_is_verbatim() {
        let article = Article {
            published_at: Some("2024-03-05".to_string()),
            ..full_article()
        };
        assert_eq!(RenderedArticle::from(&article).date, "2024-03-05");
    }

    #[test]
    fn config_error_detail_depends_on_cause() {
        assert_eq!(
            Recommendation::config_error(&NewsError::MissingApiKey),
            Recommendation::ConfigError {
                detail: MISSING_KEY_MESSAGE.to_string()
            }
        );

        let invalid = NewsError::InvalidBaseUrl {
            url: "::".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        match Recommendation::config_error(&invalid) {
            Recommendation::ConfigError { detail } => {
                assert!(detail.starts_with("Error initializing NewsAPI client: "));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn error_classification() {
        assert!(Recommendation::ProviderError.is_error());
        assert!(
            Recommendation::TransportError {
                detail: "x".to_string()
            }
            .is_error()
        );
        assert!(
            !Recommendation::EmptyResult {
                topic: "x".to_string()
            }
            .is_error()
        );
        assert_eq!(Recommendation::ProviderError.kind(), "provider_error");
    }
}
