//! Data models for the provider's "everything" search and the lookback window.
//!
//! - [`EverythingQuery`]: the parameters of one search request
//! - [`TimeWindow`]: the trailing calendar-day range a search is bounded to
//! - [`EverythingResponse`], [`Article`], [`ArticleSource`]: the provider's JSON envelope
//!
//! The wire types mirror the provider's camelCase field names through serde
//! renames. Every article field is optional on the wire.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The provider's success sentinel in the `status` field.
pub const STATUS_OK: &str = "ok";

/// A trailing range of calendar dates, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl TimeWindow {
    /// Window ending on the calendar date of `now` and starting `lookback_days` earlier.
    ///
    /// The time-of-day part of `now` is ignored. A start before the earliest
    /// representable date is clamped to [`NaiveDate::MIN`].
    pub fn ending_at(now: NaiveDateTime, lookback_days: u32) -> Self {
        let to = now.date();
        let from = to
            .checked_sub_signed(Duration::days(i64::from(lookback_days)))
            .unwrap_or(NaiveDate::MIN);
        Self { from, to }
    }

    /// `from` as `YYYY-MM-DD`.
    pub fn from_param(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    /// `to` as `YYYY-MM-DD`.
    pub fn to_param(&self) -> String {
        self.to.format("%Y-%m-%d").to_string()
    }
}

/// Parameters of a single "search everything" request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EverythingQuery {
    /// Used verbatim; only transport-level encoding is applied.
    pub q: String,
    pub language: String,
    pub sort_by: String,
    pub window: TimeWindow,
}

impl EverythingQuery {
    /// Query-string pairs in the provider's parameter names.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.q.clone()),
            ("language", self.language.clone()),
            ("sortBy", self.sort_by.clone()),
            ("from", self.window.from_param()),
            ("to", self.window.to_param()),
        ]
    }
}

/// Top-level response envelope.
///
/// Error envelopes carry `code` and `message` and no `articles`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EverythingResponse {
    pub status: String,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl EverythingResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// One article record as returned by the provider.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: Option<ArticleSource>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// ISO-8601 date-time, e.g. `2024-03-05T10:00:00Z`.
    #[serde(default)]
    pub published_at: Option<String>,
}

/// The publisher of an article.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
