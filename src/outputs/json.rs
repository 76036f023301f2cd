//! JSON rendering of retrieval outcomes for programmatic consumers.
//!
//! The outcome is tagged by `kind`:
//!
//! ```json
//! {"kind":"empty_result","topic":"quantum dogs"}
//! ```
//!
//! A `success` carries the topic, the searched window and the rendered
//! articles (fallbacks applied). Every document also carries `message`, the
//! same text the Markdown renderer would print.

use serde::Serialize;

use crate::report::Recommendation;

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(flatten)]
    recommendation: &'a Recommendation,
    message: String,
}

/// Serialize an outcome as pretty-printed JSON.
///
/// # Errors
///
/// Returns the `serde_json` error if serialization fails.
pub fn recommendation_to_json(recommendation: &Recommendation) -> Result<String, serde_json::Error> {
    let envelope = Envelope {
        recommendation,
        message: recommendation.to_string(),
    };
    serde_json::to_string_pretty(&envelope)
}
