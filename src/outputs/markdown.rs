//! Markdown rendering of retrieval outcomes.
//!
//! A successful report looks like:
//!
//! ```text
//! ### Recent News Articles about climate policy:
//!
//! #### [Headline](https://example.com/a)
//! **Source:** Example Wire | **Date:** 2024-03-05
//!
//! Description text
//!
//! ---
//!
//! ```
//!
//! Every other outcome renders as a single line.

use std::fmt;

use crate::report::{PROVIDER_ERROR_MESSAGE, Recommendation, RenderedArticle, Report};

impl fmt::Display for RenderedArticle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#### [{}]({})", self.title, self.url)?;
        writeln!(f, "**Source:** {} | **Date:** {}\n", self.source, self.date)?;
        write!(f, "{}\n\n---\n\n", self.description)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "### Recent News Articles about {}:\n\n", self.topic)?;
        for article in &self.articles {
            write!(f, "{article}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Success { report } => write!(f, "{report}"),
            Recommendation::ConfigError { detail } => f.write_str(detail),
            Recommendation::ProviderError => f.write_str(PROVIDER_ERROR_MESSAGE),
            Recommendation::TransportError { detail } => {
                write!(f, "Error getting recommendations: {detail}")
            }
            Recommendation::EmptyResult { topic } => {
                write!(f, "No recent news articles found about {topic}.")
            }
        }
    }
}

/// Render any outcome as Markdown.
pub fn recommendation_to_markdown(recommendation: &Recommendation) -> String {
    recommendation.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeWindow;
    use chrono::NaiveDate;

    fn article(n: usize) -> RenderedArticle {
        RenderedArticle {
            title: format!("Title {n}"),
            url: format!("https://example.com/{n}"),
            source: "Example Wire".to_string(),
            date: "2024-03-05".to_string(),
            description: format!("Description {n}"),
        }
    }

    fn report(articles: Vec<RenderedArticle>) -> Report {
        Report {
            topic: "climate policy".to_string(),
            window: TimeWindow {
                from: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                to: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            },
            articles,
        }
    }

    #[test]
    fn article_block_layout() {
        assert_eq!(
            article(1).to_string(),
            "#### [Title 1](https://example.com/1)\n\
             **Source:** Example Wire | **Date:** 2024-03-05\n\n\
             Description 1\n\n---\n\n"
        );
    }

    #[test]
    fn report_has_heading_then_blocks_in_order() {
        let md = report(vec![article(1), article(2)]).to_string();
        assert!(md.starts_with("### Recent News Articles about climate policy:\n\n#### [Title 1]"));
        let first = md.find("Title 1").unwrap();
        let second = md.find("Title 2").unwrap();
        assert!(first < second);
        assert_eq!(md.matches("\n---\n").count(), 2);
    }

    #[test]
    fn single_line_outcomes_use_fixed_literals() {
        assert_eq!(
            Recommendation::ProviderError.to_string(),
            "Error: Unable to fetch news articles."
        );
        assert_eq!(
            Recommendation::EmptyResult {
                topic: "quantum dogs".to_string()
            }
            .to_string(),
            "No recent news articles found about quantum dogs."
        );
        assert_eq!(
            Recommendation::TransportError {
                detail: "connection refused".to_string()
            }
            .to_string(),
            "Error getting recommendations: connection refused"
        );
        assert_eq!(
            Recommendation::ConfigError {
                detail: "Error: bad key".to_string()
            }
            .to_string(),
            "Error: bad key"
        );
    }

    #[test]
    fn success_renders_the_report() {
        let rec = Recommendation::Success {
            report: report(vec![article(1)]),
        };
        assert_eq!(
            recommendation_to_markdown(&rec),
            report(vec![article(1)]).to_string()
        );
    }
}
