//! Command-line interface definitions for News Recommender.
//!
//! Provider settings can come from flags, environment variables (a `.env`
//! file is honored), or a YAML file passed with `--config`.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::Overrides;

/// Command-line arguments for the News Recommender application.
///
/// # Examples
///
/// ```sh
/// # Top three articles of the past week
/// news_recommender recommend "climate policy"
///
/// # Anchored to a fixed date, as JSON, into a file
/// news_recommender recommend "climate policy" --date 2024-03-12 --format json -o out/climate.json
///
/// # Classifier status
/// news_recommender detect
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to config.yaml file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// NewsAPI key
    #[arg(long, env = "NEWS_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Provider base URL (scheme and host)
    #[arg(long, env = "NEWS_API_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "NEWS_API_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the most relevant articles of the past week for a topic
    Recommend(RecommendArgs),
    /// Classify an article as real or fake news
    Detect {
        /// Article text to classify
        text: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Topic to search for
    pub topic: String,

    /// Anchor the lookback window to this date (YYYY-MM-DD) instead of today
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl Cli {
    /// Provider settings given on the command line or in the environment.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{raw}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_parsing() {
        let cli = Cli::parse_from([
            "news_recommender",
            "recommend",
            "climate policy",
            "--date",
            "2024-03-12",
        ]);

        let Command::Recommend(args) = cli.command else {
            panic!("expected recommend");
        };
        assert_eq!(args.topic, "climate policy");
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 3, 12));
        assert_eq!(args.format, OutputFormat::Markdown);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "news_recommender",
            "recommend",
            "rust",
            "--api-key",
            "k",
            "--timeout-secs",
            "3",
            "-f",
            "json",
            "-o",
            "/tmp/out.json",
        ]);

        let overrides = cli.overrides();
        assert_eq!(overrides.api_key.as_deref(), Some("k"));
        assert_eq!(overrides.timeout_secs, Some(3));
        let Command::Recommend(args) = cli.command else {
            panic!("expected recommend");
        };
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.output.as_deref(), Some("/tmp/out.json"));
    }

    #[test]
    fn test_detect_without_text() {
        let cli = Cli::parse_from(["news_recommender", "detect"]);
        assert!(matches!(cli.command, Command::Detect { text: None }));
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let result = Cli::try_parse_from(["news_recommender", "recommend", "rust", "--date", "12/03/2024"]);
        assert!(result.is_err());
    }
}
