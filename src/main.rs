//! # News Recommender
//!
//! Looks up the most relevant news articles of the past week for a topic
//! through the NewsAPI "everything" search and renders the top results as
//! Markdown (or JSON).
//!
//! ## Usage
//!
//! ```sh
//! NEWS_API_KEY=... news_recommender recommend "climate policy"
//! ```
//!
//! ## Flow
//!
//! 1. **Configuration**: defaults, optional YAML file, then flags/environment
//! 2. **Provider**: one [`client::NewsApiClient`] per process, built up front
//! 3. **Retrieval**: one search over the trailing window, top results kept
//! 4. **Output**: Markdown or JSON to stdout or a file
//!
//! Retrieval never fails the process: configuration, provider and transport
//! problems are reported in the output like any other result.

use chrono::{Local, NaiveTime};
use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod client;
mod config;
mod error;
mod models;
mod outputs;
mod report;
mod retriever;
mod utils;

use cli::{Cli, Command, OutputFormat, RecommendArgs};
use client::NewsApiClient;
use config::{NewsApiConfig, load_config};
use outputs::{json, markdown, write_output};
use retriever::{RetrievalSettings, recommend};

const EMPTY_TOPIC_MESSAGE: &str = "Please enter a topic to get recommendations.";
const CLASSIFIER_NOTICE: &str =
    "The machine learning model is currently being set up. Please check back later.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    // Must run before parsing so `.env` values reach clap's env fallbacks.
    if let Ok(path) = dotenvy::dotenv() {
        debug!(path = %path.display(), "Loaded .env file");
    }

    let start_time = std::time::Instant::now();
    let cli = Cli::parse();

    match &cli.command {
        Command::Detect { text } => {
            info!(has_text = text.is_some(), "Classifier requested");
            write_output(CLASSIFIER_NOTICE, None).await?;
        }
        Command::Recommend(args) => {
            let config = resolve_config(&cli)?;
            run_recommend(&config, args).await?;
        }
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, millis = elapsed.as_millis() as u64, "Execution complete");
    Ok(())
}

/// Defaults, then the YAML file (if any), then flags and environment.
fn resolve_config(cli: &Cli) -> Result<NewsApiConfig, Box<dyn Error>> {
    let base = match cli.config.as_deref() {
        Some(path) => load_config(path)?,
        None => NewsApiConfig::default(),
    };
    let config = base.with_overrides(cli.overrides());
    config.validate()?;
    debug!(?config, "Resolved configuration");
    Ok(config)
}

#[instrument(level = "info", skip_all, fields(topic = %args.topic))]
async fn run_recommend(config: &NewsApiConfig, args: &RecommendArgs) -> Result<(), Box<dyn Error>> {
    if args.topic.trim().is_empty() {
        warn!("Empty topic; nothing to search for");
        eprintln!("{EMPTY_TOPIC_MESSAGE}");
        return Ok(());
    }

    let provider = NewsApiClient::from_config(config);
    let settings = RetrievalSettings::from(config);
    let now = match args.date {
        Some(date) => date.and_time(NaiveTime::MIN),
        None => Local::now().naive_local(),
    };

    let recommendation = recommend(&provider, &args.topic, now, &settings).await;
    if recommendation.is_error() {
        warn!(kind = recommendation.kind(), "Retrieval did not succeed");
    } else {
        info!(kind = recommendation.kind(), "Retrieval finished");
    }

    let rendered = match args.format {
        OutputFormat::Markdown => markdown::recommendation_to_markdown(&recommendation),
        OutputFormat::Json => json::recommendation_to_json(&recommendation)?,
    };
    write_output(&rendered, args.output.as_deref()).await
}
