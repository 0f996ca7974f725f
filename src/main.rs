//! # News Insight
//!
//! A news sentiment pipeline that searches a Google Programmable Search
//! engine for stories referencing a company, tags each story by
//! keyword-based sentiment, and renders a date-sorted, filterable dashboard.
//!
//! ## Features
//!
//! - Two concurrent search campaigns (positive and negative keyword sweeps)
//!   with per-keyword pagination, rate-limit pacing, and retry with backoff
//! - Best-effort publish-date extraction from inconsistent provider metadata
//! - Deterministic negative-first keyword sentiment classification
//! - Chronological aggregation with unknown-date filtering and an optional
//!   sentiment filter
//! - Markdown dashboard and JSON artifact outputs
//!
//! ## Usage
//!
//! ```sh
//! news_insight -q "Mizuho Leasing Indonesia" --filter negative -m ./markdown
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Fetching**: Run both keyword campaigns against the search API
//! 2. **Normalizing**: Resolve a date and a sentiment for every raw item
//! 3. **Aggregating**: Drop undated records, sort newest-first, filter
//! 4. **Output**: Print Markdown, optionally write Markdown/JSON artifacts

use std::error::Error;
use std::time::Duration;

use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregate;
mod cli;
mod config;
mod dates;
mod models;
mod orchestrate;
mod outputs;
mod search;
mod sentiment;
mod utils;

use aggregate::aggregate;
use cli::Cli;
use config::{AppConfig, KeywordConfig};
use orchestrate::{Session, run_campaigns};
use outputs::{json, markdown};
use search::{GoogleSearchClient, RetrySearch};
use sentiment::SentimentClassifier;
use utils::ensure_writable_dir;

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
        .init();

    let start_time = std::time::Instant::now();
    info!("news_insight starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.query, ?args.filter, ?args.max_results, "Parsed CLI arguments");

    // --- Fail-fast configuration validation ---
    let config = match AppConfig::from_cli(&args) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };
    let keywords = match KeywordConfig::load(args.keywords.as_deref()) {
        Ok(keywords) => keywords,
        Err(e) => {
            error!(error = %e, "Invalid keyword configuration");
            return Err(e.into());
        }
    };
    info!(
        positive_keywords = keywords.positive.len(),
        negative_keywords = keywords.negative.len(),
        "Configuration validated"
    );

    // Early check: output directories must be writable before fetching.
    for dir in [&args.json_output_dir, &args.markdown_output_dir]
        .into_iter()
        .flatten()
    {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "Output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Fetch once per session ----
    let classifier = SentimentClassifier::new(&keywords.positive, &keywords.negative);
    let searcher = RetrySearch::new(
        GoogleSearchClient::new(config.api_key.clone(), config.engine_id.clone())?,
        5,
        Duration::from_secs(1),
    );

    // A one-shot run always starts a fresh session; populate() keeps the
    // first fetch for any further renders within it.
    let mut session = Session::new();
    info!(query = %args.query, cap = args.max_results, "Fetching news");
    session.populate(
        run_campaigns(
            &searcher,
            &args.query,
            &keywords,
            args.max_results,
            &classifier,
            Duration::from_millis(args.pace_ms),
        )
        .await?,
    );
    info!(count = session.records().len(), "Fetched records");

    // ---- Aggregate and render ----
    let view = aggregate(session.records(), args.filter);
    if view.no_dated_records {
        warn!(query = %args.query, "No dated news found for this query");
    } else {
        info!(
            rows = view.rows.len(),
            filter = %args.filter,
            "Dashboard aggregated"
        );
    }

    let md = markdown::render_dashboard(
        &view,
        &args.query,
        args.filter,
        config.logo_path.as_deref(),
    );
    println!("{md}");

    if let Some(ref markdown_dir) = args.markdown_output_dir {
        let path = format!(
            "{}/{}_{}.md",
            markdown_dir.trim_end_matches('/'),
            utils::slugify(&args.query),
            chrono::Local::now().date_naive()
        );
        if let Err(e) = tokio::fs::write(&path, &md).await {
            error!(path = %path, error = %e, "Failed writing Markdown");
        } else {
            info!(path = %path, "Wrote Markdown dashboard");
        }
    }

    if let Some(ref json_dir) = args.json_output_dir {
        if let Err(e) = json::write_dashboard(&view, &args.query, json_dir).await {
            error!(error = %e, "Failed to write JSON artifact");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
