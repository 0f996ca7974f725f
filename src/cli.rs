//! Command-line interface definitions for News Insight.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Credentials and the branding asset path can be provided via flags or
//! environment variables.

use clap::Parser;

use crate::models::SentimentFilter;

/// Command-line arguments for the News Insight application.
///
/// # Examples
///
/// ```sh
/// # Fetch and render to stdout
/// news_insight -q "Mizuho Leasing Indonesia"
///
/// # Filter the dashboard and persist artifacts
/// news_insight -q "Acme Corp" --filter negative -j ./json -m ./markdown
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Company or brand name to search news for
    #[arg(short, long)]
    pub query: String,

    /// Maximum number of results fetched per keyword
    #[arg(long, default_value_t = 100)]
    pub max_results: usize,

    /// Sentiment filter applied to the rendered dashboard
    #[arg(long, value_enum, default_value_t = SentimentFilter::All)]
    pub filter: SentimentFilter,

    /// Google API key
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Google Programmable Search engine id (cx)
    #[arg(long, env = "GOOGLE_SEARCH_ENGINE_ID")]
    pub search_engine_id: Option<String>,

    /// Path to a logo image embedded at the top of the Markdown output
    #[arg(long, env = "LOGO_PATH")]
    pub logo_path: Option<String>,

    /// Optional YAML file with `positive:` and `negative:` keyword lists
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Optional output directory for the JSON artifact
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Optional output directory for the Markdown dashboard
    #[arg(short, long)]
    pub markdown_output_dir: Option<String>,

    /// Pacing delay between paginated requests of one keyword, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub pace_ms: u64,
}
