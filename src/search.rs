//! Paginated search campaigns against the Google Custom Search JSON API.
//!
//! # Architecture
//!
//! The module uses a trait-based design so the pagination loop can be tested
//! without a network:
//! - [`PageSearch`]: core trait, one page request per call
//! - [`GoogleSearchClient`]: reqwest-backed implementation
//! - [`RetrySearch`]: decorator adding bounded retries with exponential
//!   backoff and jitter for retryable failures
//! - [`fetch_campaign`]: the per-keyword pagination loop that normalizes raw
//!   items into [`NewsRecord`]s
//!
//! # Retry Strategy
//!
//! Connection failures and 429/5xx statuses are retryable; everything else is
//! terminal. Delays follow
//! `min(base_delay * 2^(attempt-1), max_delay) + random_jitter(0..250ms)`.

use std::time::{Duration, Instant};

use rand::{Rng, rng};
use serde::Deserialize;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::dates::resolve_publish_date;
use crate::models::{NO_LINK, NO_SNIPPET, NO_TITLE, NewsRecord, RawSearchItem};
use crate::sentiment::SentimentClassifier;
use crate::utils::truncate_for_log;

/// The API returns at most 10 results per request.
pub const PAGE_SIZE: usize = 10;

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Known low-value domains excluded from every query.
const EXCLUDED_SITES: &[&str] = &[
    "mizuho-ls.co.id",
    "digital-bucket.prod.bfi.co.id",
    "buanafinance.co.id",
];

/// Errors surfaced by a page request.
///
/// A response with no `items` is *not* an error; it ends pagination for the
/// current keyword. Only failures that prevent getting a usable response at
/// all are represented here.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("transport failure talking to the search API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("search API returned HTTP {status}")]
    Status { status: u16 },
    #[error("could not build search request URL: {0}")]
    Url(#[from] url::ParseError),
}

impl SearchError {
    /// Whether a bounded retry is worthwhile: transient transport failures,
    /// rate limiting, and server-side errors.
    pub fn is_retryable(&self) -> bool {
        match self {
            SearchError::Transport(_) => true,
            SearchError::Status { status } => *status == 429 || *status >= 500,
            SearchError::Url(_) => false,
        }
    }
}

/// One decoded page of search results.
#[derive(Debug, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub items: Vec<RawSearchItem>,
}

/// Trait for issuing a single page request.
///
/// Implementors take the full query text and the 1-based start offset and
/// return the decoded page. The trait exists so campaigns can run against
/// scripted fakes in tests.
pub trait PageSearch {
    async fn search_page(&self, query: &str, start: u32) -> Result<SearchPage, SearchError>;
}

/// reqwest-backed [`PageSearch`] implementation for the Custom Search API.
#[derive(Debug, Clone)]
pub struct GoogleSearchClient {
    client: reqwest::Client,
    api_key: String,
    engine_id: String,
}

impl GoogleSearchClient {
    /// Build a client with the request timeout and user agent every page
    /// request relies on. A builder failure is not recoverable into a
    /// half-configured client, so it propagates.
    pub fn new(api_key: String, engine_id: String) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(20))
            .user_agent(concat!("news_insight/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_key,
            engine_id,
        })
    }
}

impl PageSearch for GoogleSearchClient {
    #[instrument(level = "debug", skip_all, fields(start))]
    async fn search_page(&self, query: &str, start: u32) -> Result<SearchPage, SearchError> {
        let url = Url::parse_with_params(
            SEARCH_ENDPOINT,
            &[
                ("q", query),
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("start", start.to_string().as_str()),
            ],
        )?;

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.as_u16() == 429 || status.is_server_error() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            // Quota denials and other client errors end the keyword quietly,
            // matching the provider's behavior of omitting `items`.
            warn!(status = status.as_u16(), "Search API rejected request; treating as end-of-results");
            return Ok(SearchPage::default());
        }

        let body = response.text().await?;
        match serde_json::from_str::<SearchPage>(&body) {
            Ok(page) => Ok(page),
            Err(e) => {
                warn!(
                    error = %e,
                    body_preview = %truncate_for_log(&body, 200),
                    "Malformed search response; treating as end-of-results"
                );
                Ok(SearchPage::default())
            }
        }
    }
}

/// Decorator that adds bounded retries to any [`PageSearch`] implementation.
///
/// Only errors classified as retryable are retried; terminal errors and
/// exhausted attempts propagate to the campaign.
#[derive(Debug)]
pub struct RetrySearch<T> {
    inner: T,
    max_retries: usize,
    base_delay: Duration,
    max_delay: Duration,
}

impl<T> RetrySearch<T>
where
    T: PageSearch,
{
    pub fn new(inner: T, max_retries: usize, base_delay: Duration) -> Self {
        Self {
            inner,
            max_retries,
            base_delay,
            max_delay: Duration::from_secs(30),
        }
    }
}

impl<T> PageSearch for RetrySearch<T>
where
    T: PageSearch,
{
    #[instrument(level = "debug", skip_all)]
    async fn search_page(&self, query: &str, start: u32) -> Result<SearchPage, SearchError> {
        let total_t0 = Instant::now();
        let mut attempt = 0usize;

        loop {
            match self.inner.search_page(query, start).await {
                Ok(page) => return Ok(page),
                Err(e) if !e.is_retryable() => return Err(e),
                Err(e) => {
                    attempt += 1;
                    if attempt > self.max_retries {
                        error!(
                            attempt,
                            max = self.max_retries,
                            elapsed_ms_total = total_t0.elapsed().as_millis() as u128,
                            error = %e,
                            "search_page() exhausted retries"
                        );
                        return Err(e);
                    }

                    let mut delay = self.base_delay.saturating_mul(1 << (attempt - 1));
                    if delay > self.max_delay {
                        delay = self.max_delay;
                    }
                    let jitter_ms: u64 = rng().random_range(0..=250);
                    let delay = delay + Duration::from_millis(jitter_ms);

                    warn!(
                        attempt,
                        max = self.max_retries,
                        ?delay,
                        error = %e,
                        "search_page() attempt failed; backing off"
                    );
                    sleep(delay).await;
                }
            }
        }
    }
}

/// Build the full query text for one keyword sweep: base query, keyword, and
/// the fixed domain exclusions.
fn build_query(base_query: &str, keyword: &str) -> String {
    let mut query = format!("{base_query} {keyword}");
    for site in EXCLUDED_SITES {
        query.push_str(" -site:");
        query.push_str(site);
    }
    query
}

/// Normalize one raw item into a [`NewsRecord`].
///
/// The publish date is resolved first (it needs the whole item), then the
/// text fields are moved out with placeholder substitution, and the sentiment
/// is computed once from the final title/snippet.
fn to_record(item: RawSearchItem, classifier: &SentimentClassifier) -> NewsRecord {
    let published = resolve_publish_date(&item);
    let title = item.title.unwrap_or_else(|| NO_TITLE.to_string());
    let link = item.link.unwrap_or_else(|| NO_LINK.to_string());
    let snippet = item.snippet.unwrap_or_else(|| NO_SNIPPET.to_string());
    let sentiment = classifier.classify(&title, &snippet);

    NewsRecord {
        title,
        link,
        snippet,
        sentiment,
        published,
    }
}

/// Run one campaign: sweep every keyword in order, paginating each at offsets
/// 1, 11, 21, … until the keyword reaches `max_results_per_keyword` or a page
/// comes back empty (end-of-results and quota/error responses look the same
/// and both stop the keyword).
///
/// `pace` is the mandatory delay between successive page requests of the same
/// keyword: a resource-sharing contract with the provider, not an
/// optimization. Pass `Duration::ZERO` only in tests.
///
/// No deduplication is performed: an article matched by several keywords
/// appears once per match, and downstream consumers must accept duplicates.
#[instrument(level = "info", skip_all, fields(base_query = %base_query, keywords = keywords.len()))]
pub async fn fetch_campaign<S: PageSearch>(
    searcher: &S,
    base_query: &str,
    keywords: &[String],
    max_results_per_keyword: usize,
    classifier: &SentimentClassifier,
    pace: Duration,
) -> Result<Vec<NewsRecord>, SearchError> {
    let mut records = Vec::new();

    for keyword in keywords {
        let query = build_query(base_query, keyword);
        let mut fetched = 0usize;
        let mut page: u32 = 0;

        while fetched < max_results_per_keyword {
            if page > 0 {
                sleep(pace).await;
            }
            let start = page * PAGE_SIZE as u32 + 1;
            let result = searcher.search_page(&query, start).await?;

            if result.items.is_empty() {
                debug!(%keyword, start, "Empty page; keyword exhausted");
                break;
            }

            for item in result.items {
                records.push(to_record(item, classifier));
                fetched += 1;
            }
            page += 1;
        }

        info!(%keyword, fetched, "Keyword sweep complete");
    }

    Ok(records)
}
