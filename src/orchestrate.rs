//! Campaign orchestration and the per-session result cache.
//!
//! Two campaigns run concurrently against the same base query: one sweeping
//! the positive keyword set, one the negative set. They share no mutable
//! state; the only synchronization point is the join. Concurrency here is
//! purely for wall-clock latency — running the campaigns sequentially would
//! produce the same multiset of records.

use std::time::Duration;

use futures::future;
use tracing::{info, instrument};

use crate::config::KeywordConfig;
use crate::models::NewsRecord;
use crate::search::{PageSearch, SearchError, fetch_campaign};
use crate::sentiment::SentimentClassifier;

/// Run the positive and negative campaigns concurrently and concatenate the
/// results, positive-campaign records first, each in fetch order.
#[instrument(level = "info", skip_all, fields(base_query = %base_query))]
pub async fn run_campaigns<S: PageSearch>(
    searcher: &S,
    base_query: &str,
    keywords: &KeywordConfig,
    max_results_per_keyword: usize,
    classifier: &SentimentClassifier,
    pace: Duration,
) -> Result<Vec<NewsRecord>, SearchError> {
    let positive = fetch_campaign(
        searcher,
        base_query,
        &keywords.positive,
        max_results_per_keyword,
        classifier,
        pace,
    );
    let negative = fetch_campaign(
        searcher,
        base_query,
        &keywords.negative,
        max_results_per_keyword,
        classifier,
        pace,
    );

    let (positive, negative) = future::join(positive, negative).await;
    let mut combined = positive?;
    let negative = negative?;

    info!(
        positive = combined.len(),
        negative = negative.len(),
        "Campaigns complete"
    );
    combined.extend(negative);
    Ok(combined)
}

/// Fetched records cached for the lifetime of one interactive session.
///
/// The session starts empty and is populated exactly once after the first
/// fetch; filter-only re-renders read the cached records instead of hitting
/// the API again. A fresh fetch happens only when the session is new.
#[derive(Debug, Default)]
pub struct Session {
    records: Option<Vec<NewsRecord>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store fetched records. Once populated a session keeps its records;
    /// repopulation attempts are ignored.
    pub fn populate(&mut self, records: Vec<NewsRecord>) {
        if self.records.is_none() {
            self.records = Some(records);
        }
    }

    pub fn records(&self) -> &[NewsRecord] {
        self.records.as_deref().unwrap_or_default()
    }
}
