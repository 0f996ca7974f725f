//! Data models for search results and their normalized representations.
//!
//! This module defines the core data structures used throughout the application:
//! - [`RawSearchItem`]: One item of a Google Custom Search response, as-is
//! - [`NewsRecord`]: A normalized article with sentiment and resolved date
//! - [`Sentiment`] / [`SentimentFilter`]: classification and UI filter enums
//!
//! `RawSearchItem` mirrors the provider's JSON, including the loosely-typed
//! `pagemap` metadata block that carries date fields under several different
//! names and casings.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fallback title used when the provider omits one.
pub const NO_TITLE: &str = "No title available";
/// Fallback link used when the provider omits one.
pub const NO_LINK: &str = "#";
/// Fallback snippet used when the provider omits one.
pub const NO_SNIPPET: &str = "No description available";

/// Sentiment assigned to a news record by keyword membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        };
        write!(f, "{s}")
    }
}

/// Sentiment filter selected by the user.
///
/// The dashboard exposes All/Positive/Negative; Neutral records are only
/// visible under All.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SentimentFilter {
    All,
    Positive,
    Negative,
}

impl SentimentFilter {
    /// Whether a record with the given sentiment passes this filter.
    pub fn matches(&self, sentiment: Sentiment) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Positive => sentiment == Sentiment::Positive,
            SentimentFilter::Negative => sentiment == Sentiment::Negative,
        }
    }
}

impl std::fmt::Display for SentimentFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SentimentFilter::All => "all",
            SentimentFilter::Positive => "positive",
            SentimentFilter::Negative => "negative",
        };
        write!(f, "{s}")
    }
}

/// A normalized news record produced by the fetch pipeline.
///
/// `sentiment` is computed from `title` and `snippet` once, at creation time,
/// and never recomputed. `published` is resolved once from the raw item's
/// metadata; `None` is the sentinel for "no resolvable publish date" and is a
/// first-class outcome, not an error.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewsRecord {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub sentiment: Sentiment,
    #[serde(rename = "publishedDate")]
    pub published: Option<NaiveDateTime>,
}

/// One raw result item from the Custom Search API.
///
/// Every field is optional on the wire; normalization substitutes the
/// placeholder constants above.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
    pub pagemap: Option<PageMap>,
}

/// The provider's structured-metadata block. Only the date-bearing parts are
/// modeled; everything else is ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMap {
    #[serde(default)]
    pub metatags: Vec<MetaTags>,
    #[serde(default)]
    pub newsarticle: Vec<NewsArticleMeta>,
}

/// Meta-tag block carrying `datePublished` and the generic `date` field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetaTags {
    #[serde(rename = "datePublished")]
    pub date_published: Option<String>,
    pub date: Option<String>,
}

/// Article-specific metadata block with its own lowercase date field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsArticleMeta {
    pub datepublished: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_item_full_deserialization() {
        let json = r#"{
            "title": "Acme Corp umumkan ekspansi",
            "link": "https://example.com/berita/acme",
            "snippet": "15 March 2024 ... Acme Corp mengumumkan ekspansi regional.",
            "pagemap": {
                "metatags": [{"datePublished": "2024-03-15T08:00:00+07:00"}],
                "newsarticle": [{"datepublished": "2024-03-15"}]
            }
        }"#;

        let item: RawSearchItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title.as_deref(), Some("Acme Corp umumkan ekspansi"));
        let pagemap = item.pagemap.unwrap();
        assert_eq!(
            pagemap.metatags[0].date_published.as_deref(),
            Some("2024-03-15T08:00:00+07:00")
        );
        assert_eq!(
            pagemap.newsarticle[0].datepublished.as_deref(),
            Some("2024-03-15")
        );
    }

    #[test]
    fn test_raw_item_sparse_deserialization() {
        // Items frequently arrive with no pagemap at all.
        let item: RawSearchItem = serde_json::from_str(r#"{"title": "Judul"}"#).unwrap();
        assert!(item.link.is_none());
        assert!(item.snippet.is_none());
        assert!(item.pagemap.is_none());
    }

    #[test]
    fn test_pagemap_ignores_unrelated_blocks() {
        let json = r#"{
            "cse_thumbnail": [{"src": "x", "width": "1", "height": "1"}],
            "metatags": [{"og:title": "x", "date": "2024-01-02"}]
        }"#;
        let pagemap: PageMap = serde_json::from_str(json).unwrap();
        assert_eq!(pagemap.metatags[0].date.as_deref(), Some("2024-01-02"));
        assert!(pagemap.metatags[0].date_published.is_none());
        assert!(pagemap.newsarticle.is_empty());
    }

    #[test]
    fn test_record_serialization_field_names() {
        let record = NewsRecord {
            title: "Judul".to_string(),
            link: "https://example.com".to_string(),
            snippet: "Cuplikan".to_string(),
            sentiment: Sentiment::Positive,
            published: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"publishedDate\":null"));
        assert!(json.contains("\"sentiment\":\"Positive\""));
    }

    #[test]
    fn test_filter_matches() {
        assert!(SentimentFilter::All.matches(Sentiment::Neutral));
        assert!(SentimentFilter::Negative.matches(Sentiment::Negative));
        assert!(!SentimentFilter::Negative.matches(Sentiment::Positive));
        assert!(!SentimentFilter::Positive.matches(Sentiment::Neutral));
    }
}
