//! Best-effort publish-date resolution from search-result metadata.
//!
//! Provider responses are wildly inconsistent: the publish date may live in a
//! `datePublished` meta tag, a lowercase `datepublished` field of a
//! news-article block, a generic `date` meta tag, or only as free text inside
//! the snippet ("15 March 2024 ..."). Each candidate source is tried in a
//! fixed priority order; a source that is absent or fails to parse falls
//! through silently to the next one. `None` means "no resolvable date" and is
//! an expected outcome for a sizable share of items.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::RawSearchItem;

/// Matches dates written out in snippets, e.g. "15 March 2024".
static SNIPPET_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2} \w+ \d{4})\b").unwrap());

/// Resolve a publish date for a raw item, or `None` when every source misses.
///
/// Resolution order:
/// 1. `pagemap.metatags[0].datePublished` (ISO-8601)
/// 2. `pagemap.newsarticle[0].datepublished` (ISO-8601)
/// 3. `pagemap.metatags[0].date` (ISO-8601)
/// 4. Snippet text matching `<day> <month name> <year>`
pub fn resolve_publish_date(item: &RawSearchItem) -> Option<NaiveDateTime> {
    let pagemap = item.pagemap.as_ref();

    let structured_sources = [
        pagemap
            .and_then(|p| p.metatags.first())
            .and_then(|m| m.date_published.as_deref()),
        pagemap
            .and_then(|p| p.newsarticle.first())
            .and_then(|a| a.datepublished.as_deref()),
        pagemap
            .and_then(|p| p.metatags.first())
            .and_then(|m| m.date.as_deref()),
    ];

    for candidate in structured_sources.into_iter().flatten() {
        if let Some(parsed) = parse_iso(candidate) {
            return Some(parsed);
        }
    }

    let snippet = item.snippet.as_deref().unwrap_or_default();
    SNIPPET_DATE
        .captures(snippet)
        .and_then(|caps| NaiveDate::parse_from_str(&caps[1], "%d %B %Y").ok())
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Parse an ISO-8601-ish date string the way providers actually emit them:
/// RFC 3339 with an offset, a naive date-time, or a bare calendar date.
fn parse_iso(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}
