//! Aggregation of fetched records into the dashboard view.
//!
//! Records with no resolvable publish date are dropped (silently — partial
//! results render without flags), the remainder is sorted most-recent-first
//! with a stable sort, and the user's sentiment filter is applied last. When
//! the date filter alone empties the input, the view carries an explicit
//! no-results signal so the renderer shows a notice instead of a bare table.

use crate::models::{NewsRecord, SentimentFilter};

/// The ordered, borrowed view the presentation layer consumes.
#[derive(Debug)]
pub struct DashboardView<'a> {
    /// Dated records, newest first, after the sentiment filter.
    pub rows: Vec<&'a NewsRecord>,
    /// True when no record had a resolvable date at all; distinct from a
    /// sentiment filter matching nothing.
    pub no_dated_records: bool,
}

/// Filter, sort, and filter again:
/// 1. Drop records whose published date is unknown.
/// 2. Stable sort descending by date (ties keep original relative order).
/// 3. Keep only records matching the sentiment filter, when not `All`.
pub fn aggregate(records: &[NewsRecord], filter: SentimentFilter) -> DashboardView<'_> {
    let mut rows: Vec<&NewsRecord> = records.iter().filter(|r| r.published.is_some()).collect();
    let no_dated_records = rows.is_empty();

    rows.sort_by(|a, b| b.published.cmp(&a.published));

    if filter != SentimentFilter::All {
        rows.retain(|r| filter.matches(r.sentiment));
    }

    DashboardView {
        rows,
        no_dated_records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_time(NaiveTime::MIN)
    }

    fn record(title: &str, sentiment: Sentiment, published: Option<NaiveDateTime>) -> NewsRecord {
        NewsRecord {
            title: title.to_string(),
            link: "https://example.com".to_string(),
            snippet: "snippet".to_string(),
            sentiment,
            published,
        }
    }

    #[test]
    fn test_unknown_dropped_and_sorted_descending() {
        let records = vec![
            record("undated", Sentiment::Neutral, None),
            record("march", Sentiment::Neutral, Some(date(2024, 3, 1))),
            record("january", Sentiment::Neutral, Some(date(2024, 1, 15))),
            record("may", Sentiment::Neutral, Some(date(2024, 5, 10))),
        ];

        let view = aggregate(&records, SentimentFilter::All);
        let titles: Vec<&str> = view.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["may", "march", "january"]);
        assert!(!view.no_dated_records);
    }

    #[test]
    fn test_stable_tie_break_keeps_fetch_order() {
        let same_day = Some(date(2024, 6, 1));
        let records = vec![
            record("first", Sentiment::Neutral, same_day),
            record("second", Sentiment::Neutral, same_day),
            record("third", Sentiment::Neutral, same_day),
        ];

        let view = aggregate(&records, SentimentFilter::All);
        let titles: Vec<&str> = view.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sentiment_filter_applied_after_sort() {
        let records = vec![
            record("neg-old", Sentiment::Negative, Some(date(2023, 2, 2))),
            record("pos", Sentiment::Positive, Some(date(2024, 2, 2))),
            record("neg-new", Sentiment::Negative, Some(date(2024, 8, 8))),
        ];

        let view = aggregate(&records, SentimentFilter::Negative);
        let titles: Vec<&str> = view.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["neg-new", "neg-old"]);
    }

    #[test]
    fn test_no_dated_records_signal() {
        let records = vec![
            record("a", Sentiment::Positive, None),
            record("b", Sentiment::Negative, None),
        ];

        let view = aggregate(&records, SentimentFilter::All);
        assert!(view.rows.is_empty());
        assert!(view.no_dated_records);
    }

    #[test]
    fn test_filter_emptying_rows_is_not_no_results() {
        let records = vec![record("pos", Sentiment::Positive, Some(date(2024, 1, 1)))];

        let view = aggregate(&records, SentimentFilter::Negative);
        assert!(view.rows.is_empty());
        // Dated records existed; the filter just matched none of them.
        assert!(!view.no_dated_records);
    }

    #[test]
    fn test_empty_input() {
        let view = aggregate(&[], SentimentFilter::All);
        assert!(view.rows.is_empty());
        assert!(view.no_dated_records);
    }
}
