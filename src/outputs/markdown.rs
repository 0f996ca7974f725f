//! Markdown rendering of the dashboard view.
//!
//! Produces the same structure the original dashboard displayed: an optional
//! logo header, a summary table of title/sentiment/date, then each story as a
//! linked heading with its snippet. A view with no dated records renders an
//! explicit notice instead of an empty table.

use std::path::Path;

use crate::aggregate::DashboardView;
use crate::models::{Sentiment, SentimentFilter};

/// Marker shown next to each story's sentiment.
fn sentiment_marker(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "🟢",
        Sentiment::Negative => "🔴",
        Sentiment::Neutral => "⚪",
    }
}

/// Render the dashboard view to a Markdown document.
pub fn render_dashboard(
    view: &DashboardView<'_>,
    query: &str,
    filter: SentimentFilter,
    logo_path: Option<&Path>,
) -> String {
    let mut md = String::new();

    if let Some(logo) = logo_path {
        md.push_str(&format!("![logo]({})\n\n", logo.display()));
    }
    md.push_str(&format!("# 📊 News Sentiment Insight — {query}\n\n"));
    md.push_str(&format!("Sentiment filter: **{filter}**\n\n"));

    if view.no_dated_records {
        md.push_str("**No news found for this query.**\n");
        return md;
    }

    md.push_str("| Title | Sentiment | Published |\n");
    md.push_str("|---|---|---|\n");
    for row in &view.rows {
        md.push_str(&format!(
            "| [{}]({}) | {} {} | {} |\n",
            row.title.replace('|', "\\|"),
            row.link,
            sentiment_marker(row.sentiment),
            row.sentiment,
            format_date(row),
        ));
    }
    md.push('\n');

    for row in &view.rows {
        md.push_str(&format!("### [{}]({})\n\n", row.title, row.link));
        md.push_str(&format!("📰 {}\n\n", row.snippet));
        md.push_str(&format!("📅 **Published:** {}\n\n", format_date(row)));
        md.push_str(&format!(
            "{} **Sentiment:** {}\n\n---\n\n",
            sentiment_marker(row.sentiment),
            row.sentiment
        ));
    }

    md
}

fn format_date(row: &crate::models::NewsRecord) -> String {
    match row.published {
        Some(dt) => dt.format("%d %B %Y").to_string(),
        // Aggregation drops undated rows; this only renders in unfiltered dumps.
        None => "Unknown".to_string(),
    }
}
