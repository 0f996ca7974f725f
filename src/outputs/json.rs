//! JSON artifact generation.
//!
//! Serializes the aggregated dashboard rows for consumption by external
//! clients. Files are written under the output directory as
//! `{query-slug}_{date}.json`.

use std::error::Error;

use chrono::Local;
use tokio::fs;
use tracing::{error, info, instrument};

use crate::aggregate::DashboardView;
use crate::utils::slugify;

/// Write the dashboard rows to a JSON file named after the query and today's
/// date.
///
/// Returns the path of the written file.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_dashboard(
    view: &DashboardView<'_>,
    query: &str,
    json_output_dir: &str,
) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(&view.rows)?;

    if let Err(e) = fs::create_dir_all(json_output_dir).await {
        error!(%json_output_dir, error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let filename = format!(
        "{}/{}_{}.json",
        json_output_dir.trim_end_matches('/'),
        slugify(query),
        Local::now().date_naive()
    );

    info!(path = %filename, count = view.rows.len(), "Writing JSON");
    fs::write(&filename, json).await?;
    info!(path = %filename, "Wrote JSON artifact");

    Ok(filename)
}
