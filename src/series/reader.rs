//! CSV ingestion for the upstream sentiment artifact.

use crate::types::{DailyObservation, SignalSeries};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// The artifact columns the oracle consumes. The upstream stage repeats
/// each date's aggregates across every record of that date; its per-record
/// columns (`tweet_text`, `sentiment_score`, ...) are not mapped and are
/// ignored.
#[derive(Debug, Deserialize)]
struct SentimentRow {
    date: String,
    daily_avg_sentiment: f64,
    daily_volume: u64,
}

/// Read the artifact at `path` and reduce it to one observation per date,
/// keeping the first-seen aggregates for each date, sorted ascending.
pub fn read_signal_series(path: &Path) -> Result<SignalSeries> {
    let file = File::open(path)
        .with_context(|| format!("failed to open sentiment artifact {}", path.display()))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: SentimentRow = record.context("malformed row in sentiment artifact")?;
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
            .with_context(|| format!("invalid date {:?} in sentiment artifact", row.date))?;

        rows.push(DailyObservation {
            date,
            avg_sentiment: row.daily_avg_sentiment,
            volume: row.daily_volume,
        });
    }

    let series = SignalSeries::from_rows(rows);
    debug!(
        days = series.len(),
        path = %path.display(),
        "reduced sentiment artifact to daily series"
    );
    Ok(series)
}
