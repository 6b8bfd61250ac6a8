//! Boundary adapter between the upstream sentiment artifact and the oracle
//! engine.

use crate::oracle::{MoodOracle, OracleConfig, OracleInput, OracleResult};
use crate::series::reader::read_signal_series;
use crate::types::SignalSeries;
use anyhow::{bail, Result};
use std::path::Path;
use tracing::{debug, instrument};

/// Reads the upstream tabular artifact, derives the engine inputs, and
/// delegates to the oracle.
pub struct SeriesAdapter {
    oracle: MoodOracle,
}

impl SeriesAdapter {
    /// Create a new adapter with its own oracle built from `config`.
    pub fn new(config: OracleConfig) -> Self {
        Self {
            oracle: MoodOracle::new(config),
        }
    }

    /// Create an adapter around an existing oracle.
    pub fn with_oracle(oracle: MoodOracle) -> Self {
        Self { oracle }
    }

    /// Evaluate the artifact at `path`.
    ///
    /// When no reference series is supplied, a 1..=N integer ramp stands in
    /// as a placeholder signal for demonstration, not a market proxy.
    #[instrument(skip(self, reference_series))]
    pub fn evaluate_csv(
        &self,
        path: &Path,
        reference_series: Option<Vec<f64>>,
    ) -> Result<OracleResult> {
        let series = read_signal_series(path)?;
        self.evaluate_series(&series, reference_series)
    }

    /// Evaluate an already-loaded daily series.
    pub fn evaluate_series(
        &self,
        series: &SignalSeries,
        reference_series: Option<Vec<f64>>,
    ) -> Result<OracleResult> {
        let (yesterday, today) = match series.latest_pair() {
            Some(pair) => pair,
            None => bail!(
                "need at least 2 days of data to compute velocity, got {}",
                series.len()
            ),
        };

        let mut sentiment_series = series.sentiment_values();
        let mut reference_series = reference_series
            .unwrap_or_else(|| (1..=series.len()).map(|value| value as f64).collect());

        // Right-align both series to the shorter length.
        let aligned_len = sentiment_series.len().min(reference_series.len());
        sentiment_series.drain(..sentiment_series.len() - aligned_len);
        reference_series.drain(..reference_series.len() - aligned_len);

        debug!(
            days = series.len(),
            aligned = aligned_len,
            today = %today.date,
            "derived oracle input from daily series"
        );

        let input = OracleInput {
            daily_avg_sentiment: today.avg_sentiment,
            today_volume: today.volume,
            yesterday_volume: yesterday.volume,
            sentiment_series,
            reference_series,
        };
        self.oracle.evaluate(&input)
    }
}
