//! Core types and data structures for the NarrativePulse oracle system.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One aggregated mood measurement for a calendar date.
///
/// Produced one-per-date by the upstream aggregation stage; immutable once
/// read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    /// Calendar date of the aggregate
    pub date: NaiveDate,
    /// Mean per-record sentiment for the date, in [-1, 1]
    pub avg_sentiment: f64,
    /// Number of records observed on the date
    pub volume: u64,
}

/// Date-ascending series of daily observations with unique dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalSeries {
    observations: Vec<DailyObservation>,
}

impl SignalSeries {
    /// Build a series from raw per-record rows.
    ///
    /// The upstream artifact repeats each date's aggregates across every
    /// record of that date, so the first-seen values win per date. The
    /// result is sorted by date ascending.
    pub fn from_rows(rows: impl IntoIterator<Item = DailyObservation>) -> Self {
        let mut seen = HashSet::new();
        let mut observations: Vec<DailyObservation> = rows
            .into_iter()
            .filter(|obs| seen.insert(obs.date))
            .collect();
        observations.sort_by_key(|obs| obs.date);
        Self { observations }
    }

    /// Number of distinct dates in the series.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// All observations in date order.
    pub fn observations(&self) -> &[DailyObservation] {
        &self.observations
    }

    /// The two most recent observations as (yesterday, today), or `None`
    /// when the series spans fewer than two dates.
    pub fn latest_pair(&self) -> Option<(&DailyObservation, &DailyObservation)> {
        match self.observations.as_slice() {
            [.., yesterday, today] => Some((yesterday, today)),
            _ => None,
        }
    }

    /// Daily average sentiment values in date order.
    pub fn sentiment_values(&self) -> Vec<f64> {
        self.observations.iter().map(|obs| obs.avg_sentiment).collect()
    }

    /// Day-over-day change in average sentiment. The first day has no prior
    /// baseline and reads as 0.0.
    pub fn sentiment_momentum(&self) -> Vec<f64> {
        self.observations
            .iter()
            .enumerate()
            .map(|(i, obs)| {
                if i == 0 {
                    0.0
                } else {
                    obs.avg_sentiment - self.observations[i - 1].avg_sentiment
                }
            })
            .collect()
    }
}
