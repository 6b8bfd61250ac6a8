//! Primary signal computation: vibe score, sentiment zone, and volume
//! velocity with its momentum class.
//!
//! All computations are pure functions of their inputs; the only state is
//! the threshold configuration.

use crate::oracle::round2;
use crate::oracle::types::{HypeVelocity, OracleConfig, SentimentZone};
use anyhow::{bail, Result};
use tracing::debug;

/// Computes the normalized signals that feed classification, decision, and
/// confidence.
pub struct SignalComputer {
    config: OracleConfig,
}

impl SignalComputer {
    /// Create a new signal computer with the given configuration.
    pub fn new(config: OracleConfig) -> Self {
        Self { config }
    }

    /// Rescale a bounded sentiment average to the 0-100 vibe scale.
    ///
    /// Sentiment is naturally bipolar; `(s + 1) * 50` re-centers it to an
    /// intuitive percentage, rounded to 2 decimals. Out-of-range input is a
    /// domain error, never clamped.
    pub fn vibe_score(&self, daily_avg_sentiment: f64) -> Result<f64> {
        if !(-1.0..=1.0).contains(&daily_avg_sentiment) {
            bail!(
                "sentiment average {} must be between -1 and +1",
                daily_avg_sentiment
            );
        }

        Ok(round2((daily_avg_sentiment + 1.0) * 50.0))
    }

    /// Classify a vibe score into fear / neutral / greed.
    ///
    /// Both zone boundaries belong to neutral. The range check stands on its
    /// own even though `vibe_score` already guarantees it.
    pub fn classify_zone(&self, vibe_score: f64) -> Result<SentimentZone> {
        if !(0.0..=100.0).contains(&vibe_score) {
            bail!("vibe score {} must be between 0 and 100", vibe_score);
        }

        let zones = &self.config.zones;
        let zone = if vibe_score < zones.fear_below {
            SentimentZone::Fear
        } else if vibe_score <= zones.greed_above {
            SentimentZone::Neutral
        } else {
            SentimentZone::Greed
        };

        debug!(vibe_score, zone = zone.as_str(), "classified sentiment zone");
        Ok(zone)
    }

    /// Percentage change in record volume between two periods, rounded to 2
    /// decimals and unbounded.
    ///
    /// A zero baseline means there is no prior signal to compare against and
    /// reads as no change, not as an error.
    pub fn velocity(&self, today_volume: u64, yesterday_volume: u64) -> f64 {
        if yesterday_volume == 0 {
            return 0.0;
        }

        let change =
            (today_volume as f64 - yesterday_volume as f64) / yesterday_volume as f64 * 100.0;
        round2(change)
    }

    /// Classify a velocity percentage into spike / stable / collapse.
    ///
    /// The threshold values themselves are stable (strict inequality).
    pub fn classify_velocity(&self, velocity_value: f64) -> HypeVelocity {
        let thresholds = &self.config.velocity;
        if velocity_value > thresholds.spike_above {
            HypeVelocity::Spike
        } else if velocity_value < thresholds.collapse_below {
            HypeVelocity::Collapse
        } else {
            HypeVelocity::Stable
        }
    }
}
