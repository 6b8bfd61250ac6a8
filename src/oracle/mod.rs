//! Oracle module - market-mood scoring and decision engine.
//!
//! This module turns a day's aggregated sentiment and volume figures into a
//! composite mood signal: a vibe score with its zone, a volume velocity with
//! its momentum class, a correlation estimate against a reference series,
//! a confidence figure, a risk tier, and a recommended contract action.
//! Every component is a pure function of its inputs plus the shared
//! configuration.

pub mod confidence;
pub mod correlation;
pub mod decision;
pub mod engine;
pub mod signals;
pub mod types;

// Re-export the engine and the main public types
pub use engine::MoodOracle;
pub use types::{
    ConfidenceWeights, ContractAction, HypeVelocity, OracleConfig, OracleInput, OracleResult,
    RiskLevel, SentimentZone, VelocityThresholds, ZoneThresholds,
};

// Re-export components for standalone use
pub use confidence::ConfidenceScorer;
pub use correlation::pearson;
pub use decision::{ActionRule, ActionTable, RiskCondition, RiskRule, RiskTable};
pub use signals::SignalComputer;

/// Round to the 2-decimal presentation precision used across the engine.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Oracle builder for convenient construction with adjusted thresholds.
pub struct OracleBuilder {
    config: OracleConfig,
}

impl OracleBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: OracleConfig::default(),
        }
    }

    /// Set the zone boundaries on the vibe scale.
    pub fn with_zone_thresholds(mut self, zones: ZoneThresholds) -> Self {
        self.config.zones = zones;
        self
    }

    /// Set the momentum boundaries on the velocity percentage.
    pub fn with_velocity_thresholds(mut self, velocity: VelocityThresholds) -> Self {
        self.config.velocity = velocity;
        self
    }

    /// Set the confidence blend weights.
    pub fn with_confidence_weights(mut self, weights: ConfidenceWeights) -> Self {
        self.config.weights = weights;
        self
    }

    /// Set the correlation magnitude below which coherence is weak.
    pub fn with_weak_correlation_floor(mut self, floor: f64) -> Self {
        self.config.weak_correlation_floor = floor;
        self
    }

    /// Build the oracle configuration.
    pub fn build_config(self) -> OracleConfig {
        self.config
    }

    /// Build the oracle instance.
    pub fn build(self) -> MoodOracle {
        MoodOracle::new(self.config)
    }
}

impl Default for OracleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
