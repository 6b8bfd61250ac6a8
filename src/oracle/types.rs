//! Core types and configuration for the oracle engine.

use serde::{Deserialize, Serialize};

/// Categorical mood derived from the vibe score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentZone {
    /// Vibe score below the fear ceiling
    Fear,
    /// Vibe score between the fear ceiling and the greed floor, inclusive
    Neutral,
    /// Vibe score above the greed floor
    Greed,
}

impl SentimentZone {
    /// Returns the wire name of the zone.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentZone::Fear => "fear",
            SentimentZone::Neutral => "neutral",
            SentimentZone::Greed => "greed",
        }
    }
}

/// Categorical momentum derived from the volume velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HypeVelocity {
    /// Velocity strictly above the spike threshold
    Spike,
    /// Velocity within the thresholds, boundaries included
    Stable,
    /// Velocity strictly below the collapse threshold
    Collapse,
}

impl HypeVelocity {
    /// Returns the wire name of the momentum class.
    pub fn as_str(&self) -> &'static str {
        match self {
            HypeVelocity::Spike => "spike",
            HypeVelocity::Stable => "stable",
            HypeVelocity::Collapse => "collapse",
        }
    }
}

/// System risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Returns the wire name of the risk tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Recommended contract response. The wire values are the exact strings the
/// presentation layer displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractAction {
    #[serde(rename = "Increase liquidity incentives")]
    IncreaseLiquidityIncentives,
    #[serde(rename = "Activate protection mode")]
    ActivateProtectionMode,
    #[serde(rename = "Maintain protocol state")]
    MaintainProtocolState,
    #[serde(rename = "Monitor market conditions")]
    MonitorMarketConditions,
}

impl ContractAction {
    /// Returns the display string of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractAction::IncreaseLiquidityIncentives => "Increase liquidity incentives",
            ContractAction::ActivateProtectionMode => "Activate protection mode",
            ContractAction::MaintainProtocolState => "Maintain protocol state",
            ContractAction::MonitorMarketConditions => "Monitor market conditions",
        }
    }
}

/// Raw inputs for a single oracle evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleInput {
    /// Latest day's average sentiment, in [-1, 1]
    pub daily_avg_sentiment: f64,
    /// Latest day's record volume
    pub today_volume: u64,
    /// Prior day's record volume
    pub yesterday_volume: u64,
    /// Daily average sentiment values, date ascending
    pub sentiment_series: Vec<f64>,
    /// Reference values paired with the sentiment series, same length
    pub reference_series: Vec<f64>,
}

/// The engine's sole output record, constructed fresh on every invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleResult {
    /// Sentiment rescaled to 0-100
    pub vibe_score: f64,
    /// Mood category for the vibe score
    pub sentiment_zone: SentimentZone,
    /// Percentage change in volume between the last two days
    pub velocity_value: f64,
    /// Momentum category for the velocity
    pub hype_velocity: HypeVelocity,
    /// Pearson correlation between sentiment and the reference series
    pub correlation_value: f64,
    /// Recommended contract response
    pub contract_action: ContractAction,
    /// System risk tier
    pub risk_level: RiskLevel,
    /// Weighted composite strength of the three signals, 0-100
    pub oracle_confidence: f64,
}

/// Zone boundaries on the 0-100 vibe scale. Both boundary values classify
/// as neutral.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneThresholds {
    pub fear_below: f64,
    pub greed_above: f64,
}

impl Default for ZoneThresholds {
    fn default() -> Self {
        Self {
            fear_below: 40.0,
            greed_above: 60.0,
        }
    }
}

/// Velocity boundaries in percent. Boundary values classify as stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelocityThresholds {
    pub spike_above: f64,
    pub collapse_below: f64,
}

impl Default for VelocityThresholds {
    fn default() -> Self {
        Self {
            spike_above: 20.0,
            collapse_below: -20.0,
        }
    }
}

/// Blend weights for the confidence composite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceWeights {
    pub sentiment: f64,
    pub velocity: f64,
    pub correlation: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            sentiment: 0.4,
            velocity: 0.3,
            correlation: 0.3,
        }
    }
}

/// Oracle engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Zone boundaries for the vibe score
    pub zones: ZoneThresholds,
    /// Momentum boundaries for the velocity percentage
    pub velocity: VelocityThresholds,
    /// Confidence blend weights
    pub weights: ConfidenceWeights,
    /// Cap on the velocity strength term before weighting
    pub velocity_strength_cap: f64,
    /// Correlation magnitude below which signal coherence is weak
    pub weak_correlation_floor: f64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            zones: ZoneThresholds::default(),
            velocity: VelocityThresholds::default(),
            weights: ConfidenceWeights::default(),
            velocity_strength_cap: 100.0,
            weak_correlation_floor: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_and_velocity_wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&SentimentZone::Fear).unwrap(),
            "\"fear\""
        );
        assert_eq!(
            serde_json::to_string(&HypeVelocity::Collapse).unwrap(),
            "\"collapse\""
        );
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
    }

    #[test]
    fn contract_action_serializes_to_display_string() {
        let json = serde_json::to_string(&ContractAction::ActivateProtectionMode).unwrap();
        assert_eq!(json, "\"Activate protection mode\"");

        let back: ContractAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ContractAction::ActivateProtectionMode);
    }

    #[test]
    fn default_config_matches_engine_constants() {
        let config = OracleConfig::default();
        assert_eq!(config.zones.fear_below, 40.0);
        assert_eq!(config.zones.greed_above, 60.0);
        assert_eq!(config.velocity.spike_above, 20.0);
        assert_eq!(config.velocity.collapse_below, -20.0);
        assert_eq!(config.weights.sentiment, 0.4);
        assert_eq!(config.weights.velocity, 0.3);
        assert_eq!(config.weights.correlation, 0.3);
        assert_eq!(config.velocity_strength_cap, 100.0);
        assert_eq!(config.weak_correlation_floor, 0.2);
    }
}
