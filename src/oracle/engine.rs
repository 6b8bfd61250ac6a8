//! Oracle engine - composes the signal, correlation, decision, and
//! confidence components into a single result record.

use crate::oracle::confidence::ConfidenceScorer;
use crate::oracle::correlation::pearson;
use crate::oracle::decision::{ActionTable, RiskTable};
use crate::oracle::signals::SignalComputer;
use crate::oracle::types::{OracleConfig, OracleInput, OracleResult};
use anyhow::Result;
use tracing::{info, instrument};

/// Market-mood oracle.
///
/// Evaluation is all-or-nothing: a domain error from any sub-component
/// propagates unmodified and no partial result is ever produced. The oracle
/// holds no mutable state, so concurrent evaluations are safe.
pub struct MoodOracle {
    config: OracleConfig,
    signals: SignalComputer,
    confidence: ConfidenceScorer,
    risk_table: RiskTable,
    action_table: ActionTable,
}

impl MoodOracle {
    /// Create a new oracle with the given configuration.
    pub fn new(config: OracleConfig) -> Self {
        let signals = SignalComputer::new(config.clone());
        let confidence = ConfidenceScorer::new(config.clone());
        let risk_table = RiskTable::new(&config);
        let action_table = ActionTable::new();

        Self {
            config,
            signals,
            confidence,
            risk_table,
            action_table,
        }
    }

    /// The configuration this oracle was built with.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Evaluate one snapshot of market mood.
    #[instrument(skip(self, input))]
    pub fn evaluate(&self, input: &OracleInput) -> Result<OracleResult> {
        let vibe_score = self.signals.vibe_score(input.daily_avg_sentiment)?;
        let sentiment_zone = self.signals.classify_zone(vibe_score)?;

        let velocity_value = self
            .signals
            .velocity(input.today_volume, input.yesterday_volume);
        let hype_velocity = self.signals.classify_velocity(velocity_value);

        let correlation_value = pearson(&input.sentiment_series, &input.reference_series)?;

        let contract_action = self.action_table.recommend(sentiment_zone, hype_velocity);
        let risk_level = self
            .risk_table
            .classify(sentiment_zone, hype_velocity, correlation_value);
        let oracle_confidence = self
            .confidence
            .score(vibe_score, velocity_value, correlation_value);

        let result = OracleResult {
            vibe_score,
            sentiment_zone,
            velocity_value,
            hype_velocity,
            correlation_value,
            contract_action,
            risk_level,
            oracle_confidence,
        };

        info!(
            vibe_score,
            zone = sentiment_zone.as_str(),
            velocity = velocity_value,
            momentum = hype_velocity.as_str(),
            correlation = correlation_value,
            risk = risk_level.as_str(),
            confidence = oracle_confidence,
            "oracle evaluation complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::types::{ContractAction, HypeVelocity, RiskLevel, SentimentZone};

    fn oracle() -> MoodOracle {
        MoodOracle::new(OracleConfig::default())
    }

    fn input() -> OracleInput {
        OracleInput {
            daily_avg_sentiment: 0.3,
            today_volume: 125,
            yesterday_volume: 100,
            sentiment_series: vec![0.1, 0.2, 0.3],
            reference_series: vec![1.0, 2.0, 3.0],
        }
    }

    #[test]
    fn evaluate_composes_all_signals() {
        let result = oracle().evaluate(&input()).unwrap();

        assert_eq!(result.vibe_score, 65.0);
        assert_eq!(result.sentiment_zone, SentimentZone::Greed);
        assert_eq!(result.velocity_value, 25.0);
        assert_eq!(result.hype_velocity, HypeVelocity::Spike);
        assert_eq!(result.correlation_value, 1.0);
        assert_eq!(
            result.contract_action,
            ContractAction::IncreaseLiquidityIncentives
        );
        assert_eq!(result.risk_level, RiskLevel::Low);
        // 0.4 * 30 + 0.3 * 25 + 0.3 * 100 = 49.5
        assert_eq!(result.oracle_confidence, 49.5);
    }

    #[test]
    fn invalid_sentiment_propagates_unmodified() {
        let mut bad = input();
        bad.daily_avg_sentiment = 1.7;

        let err = oracle().evaluate(&bad).unwrap_err();
        assert!(err.to_string().contains("between -1 and +1"));
    }

    #[test]
    fn mismatched_series_propagate_unmodified() {
        let mut bad = input();
        bad.reference_series.push(4.0);

        let err = oracle().evaluate(&bad).unwrap_err();
        assert!(err.to_string().contains("same length"));
    }

    #[test]
    fn fear_collapse_overrides_weak_correlation() {
        let input = OracleInput {
            daily_avg_sentiment: -0.5,
            today_volume: 40,
            yesterday_volume: 100,
            sentiment_series: vec![0.3, 0.3],
            reference_series: vec![1.0, 2.0],
        };

        let result = oracle().evaluate(&input).unwrap();
        assert_eq!(result.sentiment_zone, SentimentZone::Fear);
        assert_eq!(result.hype_velocity, HypeVelocity::Collapse);
        assert_eq!(result.correlation_value, 0.0);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(
            result.contract_action,
            ContractAction::ActivateProtectionMode
        );
    }

    #[test]
    fn evaluation_is_deterministic() {
        let oracle = oracle();
        let input = input();
        assert_eq!(
            oracle.evaluate(&input).unwrap(),
            oracle.evaluate(&input).unwrap()
        );
    }
}
