//! Composite confidence over the three underlying signals.

use crate::oracle::round2;
use crate::oracle::types::OracleConfig;
use tracing::debug;

/// Blends the strengths of the three signals into a single 0-100 confidence
/// figure.
pub struct ConfidenceScorer {
    config: OracleConfig,
}

impl ConfidenceScorer {
    /// Create a new confidence scorer with the given configuration.
    pub fn new(config: OracleConfig) -> Self {
        Self { config }
    }

    /// Weighted composite of sentiment extremity, velocity magnitude, and
    /// correlation magnitude, rounded to 2 decimals.
    ///
    /// Strength terms: sentiment distance from the 50 midpoint doubled
    /// (0-100), velocity magnitude capped (runaway percentages saturate),
    /// correlation magnitude scaled to 0-100. The default weights keep the
    /// weighted sum within 100 on their own; the outer cap holds the 0-100
    /// contract under any configured weights.
    pub fn score(&self, vibe_score: f64, velocity_value: f64, correlation_value: f64) -> f64 {
        let sentiment_strength = (vibe_score - 50.0).abs() * 2.0;
        let velocity_strength = velocity_value.abs().min(self.config.velocity_strength_cap);
        let correlation_strength = correlation_value.abs() * 100.0;

        let weights = &self.config.weights;
        let confidence = sentiment_strength * weights.sentiment
            + velocity_strength * weights.velocity
            + correlation_strength * weights.correlation;

        let confidence = round2(confidence.min(100.0));
        debug!(
            sentiment_strength,
            velocity_strength, correlation_strength, confidence, "scored oracle confidence"
        );
        confidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> ConfidenceScorer {
        ConfidenceScorer::new(OracleConfig::default())
    }

    #[test]
    fn neutral_signals_give_zero_confidence() {
        assert_eq!(scorer().score(50.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn extreme_signals_saturate_at_one_hundred() {
        assert_eq!(scorer().score(100.0, 250.0, 1.0), 100.0);
        assert_eq!(scorer().score(0.0, -250.0, -1.0), 100.0);
    }

    #[test]
    fn weights_favor_sentiment_extremity() {
        let scorer = scorer();
        // 0.4 * 30 + 0.3 * 25 + 0.3 * 0 = 19.5
        assert_eq!(scorer.score(65.0, 25.0, 0.0), 19.5);
        // 0.4 * 0 + 0.3 * 25 + 0.3 * 0 = 7.5
        assert_eq!(scorer.score(50.0, 25.0, 0.0), 7.5);
    }

    #[test]
    fn velocity_strength_is_capped() {
        let scorer = scorer();
        assert_eq!(
            scorer.score(50.0, 100.0, 0.0),
            scorer.score(50.0, 5000.0, 0.0)
        );
    }

    #[test]
    fn negative_signals_count_by_magnitude() {
        let scorer = scorer();
        assert_eq!(scorer.score(35.0, -30.0, -0.5), scorer.score(65.0, 30.0, 0.5));
    }

    #[test]
    fn identical_inputs_give_identical_confidence() {
        let scorer = scorer();
        let first = scorer.score(72.4, -12.8, 0.34);
        let second = scorer.score(72.4, -12.8, 0.34);
        assert_eq!(first, second);
    }

    #[test]
    fn custom_weights_stay_within_bounds() {
        let mut config = OracleConfig::default();
        config.weights.sentiment = 1.0;
        config.weights.velocity = 1.0;
        config.weights.correlation = 1.0;

        let scorer = ConfidenceScorer::new(config);
        assert_eq!(scorer.score(100.0, 100.0, 1.0), 100.0);
    }
}
