//! Ordered decision tables for the risk tier and the contract action.
//!
//! Both tables evaluate their rules in order, first match wins, with the
//! catch-all row last. Precedence is data, not control flow, so it can be
//! inspected and tested apart from the engine.

use crate::oracle::types::{
    ContractAction, HypeVelocity, OracleConfig, RiskLevel, SentimentZone,
};

/// Matching condition of a risk rule.
#[derive(Debug, Clone, PartialEq)]
pub enum RiskCondition {
    /// Zone and momentum both match exactly
    ZoneAndVelocity(SentimentZone, HypeVelocity),
    /// Correlation magnitude strictly below the floor
    WeakCorrelation(f64),
    /// Catch-all
    Always,
}

impl RiskCondition {
    fn matches(
        &self,
        zone: SentimentZone,
        velocity: HypeVelocity,
        correlation_value: f64,
    ) -> bool {
        match self {
            RiskCondition::ZoneAndVelocity(z, v) => zone == *z && velocity == *v,
            RiskCondition::WeakCorrelation(floor) => correlation_value.abs() < *floor,
            RiskCondition::Always => true,
        }
    }
}

/// One row of the risk table.
#[derive(Debug, Clone)]
pub struct RiskRule {
    pub condition: RiskCondition,
    pub level: RiskLevel,
}

/// Ordered risk rules: panic conditions first, weak signal coherence next,
/// calm default last.
pub struct RiskTable {
    rules: Vec<RiskRule>,
}

impl RiskTable {
    /// Build the risk table from the configured weak-correlation floor.
    pub fn new(config: &OracleConfig) -> Self {
        Self {
            rules: vec![
                RiskRule {
                    condition: RiskCondition::ZoneAndVelocity(
                        SentimentZone::Fear,
                        HypeVelocity::Collapse,
                    ),
                    level: RiskLevel::High,
                },
                RiskRule {
                    condition: RiskCondition::WeakCorrelation(config.weak_correlation_floor),
                    level: RiskLevel::Medium,
                },
                RiskRule {
                    condition: RiskCondition::Always,
                    level: RiskLevel::Low,
                },
            ],
        }
    }

    /// The ordered rules, highest precedence first.
    pub fn rules(&self) -> &[RiskRule] {
        &self.rules
    }

    /// Determine the risk tier for a scored snapshot.
    pub fn classify(
        &self,
        zone: SentimentZone,
        velocity: HypeVelocity,
        correlation_value: f64,
    ) -> RiskLevel {
        self.rules
            .iter()
            .find(|rule| rule.condition.matches(zone, velocity, correlation_value))
            .map(|rule| rule.level)
            // The table ends with a catch-all row
            .unwrap_or(RiskLevel::Low)
    }
}

/// One row of the action table. `None` in a column matches any value.
#[derive(Debug, Clone)]
pub struct ActionRule {
    pub zone: Option<SentimentZone>,
    pub velocity: Option<HypeVelocity>,
    pub action: ContractAction,
}

impl ActionRule {
    fn matches(&self, zone: SentimentZone, velocity: HypeVelocity) -> bool {
        self.zone.map_or(true, |z| z == zone) && self.velocity.map_or(true, |v| v == velocity)
    }
}

/// Fixed lookup from (zone, momentum) to the recommended contract action.
pub struct ActionTable {
    rules: Vec<ActionRule>,
}

impl ActionTable {
    /// Build the fixed action table.
    pub fn new() -> Self {
        Self {
            rules: vec![
                ActionRule {
                    zone: Some(SentimentZone::Greed),
                    velocity: Some(HypeVelocity::Spike),
                    action: ContractAction::IncreaseLiquidityIncentives,
                },
                ActionRule {
                    zone: Some(SentimentZone::Fear),
                    velocity: Some(HypeVelocity::Collapse),
                    action: ContractAction::ActivateProtectionMode,
                },
                ActionRule {
                    zone: Some(SentimentZone::Neutral),
                    velocity: Some(HypeVelocity::Stable),
                    action: ContractAction::MaintainProtocolState,
                },
                ActionRule {
                    zone: None,
                    velocity: None,
                    action: ContractAction::MonitorMarketConditions,
                },
            ],
        }
    }

    /// The ordered rules, highest precedence first.
    pub fn rules(&self) -> &[ActionRule] {
        &self.rules
    }

    /// Recommend an action for a (zone, momentum) pair.
    pub fn recommend(&self, zone: SentimentZone, velocity: HypeVelocity) -> ContractAction {
        self.rules
            .iter()
            .find(|rule| rule.matches(zone, velocity))
            .map(|rule| rule.action)
            // The table ends with a catch-all row
            .unwrap_or(ContractAction::MonitorMarketConditions)
    }
}

impl Default for ActionTable {
    fn default() -> Self {
        Self::new()
    }
}
