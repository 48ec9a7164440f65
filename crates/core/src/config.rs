//! Tunable scheduler policy: late-event handling, replan thresholds, and
//! the cost-model optimizer's weights.

use crate::event::LatePolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Policy knobs for one scheduling engine instance. All fields have
/// stable defaults; a deployment overrides them via TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub late_policy: LatePolicy,
    pub max_event_lateness_min: u32,
    pub replan_threshold_total_late_min: u32,
    pub breakdown_replan_threshold_min: u32,
    pub optimizer: OptimizerWeights,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            late_policy: LatePolicy::ApplyNow,
            max_event_lateness_min: 120,
            replan_threshold_total_late_min: 60,
            breakdown_replan_threshold_min: 30,
            optimizer: OptimizerWeights::default(),
        }
    }
}

/// Weights for the replan cost score: `2.5*late + 0.8*setup - 20*priority`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerWeights {
    pub lateness: f64,
    pub setup: f64,
    pub priority: f64,
}

impl Default for OptimizerWeights {
    fn default() -> Self {
        Self { lateness: 2.5, setup: 0.8, priority: 20.0 }
    }
}

impl SchedulerConfig {
    /// Load from a TOML document. Missing keys fall back to defaults
    /// (`#[serde(default)]` on every field).
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s).map_err(ConfigError::Parse)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.optimizer.lateness.is_sign_negative()
            || self.optimizer.setup.is_sign_negative()
            || self.optimizer.priority.is_sign_negative()
        {
            return Err(ConfigError::NegativeWeight);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed scheduler config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("optimizer weights must be non-negative")]
    NegativeWeight,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
