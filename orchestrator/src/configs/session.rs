use std::time::Duration;

use comms::ClientConfig;
use machine_learning::ForestConfig;

use crate::error::OrchestratorError;

/// The score the steady state loop chases when none is given.
pub const DEFAULT_LIMIT: f64 = 999_999.0;
pub const DEFAULT_WARMUP_ROUNDS: usize = 30;

/// Spacing between dependent remote calls.
#[derive(Debug, Clone, Copy)]
pub struct PacingConfig {
    pub interval: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
        }
    }
}

/// When to throw the current model away and fit a new one.
#[derive(Debug, Clone, Copy)]
pub struct RetrainConfig {
    /// Outcomes whose `win` is below this count as bad predictions.
    pub win_threshold: f64,
    /// A retrain fires once the consecutive bad predictions exceed this.
    pub max_bad_predictions: usize,
    /// Whether the bad prediction counter goes back to zero after a retrain.
    pub reset_after_retrain: bool,
}

impl Default for RetrainConfig {
    fn default() -> Self {
        Self {
            win_threshold: 1000.0,
            max_bad_predictions: 10,
            reset_after_retrain: false,
        }
    }
}

/// Everything a run needs.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Caller supplied session identifier, a fresh one is generated when `None`.
    pub id: Option<String>,
    pub limit: f64,
    pub warmup_rounds: usize,
    pub pacing: PacingConfig,
    pub retrain: RetrainConfig,
    pub client: ClientConfig,
    pub forest: ForestConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            id: None,
            limit: DEFAULT_LIMIT,
            warmup_rounds: DEFAULT_WARMUP_ROUNDS,
            pacing: PacingConfig::default(),
            retrain: RetrainConfig::default(),
            client: ClientConfig::default(),
            forest: ForestConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Rejects configurations that can't drive a run.
    pub fn validate(&self) -> Result<(), OrchestratorError> {
        if self.limit.is_nan() {
            return Err(OrchestratorError::InvalidConfig("limit can't be NaN".into()));
        }

        if self.client.base_url.trim().is_empty() {
            return Err(OrchestratorError::InvalidConfig(
                "base url can't be blank".into(),
            ));
        }

        Ok(())
    }
}
