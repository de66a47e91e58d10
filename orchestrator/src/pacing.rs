use std::time::Duration;

use tokio::time;

use crate::configs::PacingConfig;

/// Enforces the service's one request per interval rule.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    interval: Duration,
}

impl Pacer {
    pub fn new(config: PacingConfig) -> Self {
        Self {
            interval: config.interval,
        }
    }

    /// Waits a whole interval.
    pub async fn wait(&self) {
        time::sleep(self.interval).await;
    }

    /// Waits whatever is left of an interval after `spent` was already used, if anything.
    pub async fn wait_remaining(&self, spent: Duration) {
        let rest = self.interval.saturating_sub(spent);
        if !rest.is_zero() {
            time::sleep(rest).await;
        }
    }
}
