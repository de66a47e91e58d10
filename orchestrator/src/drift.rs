use crate::configs::RetrainConfig;

/// Counts consecutive bad predictions to guess when the served dataset changed.
#[derive(Debug, Clone)]
pub struct DriftDetector {
    config: RetrainConfig,
    bad_predictions: usize,
}

impl DriftDetector {
    pub fn new(config: RetrainConfig) -> Self {
        Self {
            config,
            bad_predictions: 0,
        }
    }

    /// Records the `win` signal of an outcome.
    ///
    /// # Arguments
    /// * `win` - The round signal returned by the service.
    ///
    /// # Returns
    /// Whether the current model should be replaced.
    pub fn observe(&mut self, win: f64) -> bool {
        if win < self.config.win_threshold {
            self.bad_predictions += 1;
        } else {
            self.bad_predictions = 0;
        }

        self.bad_predictions > self.config.max_bad_predictions
    }

    /// Must be called once a retrain has happened.
    ///
    /// The counter is left untouched unless `reset_after_retrain` is set, so without it every
    /// further bad outcome triggers another retrain.
    pub fn retrained(&mut self) {
        if self.config.reset_after_retrain {
            self.bad_predictions = 0;
        }
    }

    pub fn bad_predictions(&self) -> usize {
        self.bad_predictions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector(reset_after_retrain: bool) -> DriftDetector {
        DriftDetector::new(RetrainConfig {
            reset_after_retrain,
            ..RetrainConfig::default()
        })
    }

    #[test]
    fn counter_tracks_the_trailing_bad_run() {
        let mut drift = detector(false);
        let wins = [10.0, 999.9, 1000.0, 0.0, 5.0, 20.0, 1500.0, 3.0];
        let expected = [1, 2, 0, 1, 2, 3, 0, 1];

        for (win, count) in wins.into_iter().zip(expected) {
            drift.observe(win);
            assert_eq!(drift.bad_predictions(), count);
        }
    }

    #[test]
    fn fires_on_the_eleventh_consecutive_bad_outcome() {
        let mut drift = detector(false);

        for _ in 0..10 {
            assert!(!drift.observe(0.0));
        }
        assert!(drift.observe(0.0));
    }

    #[test]
    fn a_good_outcome_defuses_the_trigger() {
        let mut drift = detector(false);

        for _ in 0..10 {
            drift.observe(0.0);
        }
        assert!(!drift.observe(1000.0));
        assert!(!drift.observe(0.0));
        assert_eq!(drift.bad_predictions(), 1);
    }

    #[test]
    fn keeps_firing_after_a_retrain_without_reset() {
        let mut drift = detector(false);

        for _ in 0..11 {
            drift.observe(0.0);
        }
        drift.retrained();

        assert_eq!(drift.bad_predictions(), 11);
        assert!(drift.observe(0.0));
        assert!(drift.observe(0.0));
    }

    #[test]
    fn reset_after_retrain_starts_over() {
        let mut drift = detector(true);

        for _ in 0..11 {
            drift.observe(0.0);
        }
        drift.retrained();

        assert_eq!(drift.bad_predictions(), 0);
        for _ in 0..10 {
            assert!(!drift.observe(0.0));
        }
        assert!(drift.observe(0.0));
    }
}
