use std::fmt;

use comms::{Fingerprint, ScoringService, SessionId, Token};
use log::{debug, info, warn};
use machine_learning::{Model, Trainer};
use tokio::time::Instant;

use crate::{
    adapter, configs::SessionConfig, drift::DriftDetector, error::OrchestratorError,
    pacing::Pacer,
};

type Result<T> = std::result::Result<T, OrchestratorError>;

/// The stages a run goes through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Warmup,
    SteadyState,
    Finalize,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Init => "init",
            Phase::Warmup => "warmup",
            Phase::SteadyState => "steady state",
            Phase::Finalize => "finalize",
            Phase::Done => "done",
        };
        f.write_str(s)
    }
}

/// What a finished run leaves behind.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub session_id: SessionId,
    /// The last score reported by the service.
    pub score: f64,
    /// Predictions submitted during the steady state.
    pub iterations: usize,
    pub retrains: usize,
    pub fingerprint: Fingerprint,
    pub token: Token,
}

/// A single run against the scoring service.
///
/// Everything happens sequentially on the caller's task: the current model and the drift
/// counter are only ever touched from `run`.
pub struct Session<S, T> {
    id: SessionId,
    service: S,
    trainer: T,
    limit: f64,
    warmup_rounds: usize,
    pacer: Pacer,
    drift: DriftDetector,
    phase: Phase,
    score: f64,
    iterations: usize,
    retrains: usize,
}

impl<S, T> Session<S, T>
where
    S: ScoringService,
    T: Trainer,
{
    /// Creates a new `Session`.
    ///
    /// # Arguments
    /// * `service` - The scoring service to play against.
    /// * `trainer` - Fits the models used to predict.
    /// * `config` - The run settings, the session id is generated here when missing.
    ///
    /// # Returns
    /// A new `Session` or an error if the config is invalid.
    pub fn new(service: S, trainer: T, config: &SessionConfig) -> Result<Self> {
        config.validate()?;

        let id = match &config.id {
            Some(id) => SessionId::from(id.as_str()),
            None => SessionId::generate(),
        };

        Ok(Self {
            id,
            service,
            trainer,
            limit: config.limit,
            warmup_rounds: config.warmup_rounds,
            pacer: Pacer::new(config.pacing),
            drift: DriftDetector::new(config.retrain),
            phase: Phase::Init,
            score: 0.0,
            iterations: 0,
            retrains: 0,
        })
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Drives the run to completion.
    ///
    /// # Returns
    /// The run summary, or the first error any call or fit produced.
    pub async fn run(mut self) -> Result<RunSummary> {
        let mut model = self.init().await?;
        self.warmup().await?;
        self.steady_state(&mut model).await?;
        let (fingerprint, token) = self.finalize().await?;
        self.enter(Phase::Done);

        Ok(RunSummary {
            session_id: self.id,
            score: self.score,
            iterations: self.iterations,
            retrains: self.retrains,
            fingerprint,
            token,
        })
    }

    fn enter(&mut self, phase: Phase) {
        debug!(id = self.id.as_str(); "{} -> {}", self.phase, phase);
        self.phase = phase;
    }

    /// Fetches a fresh dataset and fits a brand new model on it.
    async fn fit(&self) -> Result<T::Model> {
        let samples = self.service.fetch_dataset(&self.id).await?;
        let dataset = adapter::to_dataset(&samples)?;
        let model = self.trainer.fit(&dataset)?;
        info!("fitted model on {} samples", dataset.len());
        Ok(model)
    }

    async fn init(&mut self) -> Result<T::Model> {
        self.enter(Phase::Init);
        info!("id: {}", self.id);

        let model = self.fit().await?;
        let people = self.service.fetch_people(&self.id).await?;
        info!("people: {}", String::from_utf8_lossy(&people));

        Ok(model)
    }

    async fn warmup(&mut self) -> Result<()> {
        self.enter(Phase::Warmup);

        for round in 0..self.warmup_rounds {
            self.pacer.wait().await;
            self.service.prime(&self.id).await?;
            self.pacer.wait().await;

            let outcome = self.service.submit(&self.id, None).await?;
            self.score = outcome.score;
            debug!(round = round; "primed");
            info!("score: {}", outcome.score);
            info!("win: {}", outcome.win);
        }

        Ok(())
    }

    async fn steady_state(&mut self, model: &mut T::Model) -> Result<()> {
        self.enter(Phase::SteadyState);

        while self.score < self.limit {
            self.pacer.wait().await;
            let input = self.service.fetch_input(&self.id).await?;

            let start = Instant::now();
            let prediction = model.predict(&input.features())?;
            let spent = start.elapsed();
            debug!(prediction = prediction, spent:? = spent; "predicted");
            self.pacer.wait_remaining(spent).await;

            let outcome = self.service.submit(&self.id, Some(prediction)).await?;
            self.score = outcome.score;
            self.iterations += 1;
            info!("score: {}", outcome.score);
            info!("win: {}", outcome.win);

            if self.drift.observe(outcome.win) {
                warn!(
                    "{} consecutive bad predictions, the dataset probably changed, retraining",
                    self.drift.bad_predictions()
                );
                *model = self.fit().await?;
                self.drift.retrained();
                self.retrains += 1;
            }
        }

        Ok(())
    }

    async fn finalize(&mut self) -> Result<(Fingerprint, Token)> {
        self.enter(Phase::Finalize);
        self.pacer.wait().await;

        let fingerprint = self.service.fetch_fingerprint(&self.id).await?;
        info!("id : {}", self.id);
        info!("fingerprint : {fingerprint}");

        let token = fingerprint.decode()?;
        info!("token header : {}", token.header);
        info!("token claims : {}", token.claims);

        Ok((fingerprint, token))
    }
}
