use crate::{
    error::Result,
    msg::{Fingerprint, Input, Outcome, Sample, SessionId},
};

/// The capabilities of the remote scoring service.
///
/// Every call is a single request/response exchange correlated by `id` alone, with no retries.
#[trait_variant::make(ScoringService: Send)]
pub trait ScoringServiceTemplate {
    /// Fetches a fresh labeled dataset.
    async fn fetch_dataset(&self, id: &SessionId) -> Result<Vec<Sample>>;

    /// Fetches the next feature vector to predict.
    async fn fetch_input(&self, id: &SessionId) -> Result<Input>;

    /// Fetches the auxiliary people payload, only meant to be logged.
    async fn fetch_people(&self, id: &SessionId) -> Result<Vec<u8>>;

    /// Issues a warm up call, nothing is read back.
    async fn prime(&self, id: &SessionId) -> Result<()>;

    /// Submits a prediction, or nothing at all when priming, and reads back the outcome.
    async fn submit(&self, id: &SessionId, prediction: Option<f64>) -> Result<Outcome>;

    /// Fetches the token blob handed out at the end of a run.
    async fn fetch_fingerprint(&self, id: &SessionId) -> Result<Fingerprint>;
}
