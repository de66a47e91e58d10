mod adapter;
pub mod configs;
mod drift;
pub mod error;
mod pacing;
mod session;

use comms::HttpClient;
use log::info;
use machine_learning::ForestTrainer;
use tokio::runtime;

pub use drift::DriftDetector;
pub use error::OrchestratorError;
pub use pacing::Pacer;
pub use session::{Phase, RunSummary, Session};

use crate::configs::SessionConfig;

/// Plays a whole run against the HTTP scoring service, blocking until it's done.
///
/// # Errors
/// Returns an `OrchestratorError` on an invalid config or as soon as any call, fit or
/// prediction fails.
pub fn solve(config: SessionConfig) -> Result<RunSummary, OrchestratorError> {
    let service = HttpClient::new(config.client.clone())?;
    let trainer = ForestTrainer::new(config.forest)?;
    let session = Session::new(service, trainer, &config)?;

    info!("playing against {}", config.client.base_url);
    let runtime = runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(session.run())
}
