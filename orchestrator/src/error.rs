use std::{error::Error, fmt, io};

use comms::CommsErr;
use machine_learning::MlErr;

/// All errors that can end a run.
#[derive(Debug)]
pub enum OrchestratorError {
    /// Invalid configuration, caught before any call is made.
    InvalidConfig(String),
    /// Talking to the scoring service failed.
    Comms(CommsErr),
    /// Fitting or predicting failed.
    Ml(MlErr),
    /// The runtime couldn't be started.
    Io(io::Error),
}

impl fmt::Display for OrchestratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Comms(e) => write!(f, "scoring service error: {e}"),
            Self::Ml(e) => write!(f, "model error: {e}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for OrchestratorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Comms(e) => Some(e),
            Self::Ml(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<CommsErr> for OrchestratorError {
    fn from(e: CommsErr) -> Self {
        Self::Comms(e)
    }
}

impl From<MlErr> for OrchestratorError {
    fn from(e: MlErr) -> Self {
        Self::Ml(e)
    }
}

impl From<io::Error> for OrchestratorError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
