use std::{error::Error, fmt};

/// The comms module's result type.
pub type Result<T> = std::result::Result<T, CommsErr>;

/// Failures while talking to the scoring service.
#[derive(Debug)]
pub enum CommsErr {
    /// Connection, status or body read failure.
    Transport(reqwest::Error),
    /// A JSON body that doesn't have the expected shape.
    Json(serde_json::Error),
    /// Any other payload the service returned that can't be understood.
    MalformedPayload { what: &'static str, detail: String },
}

impl CommsErr {
    pub(crate) fn malformed(what: &'static str, detail: impl fmt::Display) -> Self {
        Self::MalformedPayload {
            what,
            detail: detail.to_string(),
        }
    }
}

impl fmt::Display for CommsErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommsErr::Transport(e) => write!(f, "transport error: {e}"),
            CommsErr::Json(e) => write!(f, "invalid json: {e}"),
            CommsErr::MalformedPayload { what, detail } => {
                write!(f, "malformed {what} payload: {detail}")
            }
        }
    }
}

impl Error for CommsErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CommsErr::Transport(e) => Some(e),
            CommsErr::Json(e) => Some(e),
            CommsErr::MalformedPayload { .. } => None,
        }
    }
}

impl From<reqwest::Error> for CommsErr {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

impl From<serde_json::Error> for CommsErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
