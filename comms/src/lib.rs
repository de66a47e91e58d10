mod client;
mod dataset;
mod error;
pub mod msg;
mod service;
mod token;

pub use client::{ClientConfig, HttpClient};
pub use dataset::parse_dataset;
pub use error::{CommsErr, Result};
pub use msg::{Fingerprint, Input, Outcome, Sample, SessionId};
pub use service::{ScoringService, ScoringServiceTemplate};
pub use token::Token;
