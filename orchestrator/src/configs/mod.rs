mod session;

pub use session::{DEFAULT_LIMIT, DEFAULT_WARMUP_ROUNDS, PacingConfig, RetrainConfig, SessionConfig};
