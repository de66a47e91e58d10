pub mod arch;
pub mod dataset;
pub mod error;
pub mod training;

pub use arch::{Model, RandomForest, RegressionTree};
pub use dataset::Dataset;
pub use error::{MlErr, Result};
pub use training::{ForestConfig, ForestTrainer, Trainer};
