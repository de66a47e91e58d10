mod forest_trainer;
mod trainer;

pub use forest_trainer::{ForestConfig, ForestTrainer};
pub use trainer::Trainer;
