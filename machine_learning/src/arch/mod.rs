mod forest;
mod model;
mod tree;

pub use forest::RandomForest;
pub use model::Model;
pub use tree::{RegressionTree, TreeConfig};
