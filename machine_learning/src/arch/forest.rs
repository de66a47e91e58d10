use super::{Model, RegressionTree};
use crate::error::{MlErr, Result};

/// An ensemble of regression trees whose prediction is the mean of its members.
#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<RegressionTree>,
    x_size: usize,
}

impl RandomForest {
    /// Creates a new `RandomForest` out of already fitted trees.
    ///
    /// # Arguments
    /// * `trees` - The members of the ensemble, all sharing the same input size.
    ///
    /// # Returns
    /// An error if there are no trees or their input sizes differ.
    pub fn new(trees: Vec<RegressionTree>) -> Result<Self> {
        let Some(first) = trees.first() else {
            return Err(MlErr::InvalidHyperparameter {
                name: "n_trees",
                detail: "a forest needs at least one tree".into(),
            });
        };

        let x_size = first.x_size();
        if let Some(tree) = trees.iter().find(|tree| tree.x_size() != x_size) {
            return Err(MlErr::SizeMismatch {
                a: "tree",
                b: "forest",
                got: tree.x_size(),
                expected: x_size,
            });
        }

        Ok(Self { trees, x_size })
    }

    /// The amount of trees in the ensemble.
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Model for RandomForest {
    fn x_size(&self) -> usize {
        self.x_size
    }

    fn predict(&self, x: &[f64]) -> Result<f64> {
        let mut sum = 0.0;
        for tree in &self.trees {
            sum += tree.predict(x)?;
        }

        Ok(sum / self.trees.len() as f64)
    }
}
