use std::num::NonZeroUsize;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::Trainer;
use crate::{
    arch::{RandomForest, RegressionTree, TreeConfig},
    dataset::Dataset,
    error::{MlErr, Result},
};

const DEFAULT_TREES: NonZeroUsize = NonZeroUsize::new(100).unwrap();
const DEFAULT_MAX_DEPTH: NonZeroUsize = NonZeroUsize::new(25).unwrap();

/// Hyperparameters of a `ForestTrainer`.
#[derive(Debug, Clone, Copy)]
pub struct ForestConfig {
    pub n_trees: NonZeroUsize,
    pub max_depth: NonZeroUsize,
    pub min_samples_split: usize,
    pub min_samples_leaf: NonZeroUsize,
    /// Whether every tree is grown on a bootstrap resample instead of the whole dataset.
    pub bootstrap: bool,
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: DEFAULT_TREES,
            max_depth: DEFAULT_MAX_DEPTH,
            min_samples_split: 2,
            min_samples_leaf: NonZeroUsize::MIN,
            bootstrap: true,
            seed: 0,
        }
    }
}

/// Fits `RandomForest`s. Fits are deterministic for a given seed.
#[derive(Debug, Clone, Default)]
pub struct ForestTrainer {
    config: ForestConfig,
}

impl ForestTrainer {
    /// Creates a new `ForestTrainer`.
    ///
    /// # Arguments
    /// * `config` - The forest hyperparameters.
    ///
    /// # Returns
    /// An error if `min_samples_split` is lower than 2.
    pub fn new(config: ForestConfig) -> Result<Self> {
        if config.min_samples_split < 2 {
            return Err(MlErr::InvalidHyperparameter {
                name: "min_samples_split",
                detail: format!("must be at least 2, got {}", config.min_samples_split),
            });
        }

        Ok(Self { config })
    }
}

impl Trainer for ForestTrainer {
    type Model = RandomForest;

    fn fit(&self, dataset: &Dataset) -> Result<RandomForest> {
        if dataset.is_empty() {
            return Err(MlErr::EmptyDataset);
        }
        dataset.ensure_finite()?;

        let ForestConfig {
            n_trees,
            max_depth,
            min_samples_split,
            min_samples_leaf,
            bootstrap,
            seed,
        } = self.config;

        let tree_config = TreeConfig {
            max_depth,
            min_samples_split,
            min_samples_leaf,
        };

        let n = dataset.len();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut samples = vec![0; n];
        let mut trees = Vec::with_capacity(n_trees.get());

        for _ in 0..n_trees.get() {
            for (i, sample) in samples.iter_mut().enumerate() {
                *sample = if bootstrap { rng.random_range(0..n) } else { i };
            }

            let tree = RegressionTree::fit(dataset.x(), dataset.y(), &mut samples, &tree_config)?;
            trees.push(tree);
        }

        RandomForest::new(trees)
    }
}
