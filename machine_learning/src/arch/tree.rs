use std::num::NonZeroUsize;

use ndarray::{ArrayView1, ArrayView2};

use super::Model;
use crate::error::{MlErr, Result};

/// Impurity below which a node is considered pure and never split.
const MIN_IMPURITY: f64 = 1e-12;

/// Growth limits for a single `RegressionTree`.
#[derive(Debug, Clone, Copy)]
pub struct TreeConfig {
    pub max_depth: NonZeroUsize,
    pub min_samples_split: usize,
    pub min_samples_leaf: NonZeroUsize,
}

#[derive(Debug, Clone, Copy)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Clone, Copy)]
struct Split {
    feature: usize,
    threshold: f64,
    cost: f64,
}

/// A CART regression tree using the squared error criterion.
///
/// Nodes live in a flat arena, the root is always at index 0.
#[derive(Debug, Clone)]
pub struct RegressionTree {
    nodes: Vec<Node>,
    x_size: usize,
}

impl RegressionTree {
    /// Grows a tree over the selected rows of `x` and `y`.
    ///
    /// # Arguments
    /// * `x` - The features, one row per sample.
    /// * `y` - The targets.
    /// * `samples` - Indices of the rows to train on, repetitions allowed. Reordered in place.
    /// * `config` - The growth limits.
    ///
    /// # Returns
    /// The fitted tree, or an error if `samples` is empty.
    pub fn fit(
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        samples: &mut [usize],
        config: &TreeConfig,
    ) -> Result<Self> {
        if samples.is_empty() {
            return Err(MlErr::EmptyDataset);
        }

        let mut tree = Self {
            nodes: Vec::new(),
            x_size: x.ncols(),
        };
        tree.grow(x, y, samples, 0, config);
        Ok(tree)
    }

    /// The amount of nodes in the tree, leaves included.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// The length of the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        self.depth_from(0)
    }

    fn depth_from(&self, idx: usize) -> usize {
        match self.nodes[idx] {
            Node::Leaf { .. } => 0,
            Node::Split { left, right, .. } => 1 + self.depth_from(left).max(self.depth_from(right)),
        }
    }

    fn grow(
        &mut self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        samples: &mut [usize],
        depth: usize,
        config: &TreeConfig,
    ) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(Node::Leaf {
            value: mean(y, samples),
        });

        if depth >= config.max_depth.get() || samples.len() < config.min_samples_split {
            return idx;
        }

        let Some(split) = best_split(x, y, samples, config.min_samples_leaf.get()) else {
            return idx;
        };

        let mid = partition(samples, |i| x[[i, split.feature]] <= split.threshold);
        let (lo, hi) = samples.split_at_mut(mid);
        let left = self.grow(x, y, lo, depth + 1, config);
        let right = self.grow(x, y, hi, depth + 1, config);

        self.nodes[idx] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };

        idx
    }
}

impl Model for RegressionTree {
    fn x_size(&self) -> usize {
        self.x_size
    }

    fn predict(&self, x: &[f64]) -> Result<f64> {
        if x.len() != self.x_size {
            return Err(MlErr::SizeMismatch {
                a: "input",
                b: "tree",
                got: x.len(),
                expected: self.x_size,
            });
        }

        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                Node::Leaf { value } => return Ok(value),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => idx = if x[feature] <= threshold { left } else { right },
            }
        }
    }
}

fn mean(y: ArrayView1<f64>, samples: &[usize]) -> f64 {
    let sum: f64 = samples.iter().map(|&i| y[i]).sum();
    sum / samples.len() as f64
}

/// Moves every sample matching `pred` to the front, returns how many matched.
fn partition<F: Fn(usize) -> bool>(samples: &mut [usize], pred: F) -> usize {
    let mut mid = 0;
    for i in 0..samples.len() {
        if pred(samples[i]) {
            samples.swap(i, mid);
            mid += 1;
        }
    }
    mid
}

/// Finds the split minimizing the summed squared error of both children.
///
/// Candidate thresholds are the midpoints between distinct consecutive feature values.
fn best_split(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    samples: &[usize],
    min_samples_leaf: usize,
) -> Option<Split> {
    let n = samples.len();
    let total_sum: f64 = samples.iter().map(|&i| y[i]).sum();
    let total_sq: f64 = samples.iter().map(|&i| y[i].powi(2)).sum();
    let parent_cost = total_sq - total_sum * total_sum / n as f64;

    if parent_cost <= MIN_IMPURITY {
        return None;
    }

    let mut best: Option<Split> = None;
    let mut sorted = samples.to_vec();

    for feature in 0..x.ncols() {
        sorted.sort_unstable_by(|&i, &j| x[[i, feature]].total_cmp(&x[[j, feature]]));

        let mut left_sum = 0.0;
        let mut left_sq = 0.0;

        for k in 1..n {
            let yi = y[sorted[k - 1]];
            left_sum += yi;
            left_sq += yi * yi;

            let lower = x[[sorted[k - 1], feature]];
            let upper = x[[sorted[k], feature]];
            if lower >= upper || k < min_samples_leaf || n - k < min_samples_leaf {
                continue;
            }

            let (nl, nr) = (k as f64, (n - k) as f64);
            let right_sum = total_sum - left_sum;
            let right_sq = total_sq - left_sq;
            let cost = (left_sq - left_sum * left_sum / nl) + (right_sq - right_sum * right_sum / nr);

            if best.is_none_or(|b| cost < b.cost) {
                let mut threshold = lower + (upper - lower) / 2.0;
                if threshold >= upper {
                    threshold = lower;
                }

                best = Some(Split {
                    feature,
                    threshold,
                    cost,
                });
            }
        }
    }

    best.filter(|split| split.cost < parent_cost)
}
