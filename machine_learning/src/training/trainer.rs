use crate::{arch::Model, dataset::Dataset, error::Result};

/// Turns a labeled dataset into a fitted model.
pub trait Trainer {
    type Model: Model;

    /// Fits a brand new model on `dataset`.
    ///
    /// # Arguments
    /// * `dataset` - The labeled samples to learn from.
    ///
    /// # Returns
    /// The fitted model or an error if the dataset can't be learned from.
    fn fit(&self, dataset: &Dataset) -> Result<Self::Model>;
}
