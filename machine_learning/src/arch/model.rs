use ndarray::{Array1, ArrayView2};

use crate::error::{MlErr, Result};

/// A fitted regressor mapping a feature vector to a scalar.
pub trait Model {
    /// Returns the amount of features the model expects per input.
    fn x_size(&self) -> usize;

    /// Predicts the target for a single feature vector.
    ///
    /// # Arguments
    /// * `x` - The features, must be `x_size` long.
    ///
    /// # Returns
    /// The prediction or an error if the input size doesn't match.
    fn predict(&self, x: &[f64]) -> Result<f64>;

    /// Predicts the target for every row of `xs`.
    ///
    /// # Arguments
    /// * `xs` - The inputs, one per row.
    ///
    /// # Returns
    /// One prediction per row, or an error if the amount of columns doesn't match.
    fn predict_batch(&self, xs: ArrayView2<f64>) -> Result<Array1<f64>> {
        if xs.ncols() != self.x_size() {
            return Err(MlErr::SizeMismatch {
                a: "input",
                b: "model",
                got: xs.ncols(),
                expected: self.x_size(),
            });
        }

        xs.rows()
            .into_iter()
            .map(|row| match row.as_slice() {
                Some(x) => self.predict(x),
                None => self.predict(&row.to_vec()),
            })
            .collect()
    }
}
