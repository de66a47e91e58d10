use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::{MlErr, Result};

/// An in-memory labeled dataset with a single target per row.
#[derive(Debug, Clone)]
pub struct Dataset {
    x: Array2<f64>,
    y: Array1<f64>,
}

impl Dataset {
    /// Creates a new `Dataset` from a feature matrix and a target vector.
    ///
    /// # Arguments
    /// * `x` - The features, one row per sample.
    /// * `y` - The targets, one per sample.
    ///
    /// # Returns
    /// An error if the amount of rows in `x` differs from the length of `y`.
    pub fn new(x: Array2<f64>, y: Array1<f64>) -> Result<Self> {
        if x.nrows() != y.len() {
            return Err(MlErr::SizeMismatch {
                a: "features",
                b: "targets",
                got: y.len(),
                expected: x.nrows(),
            });
        }

        Ok(Self { x, y })
    }

    /// Creates a new `Dataset` from a flat buffer where each row holds `x_size` features
    /// followed by its target.
    ///
    /// # Arguments
    /// * `data` - The row major samples.
    /// * `x_size` - The amount of features per sample.
    ///
    /// # Returns
    /// An error if `data` can't be split in rows of `x_size + 1` values.
    pub fn from_flat(data: Vec<f64>, x_size: usize) -> Result<Self> {
        let row_size = x_size + 1;
        if data.len() % row_size != 0 {
            return Err(MlErr::SizeMismatch {
                a: "data",
                b: "row size",
                got: data.len() % row_size,
                expected: 0,
            });
        }

        let rows = data.len() / row_size;
        let mut x = Vec::with_capacity(rows * x_size);
        let mut y = Vec::with_capacity(rows);

        for row in data.chunks_exact(row_size) {
            x.extend_from_slice(&row[..x_size]);
            y.push(row[x_size]);
        }

        let x = Array2::from_shape_vec((rows, x_size), x).map_err(|_| MlErr::SizeMismatch {
            a: "features",
            b: "shape",
            got: rows * x_size,
            expected: rows * x_size,
        })?;

        Self::new(x, Array1::from(y))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.y.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// The amount of features per sample.
    #[inline]
    pub fn x_size(&self) -> usize {
        self.x.ncols()
    }

    #[inline]
    pub fn x(&self) -> ArrayView2<'_, f64> {
        self.x.view()
    }

    #[inline]
    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    /// Returns an error if any feature or target is `NaN` or infinite.
    pub fn ensure_finite(&self) -> Result<()> {
        if self.x.iter().any(|v| !v.is_finite()) {
            return Err(MlErr::NonFinite { what: "features" });
        }

        if self.y.iter().any(|v| !v.is_finite()) {
            return Err(MlErr::NonFinite { what: "targets" });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn from_flat_splits_features_and_targets() {
        let ds = Dataset::from_flat(vec![1.0, 2.0, 3.0, 10.0, 4.0, 5.0, 6.0, 20.0], 3).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.x_size(), 3);
        assert_eq!(ds.x(), array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(ds.y(), array![10.0_f64, 20.0]);
    }

    #[test]
    fn from_flat_rejects_ragged_rows() {
        let err = Dataset::from_flat(vec![1.0, 2.0, 3.0, 10.0, 4.0], 3).unwrap_err();
        assert!(matches!(err, MlErr::SizeMismatch { a: "data", .. }));
    }

    #[test]
    fn new_rejects_row_mismatch() {
        let err = Dataset::new(array![[1.0, 2.0]], array![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            MlErr::SizeMismatch {
                a: "features",
                b: "targets",
                got: 2,
                expected: 1
            }
        );
    }

    #[test]
    fn ensure_finite_flags_nan_targets() {
        let ds = Dataset::new(array![[1.0], [2.0]], array![1.0, f64::NAN]).unwrap();
        assert_eq!(
            ds.ensure_finite(),
            Err(MlErr::NonFinite { what: "targets" })
        );
    }
}
