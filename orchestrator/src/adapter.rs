use comms::Sample;
use machine_learning::{Dataset, Result};

/// The amount of features in every served sample.
pub const X_SIZE: usize = 3;

/// Turns the served rows into a trainable dataset.
pub fn to_dataset(samples: &[Sample]) -> Result<Dataset> {
    let data = samples
        .iter()
        .flat_map(|&Sample { a, b, c, t }| [a, b, c, t])
        .collect();

    Dataset::from_flat(data, X_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_keep_feature_order() {
        let samples = [
            Sample {
                a: 1.0,
                b: 2.0,
                c: 3.0,
                t: 10.0,
            },
            Sample {
                a: 4.0,
                b: 5.0,
                c: 6.0,
                t: 20.0,
            },
        ];

        let ds = to_dataset(&samples).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.x_size(), X_SIZE);
        assert_eq!(ds.x().row(1).to_vec(), vec![4.0, 5.0, 6.0]);
        assert_eq!(ds.y().to_vec(), vec![10.0, 20.0]);
    }

    #[test]
    fn no_rows_is_an_empty_dataset() {
        assert!(to_dataset(&[]).unwrap().is_empty());
    }
}
