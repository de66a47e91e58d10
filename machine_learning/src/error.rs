use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The machine learning module's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum MlErr {
    EmptyDataset,
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    InvalidHyperparameter {
        name: &'static str,
        detail: String,
    },
    NonFinite {
        what: &'static str,
    },
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::EmptyDataset => write!(f, "Can't fit a model on an empty dataset"),
            MlErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            MlErr::InvalidHyperparameter { name, detail } => {
                write!(f, "Invalid value for hyperparameter {name}: {detail}")
            }
            MlErr::NonFinite { what } => write!(f, "Found a non finite value in the {what}"),
        }
    }
}

impl Error for MlErr {}
