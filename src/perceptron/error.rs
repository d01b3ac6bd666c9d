//! Error type for perceptron training and input validation.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PerceptronError {
    /// A label other than -1 or +1.
    InvalidLabel(f64),
    /// A feature that is NaN or infinite.
    NonFiniteFeature { index: usize, value: f64 },
    /// A weight slice of the wrong length; three values are required.
    InvalidWeights(usize),
    /// The configured pass limit was reached while errors remained.
    NotConverged {
        passes: usize,
        steps: usize,
        weights: [f64; 3],
    },
}

impl fmt::Display for PerceptronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerceptronError::InvalidLabel(label) => {
                write!(f, "Invalid label {}: labels must be -1 or +1", label)
            }
            PerceptronError::NonFiniteFeature { index, value } => {
                write!(f, "Record {} has a non-finite feature: {}", index, value)
            }
            PerceptronError::InvalidWeights(len) => {
                write!(f, "Expected 3 weights [w0, w1, w2], got {}", len)
            }
            PerceptronError::NotConverged { passes, steps, weights } => write!(
                f,
                "Did not converge after {} passes ({} updates), last weights {:?}",
                passes, steps, weights
            ),
        }
    }
}

impl std::error::Error for PerceptronError {}
