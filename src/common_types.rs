//! This module contains the data structures shared by the trainer, the dataset
//! and the synthetic data helpers.

use crate::perceptron::error::PerceptronError;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// True class of a record. Only the two perceptron classes exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    /// The label as a float, `-1` or `+1`.
    pub fn value<F: Float>(self) -> F {
        match self {
            Label::Negative => -F::one(),
            Label::Positive => F::one(),
        }
    }
}

impl TryFrom<i32> for Label {
    type Error = PerceptronError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Label::Positive),
            -1 => Ok(Label::Negative),
            other => Err(PerceptronError::InvalidLabel(other as f64)),
        }
    }
}

impl TryFrom<f64> for Label {
    type Error = PerceptronError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 1.0 {
            Ok(Label::Positive)
        } else if value == -1.0 {
            Ok(Label::Negative)
        } else {
            Err(PerceptronError::InvalidLabel(value))
        }
    }
}

/// Numeric sign of an activation.
///
/// `Zero` is kept as its own value: a point lying exactly on the decision
/// boundary never matches either label and is therefore always an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    pub fn of<F: Float>(value: F) -> Self {
        if value > F::zero() {
            Sign::Positive
        } else if value < F::zero() {
            Sign::Negative
        } else {
            // NaN lands here too; it can never match a label either.
            Sign::Zero
        }
    }

    pub fn matches(self, label: Label) -> bool {
        matches!(
            (self, label),
            (Sign::Positive, Label::Positive) | (Sign::Negative, Label::Negative)
        )
    }
}

impl From<Label> for Sign {
    fn from(label: Label) -> Self {
        match label {
            Label::Negative => Sign::Negative,
            Label::Positive => Sign::Positive,
        }
    }
}

/// A single two-feature training record.
///
/// - `F`: The type of the features (e.g., `f64`, `f32`).
///
/// `predicted` is `None` until the trainer has run a pass over the record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Record<F> {
    pub x1: F,
    pub x2: F,
    pub label: Label,
    pub predicted: Option<Sign>,
}

impl<F: Float> Record<F> {
    pub fn new(x1: F, x2: F, label: Label) -> Self {
        Record { x1, x2, label, predicted: None }
    }

    /// True once a pass has stored a prediction equal to the label.
    pub fn is_correct(&self) -> bool {
        self.predicted.is_some_and(|p| p.matches(self.label))
    }
}

/// Bias plus the two feature weights of the decision boundary
/// `w0 + w1*x1 + w2*x2 = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightVector<F> {
    pub w0: F,
    pub w1: F,
    pub w2: F,
}

impl<F: Float> WeightVector<F> {
    pub fn new(w0: F, w1: F, w2: F) -> Self {
        WeightVector { w0, w1, w2 }
    }

    pub fn zeros() -> Self {
        WeightVector::new(F::zero(), F::zero(), F::zero())
    }

    /// Builds a weight vector from a `[w0, w1, w2]` slice.
    pub fn from_slice(weights: &[F]) -> Result<Self, PerceptronError> {
        match weights {
            [w0, w1, w2] => Ok(WeightVector::new(*w0, *w1, *w2)),
            _ => Err(PerceptronError::InvalidWeights(weights.len())),
        }
    }

    pub fn to_array(&self) -> [F; 3] {
        [self.w0, self.w1, self.w2]
    }

    pub fn to_f64_array(&self) -> [f64; 3] {
        self.to_array().map(|w| w.to_f64().unwrap_or(f64::NAN))
    }

    pub fn activation(&self, x1: F, x2: F) -> F {
        self.w0 + self.w1 * x1 + self.w2 * x2
    }

    pub fn classify(&self, x1: F, x2: F) -> Sign {
        Sign::of(self.activation(x1, x2))
    }

    /// Mistake-driven correction towards `record`'s label.
    pub fn update_towards(&mut self, record: &Record<F>) {
        let y: F = record.label.value();
        self.w1 = self.w1 + y * record.x1;
        self.w2 = self.w2 + y * record.x2;
        self.w0 = self.w0 + y;
    }

    /// L2 norm of the boundary's normal vector `(w1, w2)`.
    pub fn normal_norm(&self) -> F {
        (self.w1 * self.w1 + self.w2 * self.w2).sqrt()
    }
}

impl<F: Float> Default for WeightVector<F> {
    fn default() -> Self {
        WeightVector::zeros()
    }
}

impl<F: Float> From<[F; 3]> for WeightVector<F> {
    fn from(w: [F; 3]) -> Self {
        WeightVector::new(w[0], w[1], w[2])
    }
}
