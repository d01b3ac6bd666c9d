//! Training datasets: an ordered, fixed-size collection of records.

pub mod synthetic;

use crate::common_types::{Label, Record, WeightVector};
use crate::perceptron::error::PerceptronError;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered records the trainer scans pass after pass.
///
/// The records themselves are never added or removed by training; only their
/// `predicted` slot changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dataset<F> {
    records: Vec<Record<F>>,
}

impl<F: Float> Dataset<F> {
    pub fn new(records: Vec<Record<F>>) -> Self {
        Dataset { records }
    }

    /// Builds a dataset from `(x1, x2, label)` triples whose label is already typed.
    pub fn from_labeled(points: impl IntoIterator<Item = (F, F, Label)>) -> Self {
        Dataset {
            records: points
                .into_iter()
                .map(|(x1, x2, label)| Record::new(x1, x2, label))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record<F>] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Record<F>] {
        &mut self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record<F>> {
        self.records.iter()
    }

    /// Fails on the first record with a NaN or infinite feature.
    pub fn validate_finite(&self) -> Result<(), PerceptronError> {
        for (index, record) in self.records.iter().enumerate() {
            for value in [record.x1, record.x2] {
                if !value.is_finite() {
                    return Err(PerceptronError::NonFiniteFeature {
                        index,
                        value: value.to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of records `weights` gets wrong, computed fresh without touching
    /// the stored predictions.
    pub fn misclassified(&self, weights: &WeightVector<F>) -> usize {
        self.records
            .iter()
            .filter(|r| !weights.classify(r.x1, r.x2).matches(r.label))
            .count()
    }

    pub fn is_separated_by(&self, weights: &WeightVector<F>) -> bool {
        self.misclassified(weights) == 0
    }

    /// Back to plain `(x1, x2, label)` triples with `-1`/`+1` labels.
    pub fn to_triples(&self) -> Vec<(F, F, F)> {
        self.records
            .iter()
            .map(|r| (r.x1, r.x2, r.label.value()))
            .collect()
    }
}

impl Dataset<f64> {
    /// Builds a dataset from raw numeric triples, rejecting labels other than ±1.
    pub fn from_triples(points: &[(f64, f64, f64)]) -> Result<Self, PerceptronError> {
        let records = points
            .iter()
            .map(|&(x1, x2, label)| Ok(Record::new(x1, x2, Label::try_from(label)?)))
            .collect::<Result<Vec<_>, PerceptronError>>()?;
        Ok(Dataset { records })
    }
}

impl<F> FromIterator<Record<F>> for Dataset<F> {
    fn from_iter<I: IntoIterator<Item = Record<F>>>(iter: I) -> Self {
        Dataset { records: iter.into_iter().collect() }
    }
}

impl<'a, F> IntoIterator for &'a Dataset<F> {
    type Item = &'a Record<F>;
    type IntoIter = std::slice::Iter<'a, Record<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
