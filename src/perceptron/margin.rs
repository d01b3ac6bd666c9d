//! Geometric margin of a decision boundary over a dataset.

use crate::common_types::WeightVector;
use crate::data::Dataset;
use num_traits::Float;
use ordered_float::OrderedFloat; // Total order over float margins for min()

/// Signed distance of every record to the boundary, positive when the record
/// is on its label's side. Empty when the normal vector `(w1, w2)` is zero.
pub fn signed_distances<F: Float>(weights: &WeightVector<F>, data: &Dataset<F>) -> Vec<f64> {
    let norm = weights.normal_norm();
    if norm == F::zero() {
        return Vec::new();
    }
    data.iter()
        .map(|r| {
            let d = r.label.value::<F>() * weights.activation(r.x1, r.x2) / norm;
            d.to_f64().unwrap_or(f64::NAN)
        })
        .collect()
}

/// Smallest signed distance over the dataset. Negative when some record is on
/// the wrong side; `None` for an empty dataset or a zero normal vector.
pub fn margin<F: Float>(weights: &WeightVector<F>, data: &Dataset<F>) -> Option<f64> {
    signed_distances(weights, data)
        .into_iter()
        .map(OrderedFloat)
        .min()
        .map(|m| m.0)
}

/// Index of the record with the smallest signed distance.
pub fn closest_to_boundary<F: Float>(weights: &WeightVector<F>, data: &Dataset<F>) -> Option<usize> {
    signed_distances(weights, data)
        .into_iter()
        .enumerate()
        .min_by_key(|&(_, d)| OrderedFloat(d))
        .map(|(i, _)| i)
}
