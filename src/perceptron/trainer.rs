//! The Perceptron Learning Algorithm.
//!
//! Each pass first classifies every record with the weights as they stand at the
//! start of the pass, then walks the records in order and corrects the weights
//! once per misclassified record. Predictions are not refreshed between the
//! corrections of a pass. Training stops after the first pass without errors.

use super::TrainerConfig;
use super::error::PerceptronError;
use crate::common_types::{Label, WeightVector};
use crate::data::Dataset;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a converged training run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrainingReport<F> {
    pub weights: WeightVector<F>,
    /// Individual weight updates over the whole run.
    pub steps: usize,
    /// Full passes over the dataset, including the final error-free one.
    pub passes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PerceptronTrainer {
    config: TrainerConfig,
}

impl PerceptronTrainer {
    pub fn new(config: TrainerConfig) -> Self {
        PerceptronTrainer { config }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// One full pass. Stores every record's prediction, then applies one update
    /// per record whose stored prediction differs from its label.
    ///
    /// Returns the number of updates; zero means the weights separate the data.
    pub fn run_pass<F: Float>(weights: &mut WeightVector<F>, data: &mut Dataset<F>) -> usize {
        for record in data.records_mut() {
            record.predicted = Some(weights.classify(record.x1, record.x2));
        }

        let mut steps = 0;
        for record in data.records() {
            if !record.is_correct() {
                weights.update_towards(record);
                steps += 1;
            }
        }
        steps
    }

    /// Trains `weights` in place until a pass makes no update.
    ///
    /// # Errors
    /// - `NonFiniteFeature` if a record holds NaN or infinity; such a record can
    ///   never be classified.
    /// - `NotConverged` if `max_passes` is configured and exhausted. `weights`
    ///   and the stored predictions keep the state of the last pass.
    pub fn fit<F: Float>(
        &self,
        weights: &mut WeightVector<F>,
        data: &mut Dataset<F>,
    ) -> Result<TrainingReport<F>, PerceptronError> {
        data.validate_finite()?;

        let mut steps = 0;
        let mut passes = 0;
        loop {
            if let Some(max_passes) = self.config.max_passes {
                if passes >= max_passes {
                    if self.config.verbose {
                        eprintln!(
                            "Warning: stopping after {} passes with errors remaining ({} updates).",
                            passes, steps
                        );
                    }
                    return Err(PerceptronError::NotConverged {
                        passes,
                        steps,
                        weights: weights.to_f64_array(),
                    });
                }
            }

            let updates = Self::run_pass(weights, data);
            passes += 1;
            steps += updates;

            if self.config.verbose {
                eprintln!(
                    "Pass {}: {} misclassified, {} total updates",
                    passes, updates, steps
                );
            }
            if updates == 0 {
                break;
            }
        }

        if self.config.verbose {
            eprintln!(
                "Converged after {} passes and {} updates, weights {:?}",
                passes,
                steps,
                weights.to_f64_array()
            );
        }
        Ok(TrainingReport { weights: *weights, steps, passes })
    }
}

/// Runs PLA from `weights` over `(x1, x2, label)` triples and returns the final
/// `[w0, w1, w2]` together with the number of weight updates.
///
/// There is no pass limit: on data that is not linearly separable this never
/// returns. Use [`PerceptronTrainer::fit`] with `max_passes` to bound it.
pub fn train<F: Float>(weights: [F; 3], data: &[(F, F, Label)]) -> ([F; 3], usize) {
    let mut weights = WeightVector::from(weights);
    let mut data = Dataset::from_labeled(data.iter().copied());

    let mut steps = 0;
    loop {
        let updates = PerceptronTrainer::run_pass(&mut weights, &mut data);
        steps += updates;
        if updates == 0 {
            break;
        }
    }
    (weights.to_array(), steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common_types::{Label::Negative as N, Label::Positive as P, Sign};
    use crate::data::synthetic::{estimate_disagreement, generate_separable};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn clusters() -> Vec<(f64, f64, Label)> {
        vec![(1.0, 1.0, P), (2.0, 2.0, P), (-1.0, -1.0, N), (-2.0, -1.0, N)]
    }

    #[test]
    fn test_train_separates_two_clusters() {
        let data = clusters();
        let (w, steps) = train([0.0, 0.0, 0.0], &data);
        assert!(steps > 0);
        let w = WeightVector::from(w);
        for &(x1, x2, label) in &data {
            assert!(w.classify(x1, x2).matches(label), "({}, {}) misclassified by {:?}", x1, x2, w);
        }
    }

    #[test]
    fn test_two_clusters_exact_trajectory() {
        // Pass 1: every prediction is 0, so all four records update the weights:
        // (0,0,0) -> (1,1,1) -> (2,3,3) -> (1,4,4) -> (0,6,5).
        // Pass 2: all four are on the right side of 6*x1 + 5*x2 = 0.
        let mut weights = WeightVector::zeros();
        let mut data = Dataset::from_labeled(clusters());
        let report = PerceptronTrainer::default().fit(&mut weights, &mut data).unwrap();

        assert_eq!(report.steps, 4);
        assert_eq!(report.passes, 2);
        assert_eq!(weights, WeightVector::new(0.0, 6.0, 5.0));
        assert_eq!(report.weights, weights);
        assert!(data.iter().all(|r| r.is_correct()));
    }

    #[test]
    fn test_predictions_are_frozen_within_a_pass() {
        // After the first record's update (w = (1, 1, 0)) the second record is
        // already correct, but its stale prediction of 0 still triggers an update.
        let mut weights = WeightVector::zeros();
        let mut data = Dataset::from_labeled(vec![(1.0, 0.0, P), (2.0, 0.0, P)]);
        let updates = PerceptronTrainer::run_pass(&mut weights, &mut data);

        assert_eq!(updates, 2);
        assert_eq!(weights, WeightVector::new(2.0, 3.0, 0.0));
        assert!(data.iter().all(|r| r.predicted == Some(Sign::Zero)));
    }

    #[test]
    fn test_retraining_converged_weights_is_idempotent() {
        let data = clusters();
        let (w, _) = train([0.0, 0.0, 0.0], &data);
        let (w_again, steps) = train(w, &data);
        assert_eq!(steps, 0);
        assert_eq!(w_again, w);
    }

    #[test]
    fn test_single_point_on_boundary_converges_in_one_step() {
        // sign(0) = 0 never equals +1, so the first pass updates w0 to 1.
        let mut weights = WeightVector::zeros();
        let mut data = Dataset::from_labeled(vec![(0.0, 0.0, P)]);
        let report = PerceptronTrainer::default().fit(&mut weights, &mut data).unwrap();

        assert_eq!(report.steps, 1);
        assert_eq!(report.passes, 2);
        assert_eq!(weights, WeightVector::new(1.0, 0.0, 0.0));
        assert_eq!(data.records()[0].predicted, Some(Sign::Positive));
    }

    #[test]
    fn test_already_correct_single_record_takes_one_pass() {
        let mut weights = WeightVector::new(0.0, 1.0, 0.0);
        let mut data = Dataset::from_labeled(vec![(3.0, -1.0, P)]);
        let report = PerceptronTrainer::default().fit(&mut weights, &mut data).unwrap();

        assert_eq!(report.steps, 0);
        assert_eq!(report.passes, 1);
        assert_eq!(weights, WeightVector::new(0.0, 1.0, 0.0));
        assert_eq!(data.records()[0].predicted, Some(Sign::Positive));
    }

    #[test]
    fn test_empty_dataset() {
        let (w, steps) = train::<f64>([0.5, -1.0, 2.0], &[]);
        assert_eq!(steps, 0);
        assert_eq!(w, [0.5, -1.0, 2.0]);

        let mut weights = WeightVector::<f64>::zeros();
        let mut data = Dataset::new(Vec::new());
        let report = PerceptronTrainer::default().fit(&mut weights, &mut data).unwrap();
        assert_eq!((report.steps, report.passes), (0, 1));
    }

    #[test]
    fn test_bounded_fit_reports_non_separable_data() {
        // XOR is not linearly separable.
        let mut weights = WeightVector::zeros();
        let mut data = Dataset::from_labeled(vec![
            (0.0, 0.0, N),
            (1.0, 1.0, N),
            (0.0, 1.0, P),
            (1.0, 0.0, P),
        ]);
        let trainer = PerceptronTrainer::new(TrainerConfig::default().with_max_passes(25));
        match trainer.fit(&mut weights, &mut data) {
            Err(PerceptronError::NotConverged { passes, steps, weights: last }) => {
                assert_eq!(passes, 25);
                assert!(steps >= 25);
                assert_eq!(last, weights.to_f64_array());
            }
            other => panic!("expected NotConverged, got {:?}", other),
        }
    }

    #[test]
    fn test_bounded_fit_succeeds_within_limit() {
        let mut weights = WeightVector::zeros();
        let mut data = Dataset::from_labeled(clusters());
        let trainer = PerceptronTrainer::new(TrainerConfig::default().with_max_passes(2));
        let report = trainer.fit(&mut weights, &mut data).unwrap();
        assert_eq!(report.passes, 2);
    }

    #[test]
    fn test_fit_rejects_non_finite_features() {
        let mut weights = WeightVector::zeros();
        let mut data = Dataset::from_labeled(vec![(1.0, f64::INFINITY, P)]);
        let err = PerceptronTrainer::default().fit(&mut weights, &mut data).unwrap_err();
        assert!(matches!(err, PerceptronError::NonFiniteFeature { index: 0, .. }));
        assert!(data.records()[0].predicted.is_none());
    }

    #[test]
    fn test_converges_on_random_separable_data() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..20 {
            let (mut data, target) = generate_separable(50, &mut rng);
            let mut weights = WeightVector::zeros();
            let report = PerceptronTrainer::default().fit(&mut weights, &mut data).unwrap();

            assert!(data.is_separated_by(&weights));
            assert!(data.iter().all(|r| r.is_correct()));
            assert!(report.passes >= 1);

            let disagreement = estimate_disagreement(&target, &weights, 500, &mut rng);
            assert!((0.0..=1.0).contains(&disagreement));
        }
    }

    #[test]
    fn test_train_with_f32_features() {
        let data: Vec<(f32, f32, Label)> = vec![(0.5, 2.0, P), (0.5, -2.0, N)];
        let (w, steps) = train([0.0_f32, 0.0, 0.0], &data);
        assert!(steps > 0);
        let w = WeightVector::from(w);
        assert!(Dataset::from_labeled(data).is_separated_by(&w));
    }
}
