// Algorithm and data modules
pub mod common_types;
pub mod data;
pub mod perceptron;

pub use common_types::{Label, Record, Sign, WeightVector};
pub use data::Dataset;
pub use perceptron::TrainerConfig;
pub use perceptron::error::PerceptronError;
pub use perceptron::trainer::{PerceptronTrainer, TrainingReport, train};

#[cfg(feature = "python")]
mod python {
    use crate::data::synthetic::generate_separable;
    use crate::perceptron::error::PerceptronError;
    use crate::{Dataset, PerceptronTrainer, TrainerConfig, WeightVector};
    use pyo3::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn to_py_err(err: PerceptronError) -> PyErr {
        match err {
            PerceptronError::NotConverged { .. } => {
                PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(err.to_string())
            }
            _ => PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string()),
        }
    }

    fn fit_py(
        weights: Vec<f64>,
        data: Vec<(f64, f64, f64)>,
        config: TrainerConfig,
    ) -> PyResult<(Vec<f64>, usize, usize)> {
        let mut weights = WeightVector::from_slice(&weights).map_err(to_py_err)?;
        let mut dataset = Dataset::from_triples(&data).map_err(to_py_err)?;
        let report = PerceptronTrainer::new(config)
            .fit(&mut weights, &mut dataset)
            .map_err(to_py_err)?;
        Ok((report.weights.to_array().to_vec(), report.steps, report.passes))
    }

    /// Runs PLA until every point is classified correctly.
    /// `data` is a list of `(x1, x2, label)` tuples with labels -1 or +1.
    /// Returns `([w0, w1, w2], steps)`. Does not return on non-separable data.
    #[pyfunction]
    fn train(weights: Vec<f64>, data: Vec<(f64, f64, f64)>) -> PyResult<(Vec<f64>, usize)> {
        let (weights, steps, _) = fit_py(weights, data, TrainerConfig::default())?;
        Ok((weights, steps))
    }

    /// Like `train`, but raises `RuntimeError` after `max_passes` passes with errors.
    /// Returns `([w0, w1, w2], steps, passes)`.
    #[pyfunction]
    fn train_bounded(
        weights: Vec<f64>,
        data: Vec<(f64, f64, f64)>,
        max_passes: usize,
    ) -> PyResult<(Vec<f64>, usize, usize)> {
        if max_passes == 0 {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "max_passes must be greater than 0.",
            ));
        }
        fit_py(weights, data, TrainerConfig::default().with_max_passes(max_passes))
    }

    /// Random linearly separable points in [-1, 1]^2 as `(x1, x2, label)` tuples.
    #[pyfunction]
    #[pyo3(name = "generate_separable")]
    fn generate_separable_py(n: usize, seed: u64) -> Vec<(f64, f64, f64)> {
        let mut rng = StdRng::seed_from_u64(seed);
        let (dataset, _) = generate_separable(n, &mut rng);
        dataset.to_triples()
    }

    /// The Python module. Its name must match `lib.name` in `Cargo.toml`.
    #[pymodule]
    fn perceptron_learning_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(train, m)?)?;
        m.add_function(wrap_pyfunction!(train_bounded, m)?)?;
        m.add_function(wrap_pyfunction!(generate_separable_py, m)?)?;
        Ok(())
    }
}
