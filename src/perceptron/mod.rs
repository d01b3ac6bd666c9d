//! Perceptron learning: the mistake-driven trainer, its configuration and
//! post-training diagnostics.

pub mod error;
pub mod margin;
pub mod trainer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for [`trainer::PerceptronTrainer`].
///
/// The default reproduces plain PLA: no pass limit and no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrainerConfig {
    /// Maximum number of full passes; `None` keeps going until convergence,
    /// which never happens on non-separable data.
    pub max_passes: Option<usize>,
    /// Print one progress line per pass to stderr.
    pub verbose: bool,
}

impl TrainerConfig {
    pub fn new(max_passes: Option<usize>, verbose: bool) -> Self {
        if max_passes == Some(0) {
            panic!("max_passes must be greater than 0.");
        }
        TrainerConfig { max_passes, verbose }
    }

    pub fn with_max_passes(self, max_passes: usize) -> Self {
        TrainerConfig::new(Some(max_passes), self.verbose)
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
