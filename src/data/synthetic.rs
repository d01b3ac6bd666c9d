//! Random linearly separable data for experiments and tests.
//!
//! Points are drawn uniformly from the square [-1, 1] x [-1, 1] and labeled by a
//! random target line passing through two other uniform points of the square.

use super::Dataset;
use crate::common_types::{Label, Record, Sign, WeightVector};
use rand::Rng;

/// The target function `f`: a line through two points of the square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetLine {
    pub p: (f64, f64),
    pub q: (f64, f64),
    weights: WeightVector<f64>,
}

impl TargetLine {
    /// Line through `p` and `q`. Returns `None` when the points coincide.
    pub fn through(p: (f64, f64), q: (f64, f64)) -> Option<Self> {
        let (dx, dy) = (q.0 - p.0, q.1 - p.1);
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        // Cross product (q - p) x (x - p) rewritten as w0 + w1*x1 + w2*x2.
        let weights = WeightVector::new(dy * p.0 - dx * p.1, -dy, dx);
        Some(TargetLine { p, q, weights })
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let p = uniform_point(rng);
            let q = uniform_point(rng);
            if let Some(line) = TargetLine::through(p, q) {
                return line;
            }
        }
    }

    /// Side of the line the point falls on; `None` exactly on the line.
    pub fn label_of(&self, x1: f64, x2: f64) -> Option<Label> {
        match self.weights.classify(x1, x2) {
            Sign::Positive => Some(Label::Positive),
            Sign::Negative => Some(Label::Negative),
            Sign::Zero => None,
        }
    }

    /// The line as a weight vector that separates its own labels perfectly.
    pub fn as_weights(&self) -> WeightVector<f64> {
        self.weights
    }
}

fn uniform_point<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    (rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0))
}

/// Draws `n` points labeled by `target`. Points falling exactly on the line are
/// redrawn so that every record carries a label.
pub fn generate_with_target<R: Rng + ?Sized>(
    n: usize,
    target: &TargetLine,
    rng: &mut R,
) -> Dataset<f64> {
    let mut records = Vec::with_capacity(n);
    while records.len() < n {
        let (x1, x2) = uniform_point(rng);
        if let Some(label) = target.label_of(x1, x2) {
            records.push(Record::new(x1, x2, label));
        }
    }
    Dataset::new(records)
}

/// Draws a random target line and `n` points labeled by it.
pub fn generate_separable<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (Dataset<f64>, TargetLine) {
    let target = TargetLine::random(rng);
    let data = generate_with_target(n, &target, rng);
    (data, target)
}

/// Monte-Carlo estimate of P[f(x) != g(x)] between the target line and a
/// learned hypothesis, over `samples` fresh uniform points.
pub fn estimate_disagreement<R: Rng + ?Sized>(
    target: &TargetLine,
    weights: &WeightVector<f64>,
    samples: usize,
    rng: &mut R,
) -> f64 {
    if samples == 0 {
        return 0.0;
    }
    let target_weights = target.as_weights();
    let disagreements = (0..samples)
        .filter(|_| {
            let (x1, x2) = uniform_point(rng);
            target_weights.classify(x1, x2) != weights.classify(x1, x2)
        })
        .count();
    disagreements as f64 / samples as f64
}
