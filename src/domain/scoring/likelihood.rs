//! Two-parameter logistic response model.

use crate::domain::instrument::{ItemParameters, ScoreKey};

/// One answered item as seen by the estimator: its calibration and the
/// observed response `u` (1 = positive pole endorsed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemResponse {
    pub a: f64,
    pub b: f64,
    pub response: ScoreKey,
}

impl ItemResponse {
    pub fn new(a: f64, b: f64, response: ScoreKey) -> Self {
        Self { a, b, response }
    }

    pub fn from_item(item: &ItemParameters, response: ScoreKey) -> Self {
        Self::new(item.a(), item.b(), response)
    }

    /// Observed response as 0.0 or 1.0.
    pub fn u(&self) -> f64 {
        self.response.as_response()
    }

    /// Probability of a positive-pole response at `theta`.
    pub fn probability(&self, theta: f64) -> f64 {
        probability(self.a, self.b, theta)
    }
}

/// `P(θ) = 1 / (1 + exp(-a(θ - b)))`
pub fn probability(a: f64, b: f64, theta: f64) -> f64 {
    1.0 / (1.0 + (-a * (theta - b)).exp())
}

/// Log-likelihood of all responses at `theta`.
///
/// Both `P` and `1 - P` are floored at `probability_floor` before taking
/// the logarithm.
pub fn log_likelihood(responses: &[ItemResponse], theta: f64, probability_floor: f64) -> f64 {
    responses
        .iter()
        .map(|r| {
            let p = r.probability(theta);
            let u = r.u();
            u * p.max(probability_floor).ln() + (1.0 - u) * (1.0 - p).max(probability_floor).ln()
        })
        .sum()
}

/// Fisher information `Σ a²·P·Q` at `theta`.
pub fn information(responses: &[ItemResponse], theta: f64) -> f64 {
    responses
        .iter()
        .map(|r| {
            let p = r.probability(theta);
            r.a * r.a * p * (1.0 - p)
        })
        .sum()
}
