//! Maximum-likelihood theta estimation for one dichotomy.
//!
//! Newton-Raphson is the canonical method: start at θ = 0, step by
//! `-gradient / curvature`, clamp to [-3, 3], stop when the step is below
//! tolerance or the curvature goes flat. A run that reaches the iteration
//! cap (typically one bouncing between the clamp bounds) is finished by
//! bisecting the gradient. The 2PL log-likelihood is concave in θ, so the
//! gradient changes sign at most once on [-3, 3].
//! A fixed-grid arg-max scan is available for comparison runs.

use serde::{Deserialize, Serialize};

use super::likelihood::{information, log_likelihood, ItemResponse};
use crate::domain::foundation::ValidationError;

/// Lower edge of the reported latent-trait range.
pub const THETA_MIN: f64 = -3.0;

/// Upper edge of the reported latent-trait range.
pub const THETA_MAX: f64 = 3.0;

pub const DEFAULT_MAX_ITERATIONS: usize = 20;
pub const DEFAULT_TOLERANCE: f64 = 1e-4;
pub const DEFAULT_MIN_CURVATURE: f64 = 1e-7;
pub const DEFAULT_PROBABILITY_FLOOR: f64 = 1e-9;
pub const DEFAULT_GRID_STEP: f64 = 0.05;

/// How theta is searched for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EstimationMethod {
    /// Newton-Raphson on the log-likelihood.
    NewtonRaphson {
        /// Iteration cap (default: 20)
        max_iterations: usize,
        /// Stop once |θ_new - θ| falls below this (default: 1e-4)
        tolerance: f64,
        /// Treat the likelihood as flat below this |curvature| (default: 1e-7)
        min_curvature: f64,
    },
    /// Arg-max of the log-likelihood over THETA_MIN..=THETA_MAX.
    GridScan {
        /// Grid spacing (default: 0.05)
        step: f64,
    },
}

impl Default for EstimationMethod {
    fn default() -> Self {
        Self::NewtonRaphson {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            min_curvature: DEFAULT_MIN_CURVATURE,
        }
    }
}

impl EstimationMethod {
    pub fn newton_raphson(max_iterations: usize, tolerance: f64, min_curvature: f64) -> Self {
        Self::NewtonRaphson {
            max_iterations,
            tolerance,
            min_curvature,
        }
    }

    pub fn grid_scan(step: f64) -> Self {
        Self::GridScan { step }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match *self {
            Self::NewtonRaphson {
                max_iterations,
                tolerance,
                min_curvature,
            } => {
                if max_iterations == 0 {
                    return Err(ValidationError::out_of_range("max_iterations", 1, u32::MAX, 0));
                }
                if !(tolerance.is_finite() && tolerance > 0.0) {
                    return Err(ValidationError::out_of_range("tolerance", 0.0, 1.0, tolerance));
                }
                if !(min_curvature.is_finite() && min_curvature >= 0.0) {
                    return Err(ValidationError::out_of_range(
                        "min_curvature",
                        0.0,
                        1.0,
                        min_curvature,
                    ));
                }
            }
            Self::GridScan { step } => {
                if !(step.is_finite() && step > 0.0 && step <= THETA_MAX - THETA_MIN) {
                    return Err(ValidationError::out_of_range(
                        "grid_step",
                        0.0,
                        THETA_MAX - THETA_MIN,
                        step,
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// No answered items; theta defaults to 0.
    NoItems,
    /// Step size fell below tolerance.
    Converged,
    /// Curvature vanished; the last theta was kept.
    FlatLikelihood,
    /// Newton-Raphson hit its iteration cap; theta is the root of the
    /// gradient found by bisection over [THETA_MIN, THETA_MAX].
    Bisection,
    /// Grid scan completed.
    GridScan,
}

/// Result of one estimation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThetaEstimate {
    pub theta: f64,
    /// Newton steps plus any bisection halvings, or grid points evaluated.
    pub iterations: usize,
    pub termination: Termination,
    pub items_used: usize,
    /// `1 / sqrt(information)` at the final theta; `None` without information.
    pub standard_error: Option<f64>,
}

impl ThetaEstimate {
    fn no_items() -> Self {
        Self {
            theta: 0.0,
            iterations: 0,
            termination: Termination::NoItems,
            items_used: 0,
            standard_error: None,
        }
    }
}

/// Estimates theta from the answered items of a single dichotomy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThetaEstimator {
    method: EstimationMethod,
    probability_floor: f64,
}

impl Default for ThetaEstimator {
    fn default() -> Self {
        Self {
            method: EstimationMethod::default(),
            probability_floor: DEFAULT_PROBABILITY_FLOOR,
        }
    }
}

impl ThetaEstimator {
    /// Creates an estimator, validating the search parameters.
    pub fn new(method: EstimationMethod, probability_floor: f64) -> Result<Self, ValidationError> {
        method.validate()?;
        if !(probability_floor.is_finite() && probability_floor > 0.0 && probability_floor < 0.5) {
            return Err(ValidationError::out_of_range(
                "probability_floor",
                0.0,
                0.5,
                probability_floor,
            ));
        }
        Ok(Self {
            method,
            probability_floor,
        })
    }

    pub fn method(&self) -> EstimationMethod {
        self.method
    }

    pub fn probability_floor(&self) -> f64 {
        self.probability_floor
    }

    /// Returns the theta maximizing the 2PL likelihood of `responses`.
    ///
    /// # Edge Cases
    /// - Empty responses: θ = 0 without iterating
    /// - Flat curvature on the first iteration: θ = 0
    /// - Iteration cap reached: θ from bisecting the gradient
    /// - Always within [THETA_MIN, THETA_MAX]
    pub fn estimate(&self, responses: &[ItemResponse]) -> ThetaEstimate {
        if responses.is_empty() {
            return ThetaEstimate::no_items();
        }

        let (theta, iterations, termination) = match self.method {
            EstimationMethod::NewtonRaphson {
                max_iterations,
                tolerance,
                min_curvature,
            } => match newton_raphson(responses, max_iterations, tolerance, min_curvature) {
                (theta, iterations, Some(termination)) => (theta, iterations, termination),
                (_, iterations, None) => {
                    let (theta, halvings) = bisect_gradient(responses, tolerance);
                    (theta, iterations + halvings, Termination::Bisection)
                }
            },
            EstimationMethod::GridScan { step } => {
                let (theta, evaluated) = grid_scan(responses, step, self.probability_floor);
                (theta, evaluated, Termination::GridScan)
            }
        };

        let info = information(responses, theta);
        let standard_error = if info > 0.0 && info.is_finite() {
            Some(1.0 / info.sqrt())
        } else {
            None
        };

        ThetaEstimate {
            theta,
            iterations,
            termination,
            items_used: responses.len(),
            standard_error,
        }
    }
}

/// Runs Newton-Raphson from θ = 0. A `None` termination means the cap was
/// reached without converging.
fn newton_raphson(
    responses: &[ItemResponse],
    max_iterations: usize,
    tolerance: f64,
    min_curvature: f64,
) -> (f64, usize, Option<Termination>) {
    let mut theta = 0.0_f64;

    for iteration in 1..=max_iterations {
        let curvature = -information(responses, theta);
        if curvature.abs() < min_curvature {
            return (theta, iteration, Some(Termination::FlatLikelihood));
        }

        let next = (theta - gradient(responses, theta) / curvature).clamp(THETA_MIN, THETA_MAX);
        let converged = (next - theta).abs() < tolerance;
        theta = next;
        if converged {
            return (theta, iteration, Some(Termination::Converged));
        }
    }

    (theta, max_iterations, None)
}

/// `Σ a(u - P)` at `theta`.
fn gradient(responses: &[ItemResponse], theta: f64) -> f64 {
    responses
        .iter()
        .map(|r| r.a * (r.u() - r.probability(theta)))
        .sum()
}

/// Halves [THETA_MIN, THETA_MAX] around the gradient's sign change until
/// the bracket is narrower than `tolerance`. Returns the midpoint and the
/// number of halvings.
///
/// A gradient that keeps one sign across the range pins θ to that bound.
fn bisect_gradient(responses: &[ItemResponse], tolerance: f64) -> (f64, usize) {
    let (mut lo, mut hi) = (THETA_MIN, THETA_MAX);
    if gradient(responses, lo) <= 0.0 {
        return (lo, 0);
    }
    if gradient(responses, hi) >= 0.0 {
        return (hi, 0);
    }

    let mut halvings = 0;
    while hi - lo > tolerance {
        let mid = 0.5 * (lo + hi);
        if gradient(responses, mid) > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
        halvings += 1;
    }
    (0.5 * (lo + hi), halvings)
}

/// Returns the first grid point with the highest log-likelihood and the
/// number of points evaluated.
fn grid_scan(responses: &[ItemResponse], step: f64, probability_floor: f64) -> (f64, usize) {
    let steps = ((THETA_MAX - THETA_MIN) / step).round() as usize;
    let mut best_theta = THETA_MIN;
    let mut best_ll = f64::NEG_INFINITY;

    for k in 0..=steps {
        let theta = (THETA_MIN + k as f64 * step).min(THETA_MAX);
        let ll = log_likelihood(responses, theta, probability_floor);
        if ll > best_ll {
            best_ll = ll;
            best_theta = theta;
        }
    }

    (best_theta, steps + 1)
}
