//! Scoring engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::scoring::{
    EstimationMethod, ScoringEngine, ThetaEstimator, UnknownQuestionPolicy, DEFAULT_GRID_STEP,
    DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_CURVATURE, DEFAULT_PROBABILITY_FLOOR, DEFAULT_TOLERANCE,
};

/// Theta search strategy
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMethod {
    #[default]
    NewtonRaphson,
    GridScan,
}

/// Scoring configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Theta search strategy
    #[serde(default)]
    pub method: ScoringMethod,

    /// Newton-Raphson iteration cap
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Newton-Raphson step tolerance
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Curvature magnitude treated as flat
    #[serde(default = "default_min_curvature")]
    pub min_curvature: f64,

    /// Probability floor inside the log-likelihood
    #[serde(default = "default_probability_floor")]
    pub probability_floor: f64,

    /// Grid spacing for the grid scan
    #[serde(default = "default_grid_step")]
    pub grid_step: f64,

    /// Fail requests that answer questions outside the bank
    #[serde(default)]
    pub reject_unknown_questions: bool,
}

impl ScoringConfig {
    pub fn estimation_method(&self) -> EstimationMethod {
        match self.method {
            ScoringMethod::NewtonRaphson => EstimationMethod::newton_raphson(
                self.max_iterations,
                self.tolerance,
                self.min_curvature,
            ),
            ScoringMethod::GridScan => EstimationMethod::grid_scan(self.grid_step),
        }
    }

    pub fn unknown_question_policy(&self) -> UnknownQuestionPolicy {
        if self.reject_unknown_questions {
            UnknownQuestionPolicy::Reject
        } else {
            UnknownQuestionPolicy::Ignore
        }
    }

    /// Build the scoring engine these settings describe.
    pub fn engine(&self) -> Result<ScoringEngine, ValidationError> {
        let estimator = ThetaEstimator::new(self.estimation_method(), self.probability_floor)
            .map_err(|e| ValidationError::InvalidScoring {
                field: "scoring",
                reason: e.to_string(),
            })?;
        Ok(ScoringEngine::new(estimator, self.unknown_question_policy()))
    }

    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine().map(|_| ())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            method: ScoringMethod::default(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
            min_curvature: default_min_curvature(),
            probability_floor: default_probability_floor(),
            grid_step: default_grid_step(),
            reject_unknown_questions: false,
        }
    }
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_min_curvature() -> f64 {
    DEFAULT_MIN_CURVATURE
}

fn default_probability_floor() -> f64 {
    DEFAULT_PROBABILITY_FLOOR
}

fn default_grid_step() -> f64 {
    DEFAULT_GRID_STEP
}
