//! Scoring Module - Pure domain services for dichotomy scoring.
//!
//! # Components
//!
//! - `ThetaEstimator` - 2PL maximum-likelihood theta per dichotomy
//! - `DichotomyScorer` - Theta → preference, PCI, PCC
//! - `ScoringEngine` - Runs both for all four dichotomies
//!
//! # Design Philosophy
//!
//! Everything here is synchronous and side-effect free. The instrument is
//! borrowed read-only, so concurrent requests need no coordination.

mod clarity;
mod dichotomy_scorer;
mod errors;
mod likelihood;
mod orchestrator;
mod theta_estimator;

pub use clarity::{PreferenceClarityCategory, PreferenceClarityIndex, PCI_MAX, PCI_MIN};
pub use dichotomy_scorer::{DichotomyResult, DichotomyScorer};
pub use errors::ScoringError;
pub use likelihood::{information, log_likelihood, probability, ItemResponse};
pub use orchestrator::{ScoreSheet, ScoringEngine, UnknownQuestionPolicy};
pub use theta_estimator::{
    EstimationMethod, Termination, ThetaEstimate, ThetaEstimator, DEFAULT_GRID_STEP,
    DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_CURVATURE, DEFAULT_PROBABILITY_FLOOR, DEFAULT_TOLERANCE,
    THETA_MAX, THETA_MIN,
};
