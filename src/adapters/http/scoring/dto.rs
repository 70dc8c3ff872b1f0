//! Request and response DTOs for scoring endpoints.
//!
//! These types define the JSON contract for the HTTP API. Dichotomy maps
//! are `BTreeMap`s keyed by [`Dichotomy`], so they always serialize in the
//! canonical E-I, S-N, T-F, J-P order.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::application::{InstrumentVersions, ScoringReport};
use crate::domain::foundation::{DomainError, QuestionNumber, ValidationError};
use crate::domain::instrument::{AnswerSet, Dichotomy, OptionChoice};
use crate::domain::scoring::{DichotomyResult, ThetaEstimate};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// The option picked for one question.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AnswerRequest {
    pub option: OptionChoice,
}

/// Request to score an answer set.
///
/// Keys are 1-based question numbers as strings; a `null` value or a
/// missing key means the question was omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub answers: HashMap<String, Option<AnswerRequest>>,
}

impl ScoreRequest {
    /// Parses the question-number keys into an [`AnswerSet`].
    pub fn into_answer_set(self) -> Result<AnswerSet, ValidationError> {
        self.answers
            .into_iter()
            .map(|(key, answer)| {
                let number: QuestionNumber = key.parse()?;
                Ok((number, answer.map(|a| a.option)))
            })
            .collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a scored answer set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub request_id: String,
    pub scored_at: String,
    pub type_code: String,
    pub results: BTreeMap<Dichotomy, DichotomyResult>,
    pub ignored_questions: Vec<QuestionNumber>,
    pub diagnostics: BTreeMap<Dichotomy, ThetaEstimate>,
    pub versions: InstrumentVersions,
}

impl From<ScoringReport> for ScoreResponse {
    fn from(report: ScoringReport) -> Self {
        Self {
            request_id: report.request_id.to_string(),
            scored_at: report.scored_at.to_string(),
            type_code: report.type_code(),
            results: report.sheet.results().clone(),
            ignored_questions: report.sheet.ignored_questions().to_vec(),
            diagnostics: report.sheet.estimates().clone(),
            versions: report.versions,
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details,
        }
    }
}
