//! HTTP handlers for scoring and instrument endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{
    GetInstrumentInfoHandler, InstrumentRegistry, ReloadInstrumentHandler, ScoreAnswersCommand,
    ScoreAnswersHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::scoring::ScoringEngine;
use crate::ports::{ItemParameterSource, QuestionBankSource};

use super::dto::{ErrorResponse, HealthResponse, ScoreRequest, ScoreResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct ScoringAppState {
    pub registry: Arc<InstrumentRegistry>,
    pub engine: ScoringEngine,
    pub parameter_source: Arc<dyn ItemParameterSource>,
    pub question_source: Arc<dyn QuestionBankSource>,
}

impl ScoringAppState {
    /// Create handlers on demand from the shared state.
    pub fn score_answers_handler(&self) -> ScoreAnswersHandler {
        ScoreAnswersHandler::new(self.registry.clone(), self.engine)
    }

    pub fn instrument_info_handler(&self) -> GetInstrumentInfoHandler {
        GetInstrumentInfoHandler::new(self.registry.clone())
    }

    pub fn reload_instrument_handler(&self) -> ReloadInstrumentHandler {
        ReloadInstrumentHandler::new(
            self.parameter_source.clone(),
            self.question_source.clone(),
            self.registry.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::default())
}

/// GET /api/instrument - Describe the active instrument
pub async fn get_instrument(State(state): State<ScoringAppState>) -> impl IntoResponse {
    Json(state.instrument_info_handler().handle())
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/score - Score an answer set
pub async fn score_answers(
    State(state): State<ScoringAppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ScoringApiError> {
    let Json(request) = payload.map_err(ScoringApiError::malformed_body)?;
    let cmd = ScoreAnswersCommand {
        answers: request.into_answer_set().map_err(DomainError::from)?,
    };

    let report = state.score_answers_handler().handle(cmd)?;

    Ok(Json(ScoreResponse::from(report)))
}

/// POST /api/instrument/reload - Reload calibration and question bank
pub async fn reload_instrument(
    State(state): State<ScoringAppState>,
) -> Result<impl IntoResponse, ScoringApiError> {
    let info = state
        .reload_instrument_handler()
        .handle()
        .await
        .map_err(ScoringApiError::reload_failed)?;

    Ok(Json(info))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct ScoringApiError {
    status: StatusCode,
    error: DomainError,
}

impl ScoringApiError {
    fn malformed_body(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: DomainError::new(ErrorCode::InvalidFormat, rejection.body_text()),
        }
    }

    /// Missing datasets map to 503, unusable ones to 422.
    fn reload_failed(error: DomainError) -> Self {
        let status = match error.code {
            ErrorCode::InstrumentUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        Self { status, error }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<DomainError> for ScoringApiError {
    fn from(error: DomainError) -> Self {
        let status = match error.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
            ErrorCode::UnknownQuestion => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::InstrumentUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InstrumentInconsistent | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self { status, error }
    }
}

impl IntoResponse for ScoringApiError {
    fn into_response(self) -> axum::response::Response {
        if self.status.is_server_error() {
            tracing::error!(code = %self.error.code, "{}", self.error.message);
        }
        let body = ErrorResponse::from(&self.error);
        (self.status, Json(body)).into_response()
    }
}
