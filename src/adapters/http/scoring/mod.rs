//! HTTP adapter for scoring endpoints.
//!
//! Exposes the scoring engine via REST API:
//! - `POST /api/score` - Score an answer set
//! - `GET /api/instrument` - Describe the active instrument
//! - `POST /api/instrument/reload` - Reload the instrument datasets
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AnswerRequest, ErrorResponse, HealthResponse, ScoreRequest, ScoreResponse};
pub use handlers::{ScoringApiError, ScoringAppState};
pub use routes::{scoring_router, scoring_routes};
