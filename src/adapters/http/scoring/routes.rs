//! Axum router configuration for scoring endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_instrument, health, reload_instrument, score_answers, ScoringAppState};

/// Create the scoring API router, to be mounted at `/api`.
///
/// # Routes
/// - `POST /score` - Score an answer set
/// - `GET /instrument` - Describe the active instrument
/// - `POST /instrument/reload` - Reload datasets from their sources
pub fn scoring_routes() -> Router<ScoringAppState> {
    Router::new()
        .route("/score", post(score_answers))
        .route("/instrument", get(get_instrument))
        .route("/instrument/reload", post(reload_instrument))
}

/// Create the complete router, including the health probe.
///
/// # Example
///
/// ```ignore
/// use typescore::adapters::http::{scoring_router, ScoringAppState};
///
/// let app = scoring_router().with_state(state);
/// ```
pub fn scoring_router() -> Router<ScoringAppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", scoring_routes())
}
