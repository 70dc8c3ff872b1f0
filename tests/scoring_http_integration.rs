//! Integration tests for the scoring HTTP endpoints.
//!
//! These tests drive the full router with `tower::ServiceExt::oneshot`:
//! 1. Scoring requests serialize results in canonical order
//! 2. Error responses carry `{code, message}` bodies
//! 3. Reloading swaps the calibration without disturbing scoring

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use typescore::adapters::http::{scoring_router, ScoringAppState};
use typescore::adapters::instrument::{EmbeddedInstrument, FileParameterSource};
use typescore::application::InstrumentRegistry;
use typescore::domain::scoring::{ScoringEngine, ThetaEstimator, UnknownQuestionPolicy};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn embedded_state(engine: ScoringEngine) -> ScoringAppState {
    let source = Arc::new(EmbeddedInstrument);
    ScoringAppState {
        registry: Arc::new(InstrumentRegistry::new(EmbeddedInstrument::instrument().unwrap())),
        engine,
        parameter_source: source.clone(),
        question_source: source,
    }
}

fn app(state: ScoringAppState) -> Router {
    scoring_router().with_state(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn score_request(body: Value) -> Request<Body> {
    Request::post("/api/score")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn bundled_parameters(label: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/item_parameters.yaml");
    std::fs::read_to_string(path)
        .unwrap()
        .replace("version: form-m-2pl-default", &format!("version: {label}"))
}

// =============================================================================
// Scoring
// =============================================================================

#[tokio::test]
async fn empty_answer_set_scores_tie_breakers() {
    let (status, body) = send(
        app(embedded_state(ScoringEngine::default())),
        score_request(json!({"answers": {}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["typeCode"], "INFP");
    for (name, letter) in [("E-I", "I"), ("S-N", "N"), ("T-F", "F"), ("J-P", "P")] {
        let result = &body["results"][name];
        assert_eq!(result["preference"], letter);
        assert_eq!(result["theta"], 0.0);
        assert_eq!(result["pci"], 1);
        assert_eq!(result["pcc"], "Slight");
        assert_eq!(result["dichotomyName"], name);
    }
    assert_eq!(body["diagnostics"]["E-I"]["termination"], "no_items");
}

#[tokio::test]
async fn results_serialize_in_canonical_order() {
    let response = app(embedded_state(ScoringEngine::default()))
        .oneshot(score_request(
            json!({"answers": {"1": {"option": "A"}, "2": {"option": "B"}}}),
        ))
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    // Inspect the raw text; a parsed Value would re-sort the keys.
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    let positions: Vec<usize> = ["\"E-I\":{", "\"S-N\":{", "\"T-F\":{", "\"J-P\":{"]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
}

#[tokio::test]
async fn report_carries_dataset_versions() {
    let (_, body) = send(
        app(embedded_state(ScoringEngine::default())),
        score_request(json!({"answers": {"5": null}})),
    )
    .await;

    assert_eq!(body["versions"]["calibration"]["label"], "form-m-2pl-default");
    assert_eq!(body["versions"]["questionBank"]["label"], "form-m-keys-default");
    assert!(body["requestId"].is_string());
    assert!(body["scoredAt"].is_string());
}

#[tokio::test]
async fn unknown_questions_are_listed_by_default() {
    let (status, body) = send(
        app(embedded_state(ScoringEngine::default())),
        score_request(json!({"answers": {"1": {"option": "A"}, "94": {"option": "A"}, "120": null}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ignoredQuestions"], json!([94, 120]));
}

#[tokio::test]
async fn unknown_questions_rejected_in_strict_mode() {
    let engine = ScoringEngine::new(ThetaEstimator::default(), UnknownQuestionPolicy::Reject);
    let (status, body) = send(
        app(embedded_state(engine)),
        score_request(json!({"answers": {"94": {"option": "A"}}})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "UNKNOWN_QUESTION");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn non_numeric_question_key_is_bad_request() {
    let (status, body) = send(
        app(embedded_state(ScoringEngine::default())),
        score_request(json!({"answers": {"q1": {"option": "A"}}})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn aliased_question_keys_are_bad_request() {
    // "01" and "1" would otherwise collapse onto question 1 in map order.
    let (status, body) = send(
        app(embedded_state(ScoringEngine::default())),
        score_request(json!({"answers": {"1": {"option": "A"}, "01": {"option": "B"}}})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let request = Request::post("/api/score")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app(embedded_state(ScoringEngine::default())), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FORMAT");
}

// =============================================================================
// Instrument
// =============================================================================

#[tokio::test]
async fn instrument_info_describes_bundled_form() {
    let request = Request::get("/api/instrument").body(Body::empty()).unwrap();
    let (status, body) = send(app(embedded_state(ScoringEngine::default())), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questionCount"], 93);
    assert_eq!(
        body["itemsPerDichotomy"],
        json!({"E-I": 21, "S-N": 26, "T-F": 24, "J-P": 22})
    );
}

#[tokio::test]
async fn reload_picks_up_new_calibration_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("params.yaml");
    std::fs::write(&path, bundled_parameters("form-m-2pl-recalibrated")).unwrap();

    let mut state = embedded_state(ScoringEngine::default());
    state.parameter_source = Arc::new(FileParameterSource::new(&path));
    let registry = state.registry.clone();
    let router = app(state);

    let reload = Request::post("/api/instrument/reload").body(Body::empty()).unwrap();
    let (status, body) = send(router.clone(), reload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calibration"]["label"], "form-m-2pl-recalibrated");
    assert_eq!(registry.current().table().version().label(), "form-m-2pl-recalibrated");

    let (_, scored) = send(router, score_request(json!({"answers": {}}))).await;
    assert_eq!(scored["versions"]["calibration"]["label"], "form-m-2pl-recalibrated");
}

#[tokio::test]
async fn failed_reload_keeps_serving_previous_instrument() {
    let temp_dir = TempDir::new().unwrap();
    let mut state = embedded_state(ScoringEngine::default());
    state.parameter_source = Arc::new(FileParameterSource::new(temp_dir.path().join("missing.yaml")));
    let router = app(state);

    let reload = Request::post("/api/instrument/reload").body(Body::empty()).unwrap();
    let (status, body) = send(router.clone(), reload).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "INSTRUMENT_UNAVAILABLE");

    let (status, scored) = send(router, score_request(json!({"answers": {}}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(scored["versions"]["calibration"]["label"], "form-m-2pl-default");
}

#[tokio::test]
async fn invalid_calibration_file_is_unprocessable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("params.yaml");
    std::fs::write(
        &path,
        "version: broken\nitems:\n  - { index: 0, dichotomy: E-I, a: -1.0, b: 0.0 }\n",
    )
    .unwrap();

    let mut state = embedded_state(ScoringEngine::default());
    state.parameter_source = Arc::new(FileParameterSource::new(&path));

    let reload = Request::post("/api/instrument/reload").body(Body::empty()).unwrap();
    let (status, body) = send(app(state), reload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "OUT_OF_RANGE");
}

#[tokio::test]
async fn health_reports_ok() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(embedded_state(ScoringEngine::default())), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
