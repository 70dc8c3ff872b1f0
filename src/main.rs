//! Typescore HTTP server.
//!
//! Loads configuration from `TYPESCORE__*` environment variables, assembles
//! the instrument from the configured sources, and serves the scoring API.

use std::error::Error;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use typescore::adapters::{
    scoring_router, EmbeddedInstrument, FileParameterSource, FileQuestionBankSource,
    ScoringAppState,
};
use typescore::application::{load_instrument, InstrumentInfo, InstrumentRegistry};
use typescore::config::{AppConfig, CorsPolicy, InstrumentConfig, ServerConfig};
use typescore::ports::{ItemParameterSource, QuestionBankSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let (parameter_source, question_source) = instrument_sources(&config.instrument);
    let instrument = load_instrument(parameter_source.as_ref(), question_source.as_ref()).await?;
    let info = InstrumentInfo::describe(&instrument);
    info!(
        calibration = %info.calibration,
        question_bank = %info.question_bank,
        questions = info.question_count,
        embedded = config.instrument.is_embedded(),
        "Instrument loaded"
    );

    let state = ScoringAppState {
        registry: Arc::new(InstrumentRegistry::new(instrument)),
        engine: config.scoring.engine()?,
        parameter_source,
        question_source,
    };
    let app = with_middleware(scoring_router().with_state(state), &config.server)?;

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Typescore listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Typescore stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter when set.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}

fn instrument_sources(
    config: &InstrumentConfig,
) -> (Arc<dyn ItemParameterSource>, Arc<dyn QuestionBankSource>) {
    let parameters: Arc<dyn ItemParameterSource> = match &config.parameters_path {
        Some(path) => Arc::new(FileParameterSource::new(path)),
        None => Arc::new(EmbeddedInstrument),
    };
    let questions: Arc<dyn QuestionBankSource> = match &config.question_bank_path {
        Some(path) => Arc::new(FileQuestionBankSource::new(path)),
        None => Arc::new(EmbeddedInstrument),
    };
    (parameters, questions)
}

fn with_middleware(router: Router, server: &ServerConfig) -> Result<Router, Box<dyn Error>> {
    let cors = match server.cors_policy() {
        CorsPolicy::Permissive => CorsLayer::permissive(),
        CorsPolicy::SameOrigin => CorsLayer::new(),
        CorsPolicy::Origins(origins) => {
            let origins = origins
                .iter()
                .map(|origin| HeaderValue::from_str(origin))
                .collect::<Result<Vec<_>, _>>()?;
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any)
        }
    };

    Ok(router
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
