//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `instrument` - Embedded and file-backed instrument datasets
//! - `http` - Axum REST API over the application handlers

pub mod http;
pub mod instrument;

pub use http::{scoring_router, ScoringAppState};
pub use instrument::{EmbeddedInstrument, FileParameterSource, FileQuestionBankSource};
