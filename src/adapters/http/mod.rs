//! HTTP adapters - REST API implementations.

pub mod scoring;

// Re-export key types for convenience
pub use scoring::{scoring_router, ScoringAppState};
