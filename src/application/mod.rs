//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Scoring is a read against the current instrument snapshot; reloading is
//! the only command that changes state.

pub mod handlers;
mod instrument_registry;

pub use handlers::{
    // Instrument handlers
    load_instrument, GetInstrumentInfoHandler, InstrumentInfo, ReloadInstrumentHandler,
    // Scoring handlers
    InstrumentVersions, ScoreAnswersCommand, ScoreAnswersHandler, ScoringReport,
};
pub use instrument_registry::InstrumentRegistry;
