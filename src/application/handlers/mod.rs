//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod instrument;
pub mod scoring;

pub use instrument::{
    load_instrument, GetInstrumentInfoHandler, InstrumentInfo, ReloadInstrumentHandler,
};
pub use scoring::{InstrumentVersions, ScoreAnswersCommand, ScoreAnswersHandler, ScoringReport};
