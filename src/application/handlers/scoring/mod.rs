//! Scoring handlers.

mod score_answers;

pub use score_answers::{InstrumentVersions, ScoreAnswersCommand, ScoreAnswersHandler, ScoringReport};
