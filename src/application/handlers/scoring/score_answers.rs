//! ScoreAnswersHandler - Scores one respondent's answer set.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::application::InstrumentRegistry;
use crate::domain::foundation::{DomainError, ScoringRequestId, Timestamp};
use crate::domain::instrument::{AnswerSet, DatasetVersion};
use crate::domain::scoring::{ScoreSheet, ScoringEngine};

/// Command to score an answer set against the active instrument.
#[derive(Debug, Clone)]
pub struct ScoreAnswersCommand {
    pub answers: AnswerSet,
}

/// Dataset versions a report was computed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentVersions {
    pub calibration: DatasetVersion,
    pub question_bank: DatasetVersion,
}

/// Result of a successful scoring request.
#[derive(Debug, Clone)]
pub struct ScoringReport {
    pub request_id: ScoringRequestId,
    pub scored_at: Timestamp,
    pub versions: InstrumentVersions,
    pub sheet: ScoreSheet,
}

impl ScoringReport {
    pub fn type_code(&self) -> String {
        self.sheet.type_code()
    }
}

/// Handler for scoring requests.
///
/// Takes one snapshot of the instrument per request, so a reload in the
/// middle of scoring cannot mix calibrations.
pub struct ScoreAnswersHandler {
    registry: Arc<InstrumentRegistry>,
    engine: ScoringEngine,
}

impl ScoreAnswersHandler {
    pub fn new(registry: Arc<InstrumentRegistry>, engine: ScoringEngine) -> Self {
        Self { registry, engine }
    }

    pub fn handle(&self, cmd: ScoreAnswersCommand) -> Result<ScoringReport, DomainError> {
        let request_id = ScoringRequestId::new();
        let instrument = self.registry.current();

        let sheet = self.engine.score(&instrument, &cmd.answers)?;

        if !sheet.ignored_questions().is_empty() {
            warn!(
                %request_id,
                ignored = ?sheet.ignored_questions(),
                "Answers referenced questions outside the bank"
            );
        }
        for (dichotomy, estimate) in sheet.estimates() {
            debug!(
                %request_id,
                %dichotomy,
                theta = estimate.theta,
                items = estimate.items_used,
                iterations = estimate.iterations,
                termination = ?estimate.termination,
                "Estimated theta"
            );
        }
        debug!(
            %request_id,
            answered = cmd.answers.answered_count(),
            type_code = %sheet.type_code(),
            "Scored answer set"
        );

        Ok(ScoringReport {
            request_id,
            scored_at: Timestamp::now(),
            versions: InstrumentVersions {
                calibration: instrument.table().version().clone(),
                question_bank: instrument.bank().version().clone(),
            },
            sheet,
        })
    }
}
