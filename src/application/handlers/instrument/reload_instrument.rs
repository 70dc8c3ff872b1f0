//! ReloadInstrumentHandler - Command handler that swaps in freshly loaded datasets.

use std::sync::Arc;
use tracing::info;

use super::InstrumentInfo;
use crate::application::InstrumentRegistry;
use crate::domain::foundation::DomainError;
use crate::domain::instrument::Instrument;
use crate::ports::{ItemParameterSource, QuestionBankSource};

/// Loads both datasets and pairs them into a validated instrument.
pub async fn load_instrument(
    parameters: &dyn ItemParameterSource,
    questions: &dyn QuestionBankSource,
) -> Result<Instrument, DomainError> {
    let (table, bank) = tokio::try_join!(parameters.load_parameters(), questions.load_question_bank())?;
    Ok(Instrument::new(bank, table)?)
}

/// Handler for reloading the instrument from its sources.
///
/// The registry is only touched when both datasets load and agree; any
/// failure leaves the current snapshot in service.
pub struct ReloadInstrumentHandler {
    parameters: Arc<dyn ItemParameterSource>,
    questions: Arc<dyn QuestionBankSource>,
    registry: Arc<InstrumentRegistry>,
}

impl ReloadInstrumentHandler {
    pub fn new(
        parameters: Arc<dyn ItemParameterSource>,
        questions: Arc<dyn QuestionBankSource>,
        registry: Arc<InstrumentRegistry>,
    ) -> Self {
        Self {
            parameters,
            questions,
            registry,
        }
    }

    pub async fn handle(&self) -> Result<InstrumentInfo, DomainError> {
        let instrument = load_instrument(self.parameters.as_ref(), self.questions.as_ref()).await?;
        let info = InstrumentInfo::describe(&instrument);

        let previous = self.registry.replace(instrument);
        info!(
            calibration = %info.calibration,
            question_bank = %info.question_bank,
            previous_calibration = %previous.table().version(),
            "Instrument reloaded"
        );

        Ok(info)
    }
}
