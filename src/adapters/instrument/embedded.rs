//! Bundled default instrument: 93 questions with one 2PL calibration.

use async_trait::async_trait;

use super::documents::{parse_parameter_table, parse_question_bank, DocumentFormat};
use crate::domain::instrument::{Instrument, ItemParameterTable, QuestionBank};
use crate::ports::{InstrumentSourceError, ItemParameterSource, QuestionBankSource};

const ITEM_PARAMETERS: &str = include_str!("../../../data/item_parameters.yaml");
const QUESTION_KEYS: &str = include_str!("../../../data/question_keys.yaml");

/// Serves the datasets compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedInstrument;

impl EmbeddedInstrument {
    pub fn parameters() -> Result<ItemParameterTable, InstrumentSourceError> {
        parse_parameter_table(ITEM_PARAMETERS, DocumentFormat::Yaml, "embedded item parameters")
    }

    pub fn question_bank() -> Result<QuestionBank, InstrumentSourceError> {
        parse_question_bank(QUESTION_KEYS, DocumentFormat::Yaml, "embedded question keys")
    }

    /// Both datasets paired and cross-checked.
    pub fn instrument() -> Result<Instrument, InstrumentSourceError> {
        Ok(Instrument::new(Self::question_bank()?, Self::parameters()?)?)
    }
}

#[async_trait]
impl ItemParameterSource for EmbeddedInstrument {
    async fn load_parameters(&self) -> Result<ItemParameterTable, InstrumentSourceError> {
        Self::parameters()
    }
}

#[async_trait]
impl QuestionBankSource for EmbeddedInstrument {
    async fn load_question_bank(&self) -> Result<QuestionBank, InstrumentSourceError> {
        Self::question_bank()
    }
}
