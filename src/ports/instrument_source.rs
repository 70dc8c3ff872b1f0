//! Instrument source ports - Where calibrations and question banks come from.
//!
//! The scoring engine never reads files itself. Item parameters and the
//! question bank are injected through these ports so that a calibration can
//! be swapped (embedded default, file on disk, anything else) without the
//! domain knowing.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::instrument::{ItemParameterTable, QuestionBank};

/// Errors that can occur while loading an instrument dataset.
#[derive(Debug, Clone, Error)]
pub enum InstrumentSourceError {
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to parse {source_name}: {reason}")]
    Parse { source_name: String, reason: String },

    #[error("Invalid dataset: {0}")]
    Invalid(#[from] ValidationError),
}

impl InstrumentSourceError {
    pub fn parse(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}

impl From<InstrumentSourceError> for DomainError {
    fn from(err: InstrumentSourceError) -> Self {
        match err {
            InstrumentSourceError::Invalid(validation) => validation.into(),
            other => DomainError::new(ErrorCode::InstrumentUnavailable, other.to_string()),
        }
    }
}

/// Loads a validated item parameter table.
#[async_trait]
pub trait ItemParameterSource: Send + Sync {
    async fn load_parameters(&self) -> Result<ItemParameterTable, InstrumentSourceError>;
}

/// Loads a validated question bank.
#[async_trait]
pub trait QuestionBankSource: Send + Sync {
    async fn load_question_bank(&self) -> Result<QuestionBank, InstrumentSourceError>;
}
