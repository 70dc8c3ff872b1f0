//! Scoring errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, QuestionNumber};

/// Errors raised while scoring an answer set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Question {number} is not defined by the question bank ({bank_size} questions)")]
    UnknownQuestion {
        number: QuestionNumber,
        bank_size: usize,
    },
}

impl From<ScoringError> for DomainError {
    fn from(err: ScoringError) -> Self {
        match &err {
            ScoringError::UnknownQuestion { number, .. } => {
                DomainError::new(ErrorCode::UnknownQuestion, err.to_string())
                    .with_detail("question", number.to_string())
            }
        }
    }
}
