//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the scoring domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ItemIndex, QuestionNumber, ScoringRequestId};
pub use timestamp::Timestamp;
