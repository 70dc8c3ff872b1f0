//! Instrument adapters - Implementations of the instrument source ports.
//!
//! - `EmbeddedInstrument` - Datasets compiled into the binary
//! - `FileParameterSource` / `FileQuestionBankSource` - YAML or JSON on disk

mod documents;
mod embedded;
mod filesystem;

pub use documents::{parse_parameter_table, parse_question_bank, DocumentFormat};
pub use embedded::EmbeddedInstrument;
pub use filesystem::{FileParameterSource, FileQuestionBankSource};
