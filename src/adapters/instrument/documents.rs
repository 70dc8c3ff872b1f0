//! On-disk document formats for instrument datasets.
//!
//! Both datasets are small YAML or JSON documents:
//!
//! ```yaml
//! version: form-m-2pl-default
//! items:
//!   - { index: 0, dichotomy: E-I, a: 1.78, b: -1.29 }
//! ```
//!
//! ```yaml
//! version: form-m-keys-default
//! questions:
//!   - number: 1
//!     dichotomy: E-I
//!     options:
//!       - { label: A, score_key: 0 }
//!       - { label: B, score_key: 1 }
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::domain::foundation::{ItemIndex, QuestionNumber, ValidationError};
use crate::domain::instrument::{
    DatasetVersion, Dichotomy, ItemParameterTable, ItemParameters, Question, QuestionBank,
    ResponseOption,
};
use crate::ports::InstrumentSourceError;

/// Serialization format of a dataset document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Picks the format from the file extension; anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ParameterDocument {
    version: String,
    items: Vec<ParameterRecord>,
}

#[derive(Debug, Deserialize)]
struct ParameterRecord {
    index: usize,
    dichotomy: String,
    a: f64,
    b: f64,
}

#[derive(Debug, Deserialize)]
struct QuestionBankDocument {
    version: String,
    questions: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    number: u32,
    dichotomy: String,
    options: Vec<ResponseOption>,
}

fn deserialize<T: for<'de> Deserialize<'de>>(
    content: &str,
    format: DocumentFormat,
    source_name: &str,
) -> Result<T, InstrumentSourceError> {
    match format {
        DocumentFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| InstrumentSourceError::parse(source_name, e.to_string())),
        DocumentFormat::Json => serde_json::from_str(content)
            .map_err(|e| InstrumentSourceError::parse(source_name, e.to_string())),
    }
}

/// Parses and validates an item parameter document.
///
/// Records may appear in any order; after sorting, indices must run
/// `0..N` without gaps or duplicates.
pub fn parse_parameter_table(
    content: &str,
    format: DocumentFormat,
    source_name: &str,
) -> Result<ItemParameterTable, InstrumentSourceError> {
    let mut document: ParameterDocument = deserialize(content, format, source_name)?;
    document.items.sort_by_key(|r| r.index);

    let items = document
        .items
        .into_iter()
        .map(|record| {
            let dichotomy: Dichotomy = record.dichotomy.parse()?;
            ItemParameters::new(ItemIndex::new(record.index), dichotomy, record.a, record.b)
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    let version = DatasetVersion::from_document(document.version, content)?;
    Ok(ItemParameterTable::new(version, items)?)
}

/// Parses and validates a question bank document.
pub fn parse_question_bank(
    content: &str,
    format: DocumentFormat,
    source_name: &str,
) -> Result<QuestionBank, InstrumentSourceError> {
    let mut document: QuestionBankDocument = deserialize(content, format, source_name)?;
    document.questions.sort_by_key(|r| r.number);

    let questions = document
        .questions
        .into_iter()
        .map(|record| {
            let number = QuestionNumber::new(record.number)?;
            let dichotomy: Dichotomy = record.dichotomy.parse()?;
            let [option_a, option_b]: [ResponseOption; 2] =
                record.options.try_into().map_err(|options: Vec<ResponseOption>| {
                    ValidationError::invalid_format(
                        format!("questions[{}].options", number),
                        format!("expected exactly 2 options, found {}", options.len()),
                    )
                })?;
            Question::new(number, dichotomy, option_a, option_b)
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    let version = DatasetVersion::from_document(document.version, content)?;
    Ok(QuestionBank::new(version, questions)?)
}
