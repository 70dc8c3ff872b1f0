//! Filesystem adapters for instrument datasets.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::documents::{parse_parameter_table, parse_question_bank, DocumentFormat};
use crate::domain::instrument::{ItemParameterTable, QuestionBank};
use crate::ports::{InstrumentSourceError, ItemParameterSource, QuestionBankSource};

async fn read_document(path: &Path) -> Result<String, InstrumentSourceError> {
    fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            InstrumentSourceError::NotFound(path.display().to_string())
        } else {
            InstrumentSourceError::Io(format!("Failed to read {}: {}", path.display(), e))
        }
    })
}

/// Reads an item parameter table from a YAML or JSON file.
///
/// The file is re-read on every load, so replacing it on disk and
/// reloading picks up the new calibration.
#[derive(Debug, Clone)]
pub struct FileParameterSource {
    path: PathBuf,
}

impl FileParameterSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ItemParameterSource for FileParameterSource {
    async fn load_parameters(&self) -> Result<ItemParameterTable, InstrumentSourceError> {
        let content = read_document(&self.path).await?;
        let table = parse_parameter_table(
            &content,
            DocumentFormat::from_path(&self.path),
            &self.path.display().to_string(),
        )?;
        tracing::debug!(
            "Loaded {} item parameters ({}) from {}",
            table.len(),
            table.version(),
            self.path.display()
        );
        Ok(table)
    }
}

/// Reads a question bank from a YAML or JSON file.
#[derive(Debug, Clone)]
pub struct FileQuestionBankSource {
    path: PathBuf,
}

impl FileQuestionBankSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionBankSource for FileQuestionBankSource {
    async fn load_question_bank(&self) -> Result<QuestionBank, InstrumentSourceError> {
        let content = read_document(&self.path).await?;
        let bank = parse_question_bank(
            &content,
            DocumentFormat::from_path(&self.path),
            &self.path.display().to_string(),
        )?;
        tracing::debug!(
            "Loaded {} questions ({}) from {}",
            bank.len(),
            bank.version(),
            self.path.display()
        );
        Ok(bank)
    }
}
