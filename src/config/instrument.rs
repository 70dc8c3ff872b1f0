//! Instrument dataset configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the item calibration and question bank are read from.
///
/// Either path may be left unset, in which case the dataset bundled with
/// the binary is used for that half.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstrumentConfig {
    /// YAML or JSON item parameter table
    pub parameters_path: Option<PathBuf>,

    /// YAML or JSON question bank with option score keys
    pub question_bank_path: Option<PathBuf>,
}

impl InstrumentConfig {
    /// True when neither dataset is read from disk.
    pub fn is_embedded(&self) -> bool {
        self.parameters_path.is_none() && self.question_bank_path.is_none()
    }

    /// Validate instrument configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(self.parameters_path.as_ref()) {
            return Err(ValidationError::EmptyDatasetPath("instrument.parameters_path"));
        }
        if is_blank(self.question_bank_path.as_ref()) {
            return Err(ValidationError::EmptyDatasetPath("instrument.question_bank_path"));
        }
        Ok(())
    }
}

fn is_blank(path: Option<&PathBuf>) -> bool {
    path.is_some_and(|p| p.as_os_str().to_string_lossy().trim().is_empty())
}
