//! Version labels for injectable instrument datasets.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Identifies one revision of an instrument dataset.
///
/// The label is whatever the dataset declares; the fingerprint is the
/// SHA-256 of the source document, so two files with the same label but
/// different contents are still distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetVersion {
    label: String,
    fingerprint: String,
}

impl DatasetVersion {
    pub fn new(
        label: impl Into<String>,
        fingerprint: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field("version"));
        }
        Ok(Self {
            label,
            fingerprint: fingerprint.into(),
        })
    }

    /// Creates a version whose fingerprint is the SHA-256 of `document`.
    pub fn from_document(label: impl Into<String>, document: &str) -> Result<Self, ValidationError> {
        Self::new(label, Self::fingerprint_of(document))
    }

    /// Hex-encoded SHA-256 of a source document.
    pub fn fingerprint_of(document: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(document.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// First 12 hex characters of the fingerprint.
    pub fn short_fingerprint(&self) -> &str {
        let end = self.fingerprint.len().min(12);
        self.fingerprint.get(..end).unwrap_or(&self.fingerprint)
    }
}

impl fmt::Display for DatasetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fingerprint.is_empty() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{}@{}", self.label, self.short_fingerprint())
        }
    }
}
