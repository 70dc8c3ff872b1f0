//! Calibrated 2PL item parameters.

use serde::Serialize;

use super::{DatasetVersion, Dichotomy};
use crate::domain::foundation::{ItemIndex, ValidationError};

/// Calibrated logistic parameters for one questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemParameters {
    index: ItemIndex,
    dichotomy: Dichotomy,
    a: f64,
    b: f64,
}

impl ItemParameters {
    /// Creates item parameters.
    ///
    /// # Errors
    /// - `a` must be finite and strictly positive
    /// - `b` must be finite
    pub fn new(index: ItemIndex, dichotomy: Dichotomy, a: f64, b: f64) -> Result<Self, ValidationError> {
        if !a.is_finite() || a <= 0.0 {
            return Err(ValidationError::out_of_range(
                format!("items[{}].a", index),
                f64::MIN_POSITIVE,
                f64::MAX,
                a,
            ));
        }
        if !b.is_finite() {
            return Err(ValidationError::invalid_format(
                format!("items[{}].b", index),
                "location must be a finite number",
            ));
        }
        Ok(Self { index, dichotomy, a, b })
    }

    pub fn index(&self) -> ItemIndex {
        self.index
    }

    pub fn dichotomy(&self) -> Dichotomy {
        self.dichotomy
    }

    /// Discrimination.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Location.
    pub fn b(&self) -> f64 {
        self.b
    }
}

/// Immutable, versioned table of item parameters indexed `0..N`.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemParameterTable {
    version: DatasetVersion,
    items: Vec<ItemParameters>,
}

impl ItemParameterTable {
    /// Creates a table, checking that indices are contiguous and 0-based.
    pub fn new(version: DatasetVersion, items: Vec<ItemParameters>) -> Result<Self, ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::empty_field("items"));
        }
        for (position, item) in items.iter().enumerate() {
            if item.index().value() != position {
                return Err(ValidationError::invalid_format(
                    "items",
                    format!(
                        "index {} found at position {}; indices must be contiguous from 0",
                        item.index(),
                        position
                    ),
                ));
            }
        }
        Ok(Self { version, items })
    }

    pub fn version(&self) -> &DatasetVersion {
        &self.version
    }

    pub fn get(&self, index: ItemIndex) -> Option<&ItemParameters> {
        self.items.get(index.value())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemParameters> {
        self.items.iter()
    }

    /// Number of items belonging to `dichotomy`.
    pub fn count_for(&self, dichotomy: Dichotomy) -> usize {
        self.items.iter().filter(|i| i.dichotomy() == dichotomy).count()
    }
}
