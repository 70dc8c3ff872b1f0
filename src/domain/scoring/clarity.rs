//! Preference Clarity Index (1-30) and Category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::theta_estimator::THETA_MAX;
use crate::domain::foundation::ValidationError;

/// Highest PCI, reached at |θ| = 3.
pub const PCI_MAX: u8 = 30;

/// Lowest PCI; also the value reported for θ = 0.
pub const PCI_MIN: u8 = 1;

/// Integer summary of |θ| on a 1-30 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceClarityIndex(u8);

impl PreferenceClarityIndex {
    /// Creates a PCI, returning error if outside 1-30.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(PCI_MIN..=PCI_MAX).contains(&value) {
            return Err(ValidationError::out_of_range("pci", PCI_MIN, PCI_MAX, value));
        }
        Ok(Self(value))
    }

    /// `round(|θ| / 3 × 30)`, at least 1. Exactly zero maps to 1.
    pub fn from_theta(theta: f64) -> Self {
        if theta == 0.0 {
            return Self(PCI_MIN);
        }
        let raw = (theta.abs() / THETA_MAX * f64::from(PCI_MAX)).round();
        Self(raw.clamp(f64::from(PCI_MIN), f64::from(PCI_MAX)) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn category(&self) -> PreferenceClarityCategory {
        PreferenceClarityCategory::from_pci(*self)
    }
}

impl fmt::Display for PreferenceClarityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Qualitative label derived from the PCI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PreferenceClarityCategory {
    Slight,
    Moderate,
    Clear,
    #[serde(rename = "Very Clear")]
    VeryClear,
}

impl PreferenceClarityCategory {
    /// Lower bounds are inclusive: 26+, 16+, 6+, else Slight.
    pub fn from_pci(pci: PreferenceClarityIndex) -> Self {
        match pci.value() {
            26..=u8::MAX => Self::VeryClear,
            16..=25 => Self::Clear,
            6..=15 => Self::Moderate,
            _ => Self::Slight,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Slight => "Slight",
            Self::Moderate => "Moderate",
            Self::Clear => "Clear",
            Self::VeryClear => "Very Clear",
        }
    }
}

impl fmt::Display for PreferenceClarityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
