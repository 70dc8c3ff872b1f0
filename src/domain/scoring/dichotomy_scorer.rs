//! Theta → preference letter, PCI and PCC for one dichotomy.

use serde::Serialize;

use super::clarity::{PreferenceClarityCategory, PreferenceClarityIndex};
use crate::domain::instrument::{Dichotomy, Pole};

/// Reported outcome for one dichotomy.
///
/// Serializes to `{preference, theta, pci, pcc, dichotomyName}` with theta
/// rounded to two decimals. The unrounded value stays available through
/// [`DichotomyResult::precise_theta`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DichotomyResult {
    pub preference: Pole,
    pub theta: f64,
    pub pci: PreferenceClarityIndex,
    pub pcc: PreferenceClarityCategory,
    pub dichotomy_name: Dichotomy,
    #[serde(skip)]
    precise_theta: f64,
}

impl DichotomyResult {
    pub fn dichotomy(&self) -> Dichotomy {
        self.dichotomy_name
    }

    pub fn precise_theta(&self) -> f64 {
        self.precise_theta
    }
}

/// Maps an estimated theta onto the reported scales.
pub struct DichotomyScorer;

impl DichotomyScorer {
    /// Scores one dichotomy.
    ///
    /// # Edge Cases
    /// - θ exactly 0.0 (either sign): tie-breaker pole, PCI 1
    pub fn score(dichotomy: Dichotomy, theta: f64) -> DichotomyResult {
        let pci = PreferenceClarityIndex::from_theta(theta);
        DichotomyResult {
            preference: Self::preference(dichotomy, theta),
            theta: round_to_hundredths(theta),
            pci,
            pcc: pci.category(),
            dichotomy_name: dichotomy,
            precise_theta: theta,
        }
    }

    /// Positive pole above zero, negative pole below, tie-breaker at
    /// exactly zero.
    pub fn preference(dichotomy: Dichotomy, theta: f64) -> Pole {
        if theta > 0.0 {
            dichotomy.positive_pole()
        } else if theta < 0.0 {
            dichotomy.negative_pole()
        } else {
            dichotomy.tie_breaker()
        }
    }
}

/// Rounds half away from zero; never yields negative zero.
fn round_to_hundredths(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
