//! The four fixed dichotomies and their poles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One end of a dichotomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pole {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Pole {
    /// Returns the single-letter code.
    pub fn letter(&self) -> char {
        match self {
            Pole::E => 'E',
            Pole::I => 'I',
            Pole::S => 'S',
            Pole::N => 'N',
            Pole::T => 'T',
            Pole::F => 'F',
            Pole::J => 'J',
            Pole::P => 'P',
        }
    }

    /// Returns the dichotomy this pole belongs to.
    pub fn dichotomy(&self) -> Dichotomy {
        match self {
            Pole::E | Pole::I => Dichotomy::EI,
            Pole::S | Pole::N => Dichotomy::SN,
            Pole::T | Pole::F => Dichotomy::TF,
            Pole::J | Pole::P => Dichotomy::JP,
        }
    }

    /// Returns the pole at the other end of the same dichotomy.
    pub fn opposite(&self) -> Pole {
        let (positive, negative) = self.dichotomy().poles();
        if *self == positive {
            negative
        } else {
            positive
        }
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A trait axis with two opposing poles.
///
/// The declaration order is the canonical reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dichotomy {
    #[serde(rename = "E-I")]
    EI,
    #[serde(rename = "S-N")]
    SN,
    #[serde(rename = "T-F")]
    TF,
    #[serde(rename = "J-P")]
    JP,
}

impl Dichotomy {
    /// All dichotomies in canonical order.
    pub const ALL: [Dichotomy; 4] = [Dichotomy::EI, Dichotomy::SN, Dichotomy::TF, Dichotomy::JP];

    /// Returns `(positive, negative)`; a scoreKey of 1 endorses the positive pole.
    pub fn poles(&self) -> (Pole, Pole) {
        match self {
            Dichotomy::EI => (Pole::E, Pole::I),
            Dichotomy::SN => (Pole::S, Pole::N),
            Dichotomy::TF => (Pole::T, Pole::F),
            Dichotomy::JP => (Pole::J, Pole::P),
        }
    }

    pub fn positive_pole(&self) -> Pole {
        self.poles().0
    }

    pub fn negative_pole(&self) -> Pole {
        self.poles().1
    }

    /// Pole reported when theta is exactly zero.
    pub fn tie_breaker(&self) -> Pole {
        match self {
            Dichotomy::EI => Pole::I,
            Dichotomy::SN => Pole::N,
            Dichotomy::TF => Pole::F,
            Dichotomy::JP => Pole::P,
        }
    }

    /// Returns the wire label, e.g. `"E-I"`.
    pub fn name(&self) -> &'static str {
        match self {
            Dichotomy::EI => "E-I",
            Dichotomy::SN => "S-N",
            Dichotomy::TF => "T-F",
            Dichotomy::JP => "J-P",
        }
    }
}

impl fmt::Display for Dichotomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dichotomy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "E-I" => Ok(Dichotomy::EI),
            "S-N" => Ok(Dichotomy::SN),
            "T-F" => Ok(Dichotomy::TF),
            "J-P" => Ok(Dichotomy::JP),
            other => Err(ValidationError::invalid_format(
                "dichotomy",
                format!("unknown label '{}'", other),
            )),
        }
    }
}
