//! Question bank view consumed by the scoring engine.
//!
//! Only structure matters here: which dichotomy each question belongs to
//! and which pole each of its two options endorses. Question text and
//! option labels are carried through untouched for whoever renders them.

use serde::{Deserialize, Serialize};

use super::{DatasetVersion, Dichotomy};
use crate::domain::foundation::{ItemIndex, QuestionNumber, ValidationError};

/// Which pole an option endorses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ScoreKey {
    /// Endorses the negative (second) pole.
    Negative = 0,
    /// Endorses the positive (first) pole.
    Positive = 1,
}

impl ScoreKey {
    /// Creates a ScoreKey from its wire value, rejecting anything but 0 or 1.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            0 => Ok(ScoreKey::Negative),
            1 => Ok(ScoreKey::Positive),
            _ => Err(ValidationError::out_of_range("score_key", 0, 1, value)),
        }
    }

    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The observed response `u` used in the likelihood.
    pub fn as_response(&self) -> f64 {
        f64::from(self.value())
    }

    pub fn flipped(&self) -> Self {
        match self {
            ScoreKey::Negative => ScoreKey::Positive,
            ScoreKey::Positive => ScoreKey::Negative,
        }
    }
}

impl TryFrom<u8> for ScoreKey {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value)
    }
}

impl From<ScoreKey> for u8 {
    fn from(key: ScoreKey) -> Self {
        key.value()
    }
}

/// Selects one of a question's two options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionChoice {
    #[serde(alias = "a")]
    A,
    #[serde(alias = "b")]
    B,
}

/// One of the two response options of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub score_key: ScoreKey,
}

impl ResponseOption {
    pub fn new(score_key: ScoreKey) -> Self {
        Self {
            label: None,
            score_key,
        }
    }
}

/// A forced-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    number: QuestionNumber,
    dichotomy: Dichotomy,
    option_a: ResponseOption,
    option_b: ResponseOption,
}

impl Question {
    /// Creates a question; the two options must endorse opposite poles.
    pub fn new(
        number: QuestionNumber,
        dichotomy: Dichotomy,
        option_a: ResponseOption,
        option_b: ResponseOption,
    ) -> Result<Self, ValidationError> {
        if option_a.score_key == option_b.score_key {
            return Err(ValidationError::invalid_format(
                format!("questions[{}].options", number),
                "both options endorse the same pole",
            ));
        }
        Ok(Self {
            number,
            dichotomy,
            option_a,
            option_b,
        })
    }

    /// Shorthand for a question whose option A carries `a_key`.
    pub fn keyed(number: QuestionNumber, dichotomy: Dichotomy, a_key: ScoreKey) -> Self {
        Self {
            number,
            dichotomy,
            option_a: ResponseOption::new(a_key),
            option_b: ResponseOption::new(a_key.flipped()),
        }
    }

    pub fn number(&self) -> QuestionNumber {
        self.number
    }

    pub fn index(&self) -> ItemIndex {
        self.number.to_index()
    }

    pub fn dichotomy(&self) -> Dichotomy {
        self.dichotomy
    }

    pub fn option(&self, choice: OptionChoice) -> &ResponseOption {
        match choice {
            OptionChoice::A => &self.option_a,
            OptionChoice::B => &self.option_b,
        }
    }

    pub fn score_key(&self, choice: OptionChoice) -> ScoreKey {
        self.option(choice).score_key
    }
}

/// Ordered, versioned list of questions numbered `1..=N`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    version: DatasetVersion,
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(version: DatasetVersion, questions: Vec<Question>) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }
        for (position, question) in questions.iter().enumerate() {
            if question.number().value() as usize != position + 1 {
                return Err(ValidationError::invalid_format(
                    "questions",
                    format!(
                        "question {} found at position {}; numbers must run 1..=N in order",
                        question.number(),
                        position + 1
                    ),
                ));
            }
        }
        Ok(Self { version, questions })
    }

    pub fn version(&self) -> &DatasetVersion {
        &self.version
    }

    pub fn get(&self, number: QuestionNumber) -> Option<&Question> {
        self.questions.get(number.to_index().value())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
