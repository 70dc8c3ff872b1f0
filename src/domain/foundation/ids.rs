//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for one scoring request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoringRequestId(Uuid);

impl ScoringRequestId {
    /// Creates a new random ScoringRequestId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScoringRequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScoringRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ScoringRequestId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// 1-based question number as presented to respondents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct QuestionNumber(u32);

impl QuestionNumber {
    /// Creates a QuestionNumber, rejecting zero.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::out_of_range(
                "question_number",
                1,
                u32::MAX,
                0,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the question number for a 0-based item index.
    pub fn from_index(index: ItemIndex) -> Self {
        Self(index.value() as u32 + 1)
    }

    /// Returns the raw 1-based value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns the 0-based item index this question maps to.
    pub fn to_index(&self) -> ItemIndex {
        ItemIndex((self.0 - 1) as usize)
    }
}

impl TryFrom<u32> for QuestionNumber {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionNumber> for u32 {
    fn from(number: QuestionNumber) -> Self {
        number.0
    }
}

/// Accepts only the canonical decimal form (`"7"`, not `"07"`, `"+7"` or
/// `" 7"`), so distinct map keys never name the same question.
impl FromStr for QuestionNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        let value: u32 = s.parse().ok().filter(|_| canonical).ok_or_else(|| {
            ValidationError::invalid_format(
                "question_number",
                format!("'{}' is not a canonical question number", s),
            )
        })?;
        Self::new(value)
    }
}

impl fmt::Display for QuestionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 0-based, stable item identity within the parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemIndex(usize);

impl ItemIndex {
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
