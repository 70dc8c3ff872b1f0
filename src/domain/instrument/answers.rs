//! A respondent's answers, keyed by question number.

use std::collections::BTreeMap;

use super::OptionChoice;
use crate::domain::foundation::QuestionNumber;

/// Partial mapping from question number to chosen option.
///
/// `None` marks an explicit omission; a missing key is an implicit one.
/// Both are treated the same by scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: BTreeMap<QuestionNumber, Option<OptionChoice>>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a choice, replacing any earlier one for the same question.
    pub fn record(&mut self, number: QuestionNumber, choice: OptionChoice) {
        self.entries.insert(number, Some(choice));
    }

    /// Records an explicit omission.
    pub fn omit(&mut self, number: QuestionNumber) {
        self.entries.insert(number, None);
    }

    pub fn with(mut self, number: QuestionNumber, choice: OptionChoice) -> Self {
        self.record(number, choice);
        self
    }

    /// Returns the chosen option, or `None` if omitted or absent.
    pub fn choice(&self, number: QuestionNumber) -> Option<OptionChoice> {
        self.entries.get(&number).copied().flatten()
    }

    /// Answered questions in ascending number order.
    pub fn answered(&self) -> impl Iterator<Item = (QuestionNumber, OptionChoice)> + '_ {
        self.entries
            .iter()
            .filter_map(|(number, choice)| choice.map(|c| (*number, c)))
    }

    /// Every key present, answered or explicitly omitted.
    pub fn numbers(&self) -> impl Iterator<Item = QuestionNumber> + '_ {
        self.entries.keys().copied()
    }

    pub fn answered_count(&self) -> usize {
        self.entries.values().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(QuestionNumber, Option<OptionChoice>)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionNumber, Option<OptionChoice>)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
