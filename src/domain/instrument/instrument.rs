//! A validated question bank paired with its item calibration.

use std::collections::BTreeMap;

use super::{Dichotomy, ItemParameterTable, ItemParameters, QuestionBank};
use crate::domain::foundation::{ItemIndex, ValidationError};

/// Item indices grouped by dichotomy, in ascending index order.
///
/// Built once when an [`Instrument`] is assembled and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DichotomyIndex {
    members: BTreeMap<Dichotomy, Vec<ItemIndex>>,
}

impl DichotomyIndex {
    /// Groups the table's items by dichotomy. Every dichotomy gets an
    /// entry, possibly empty.
    pub fn build(table: &ItemParameterTable) -> Self {
        let mut members: BTreeMap<Dichotomy, Vec<ItemIndex>> =
            Dichotomy::ALL.iter().map(|d| (*d, Vec::new())).collect();
        for item in table.iter() {
            members.entry(item.dichotomy()).or_default().push(item.index());
        }
        Self { members }
    }

    pub fn members(&self, dichotomy: Dichotomy) -> &[ItemIndex] {
        self.members
            .get(&dichotomy)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Everything the orchestrator needs to score an answer set.
///
/// Cheap to share behind an `Arc`; nothing inside is mutable.
#[derive(Debug, Clone)]
pub struct Instrument {
    bank: QuestionBank,
    table: ItemParameterTable,
    index: DichotomyIndex,
}

impl Instrument {
    /// Pairs a bank with a calibration.
    ///
    /// # Errors
    /// - the table and the bank differ in length
    /// - a question and its item disagree on the dichotomy
    pub fn new(bank: QuestionBank, table: ItemParameterTable) -> Result<Self, ValidationError> {
        if table.len() != bank.len() {
            return Err(ValidationError::inconsistent(
                "items",
                format!(
                    "parameter table has {} items but the question bank has {}",
                    table.len(),
                    bank.len()
                ),
            ));
        }
        for question in bank.iter() {
            // Covered by the length check above.
            let Some(item) = table.get(question.index()) else {
                continue;
            };
            if item.dichotomy() != question.dichotomy() {
                return Err(ValidationError::inconsistent(
                    format!("questions[{}]", question.number()),
                    format!(
                        "question bank says {}, parameter table says {}",
                        question.dichotomy(),
                        item.dichotomy()
                    ),
                ));
            }
        }
        let index = DichotomyIndex::build(&table);
        Ok(Self { bank, table, index })
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn table(&self) -> &ItemParameterTable {
        &self.table
    }

    pub fn dichotomy_index(&self) -> &DichotomyIndex {
        &self.index
    }

    pub fn item(&self, index: ItemIndex) -> Option<&ItemParameters> {
        self.table.get(index)
    }
}
