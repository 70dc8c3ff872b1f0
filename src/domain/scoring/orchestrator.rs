//! Scoring Orchestrator - AnswerSet + Instrument → four dichotomy results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::dichotomy_scorer::{DichotomyResult, DichotomyScorer};
use super::errors::ScoringError;
use super::likelihood::ItemResponse;
use super::theta_estimator::{ThetaEstimate, ThetaEstimator};
use crate::domain::foundation::QuestionNumber;
use crate::domain::instrument::{AnswerSet, Dichotomy, Instrument};

/// What to do with answers keyed to questions the bank does not define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownQuestionPolicy {
    /// Leave them out of scoring and list them on the score sheet.
    #[default]
    Ignore,
    /// Fail the whole request.
    Reject,
}

/// Results for all four dichotomies of one answer set.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSheet {
    results: BTreeMap<Dichotomy, DichotomyResult>,
    estimates: BTreeMap<Dichotomy, ThetaEstimate>,
    ignored_questions: Vec<QuestionNumber>,
}

impl ScoreSheet {
    /// Results keyed by dichotomy; iteration follows E-I, S-N, T-F, J-P.
    pub fn results(&self) -> &BTreeMap<Dichotomy, DichotomyResult> {
        &self.results
    }

    pub fn result(&self, dichotomy: Dichotomy) -> Option<&DichotomyResult> {
        self.results.get(&dichotomy)
    }

    pub fn estimates(&self) -> &BTreeMap<Dichotomy, ThetaEstimate> {
        &self.estimates
    }

    pub fn estimate(&self, dichotomy: Dichotomy) -> Option<&ThetaEstimate> {
        self.estimates.get(&dichotomy)
    }

    /// Answer keys that matched no question, ascending.
    pub fn ignored_questions(&self) -> &[QuestionNumber] {
        &self.ignored_questions
    }

    /// Four-letter code in canonical order, e.g. `"INFP"`.
    pub fn type_code(&self) -> String {
        self.results.values().map(|r| r.preference.letter()).collect()
    }
}

/// Drives estimation and scoring for every dichotomy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    estimator: ThetaEstimator,
    unknown_questions: UnknownQuestionPolicy,
}

impl ScoringEngine {
    pub fn new(estimator: ThetaEstimator, unknown_questions: UnknownQuestionPolicy) -> Self {
        Self {
            estimator,
            unknown_questions,
        }
    }

    pub fn estimator(&self) -> &ThetaEstimator {
        &self.estimator
    }

    pub fn unknown_question_policy(&self) -> UnknownQuestionPolicy {
        self.unknown_questions
    }

    /// Scores `answers` against `instrument`.
    ///
    /// Omitted answers never fail; a dichotomy with nothing answered
    /// scores θ = 0 and reports its tie-breaker pole.
    ///
    /// # Errors
    /// - `UnknownQuestion` when an answer key is outside the bank and the
    ///   policy is `Reject`
    pub fn score(&self, instrument: &Instrument, answers: &AnswerSet) -> Result<ScoreSheet, ScoringError> {
        let bank = instrument.bank();
        let mut ignored_questions = Vec::new();
        for number in answers.numbers() {
            if bank.get(number).is_some() {
                continue;
            }
            match self.unknown_questions {
                UnknownQuestionPolicy::Reject => {
                    return Err(ScoringError::UnknownQuestion {
                        number,
                        bank_size: bank.len(),
                    });
                }
                UnknownQuestionPolicy::Ignore => ignored_questions.push(number),
            }
        }

        let mut results = BTreeMap::new();
        let mut estimates = BTreeMap::new();
        for dichotomy in Dichotomy::ALL {
            let responses = Self::responses_for(instrument, answers, dichotomy);
            let estimate = self.estimator.estimate(&responses);
            results.insert(dichotomy, DichotomyScorer::score(dichotomy, estimate.theta));
            estimates.insert(dichotomy, estimate);
        }

        Ok(ScoreSheet {
            results,
            estimates,
            ignored_questions,
        })
    }

    /// Collects `(a, b, u)` for every answered member item of `dichotomy`.
    pub fn responses_for(
        instrument: &Instrument,
        answers: &AnswerSet,
        dichotomy: Dichotomy,
    ) -> Vec<ItemResponse> {
        instrument
            .dichotomy_index()
            .members(dichotomy)
            .iter()
            .filter_map(|index| {
                let number = QuestionNumber::from_index(*index);
                let choice = answers.choice(number)?;
                let question = instrument.bank().get(number)?;
                let item = instrument.item(*index)?;
                Some(ItemResponse::from_item(item, question.score_key(choice)))
            })
            .collect()
    }
}
