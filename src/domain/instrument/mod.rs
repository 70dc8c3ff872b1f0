//! Instrument module - The questionnaire as the scoring engine sees it.
//!
//! # Components
//!
//! - `Dichotomy` / `Pole` - The four fixed trait axes
//! - `ItemParameterTable` - Calibrated 2PL parameters per item
//! - `QuestionBank` - Dichotomy membership and option score keys
//! - `AnswerSet` - One respondent's (partial) choices
//! - `Instrument` - Validated bank + table + dichotomy index
//!
//! # Invariants
//!
//! 1. Exactly four dichotomies, fixed at compile time
//! 2. Every item belongs to exactly one dichotomy and has `a > 0`
//! 3. Item indices are contiguous from 0, question numbers from 1
//! 4. The table covers every question and agrees on its dichotomy

mod answers;
mod dichotomy;
#[allow(clippy::module_inception)]
mod instrument;
mod item;
mod question_bank;
mod version;

pub use answers::AnswerSet;
pub use dichotomy::{Dichotomy, Pole};
pub use instrument::{DichotomyIndex, Instrument};
pub use item::{ItemParameterTable, ItemParameters};
pub use question_bank::{OptionChoice, Question, QuestionBank, ResponseOption, ScoreKey};
pub use version::DatasetVersion;
