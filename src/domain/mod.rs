//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, timestamps, errors)
//! - `instrument` - Dichotomies, item calibration, question bank, answers
//! - `scoring` - Pure domain services turning answers into dichotomy results

pub mod foundation;
pub mod instrument;
pub mod scoring;
