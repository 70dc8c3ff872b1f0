//! Typescore - Four-dichotomy preference scoring
//!
//! This crate turns a respondent's forced-choice answers into per-dichotomy
//! theta estimates under a two-parameter logistic IRT model, then reports a
//! preference letter and clarity index for each dichotomy.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
