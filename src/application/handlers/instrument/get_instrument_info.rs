//! GetInstrumentInfoHandler - Query handler describing the active instrument.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::InstrumentRegistry;
use crate::domain::instrument::{DatasetVersion, Dichotomy, Instrument};

/// Summary of an instrument snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentInfo {
    pub calibration: DatasetVersion,
    pub question_bank: DatasetVersion,
    pub question_count: usize,
    pub items_per_dichotomy: BTreeMap<Dichotomy, usize>,
}

impl InstrumentInfo {
    pub fn describe(instrument: &Instrument) -> Self {
        let items_per_dichotomy = Dichotomy::ALL
            .iter()
            .map(|d| (*d, instrument.dichotomy_index().members(*d).len()))
            .collect();
        Self {
            calibration: instrument.table().version().clone(),
            question_bank: instrument.bank().version().clone(),
            question_count: instrument.bank().len(),
            items_per_dichotomy,
        }
    }
}

/// Handler for reading the active instrument's metadata.
pub struct GetInstrumentInfoHandler {
    registry: Arc<InstrumentRegistry>,
}

impl GetInstrumentInfoHandler {
    pub fn new(registry: Arc<InstrumentRegistry>) -> Self {
        Self { registry }
    }

    pub fn handle(&self) -> InstrumentInfo {
        InstrumentInfo::describe(&self.registry.current())
    }
}
