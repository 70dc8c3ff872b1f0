//! Process-wide holder for the active instrument snapshot.

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::instrument::Instrument;

/// Holds the instrument currently used for scoring.
///
/// Readers clone the inner `Arc` and score against that snapshot; a
/// concurrent [`replace`](Self::replace) only affects requests that start
/// afterwards. No request ever sees a mix of old and new data.
#[derive(Debug)]
pub struct InstrumentRegistry {
    current: RwLock<Arc<Instrument>>,
}

impl InstrumentRegistry {
    pub fn new(instrument: Instrument) -> Self {
        Self {
            current: RwLock::new(Arc::new(instrument)),
        }
    }

    /// Returns the active snapshot.
    pub fn current(&self) -> Arc<Instrument> {
        // The guarded value is a plain Arc swap, so a poisoned lock still
        // holds a complete snapshot.
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Installs a new snapshot and returns the previous one.
    pub fn replace(&self, instrument: Instrument) -> Arc<Instrument> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(instrument))
    }
}
