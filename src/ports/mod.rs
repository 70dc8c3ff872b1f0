//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Instrument Ports
//!
//! - `ItemParameterSource` - Supplies a versioned 2PL calibration
//! - `QuestionBankSource` - Supplies question dichotomies and option keys

mod instrument_source;

pub use instrument_source::{InstrumentSourceError, ItemParameterSource, QuestionBankSource};
