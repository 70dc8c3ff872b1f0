//! Instrument handlers - Inspecting and reloading the active instrument.

mod get_instrument_info;
mod reload_instrument;

pub use get_instrument_info::{GetInstrumentInfoHandler, InstrumentInfo};
pub use reload_instrument::{load_instrument, ReloadInstrumentHandler};
