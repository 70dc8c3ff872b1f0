//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TYPESCORE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use typescore::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod instrument;
mod scoring;
mod server;

pub use error::{ConfigError, ValidationError};
pub use instrument::InstrumentConfig;
pub use scoring::{ScoringConfig, ScoringMethod};
pub use server::{CorsPolicy, Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a server on
/// port 8080 scoring with the bundled instrument.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Instrument dataset locations
    #[serde(default)]
    pub instrument: InstrumentConfig,

    /// Estimator and unknown-question settings
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TYPESCORE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TYPESCORE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TYPESCORE__SCORING__METHOD=grid_scan` -> `scoring.method = grid_scan`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TYPESCORE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.instrument.validate()?;
        self.scoring.validate()?;
        Ok(())
    }
}
