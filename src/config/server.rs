//! Listener, logging and cross-origin settings for the scoring server.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Longest request timeout accepted; scoring is CPU-bound and sub-second.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// `TYPESCORE__SERVER__*` settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON lines instead of human-readable text.
    #[serde(default)]
    pub log_json: bool,

    /// Upper bound on one request, reload included.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated origins allowed to call the API from a browser.
    pub cors_origins: Option<String>,
}

/// Deployment flavour. Only affects the CORS fallback when no origins
/// are configured.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Which browser origins the CORS layer admits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin. Development default.
    Permissive,
    /// No cross-origin access. Production default.
    SameOrigin,
    /// Exactly the configured origins.
    Origins(Vec<String>),
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ValidationError::InvalidSocketAddr(addr))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Explicit origins win; otherwise the environment decides.
    pub fn cors_policy(&self) -> CorsPolicy {
        let origins: Vec<String> = self
            .cors_origins
            .iter()
            .flat_map(|list| list.split(','))
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        match (origins.is_empty(), self.environment) {
            (false, _) => CorsPolicy::Origins(origins),
            (true, Environment::Development) => CorsPolicy::Permissive,
            (true, Environment::Production) => CorsPolicy::SameOrigin,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr()?;
        if let CorsPolicy::Origins(origins) = self.cors_policy() {
            if let Some(bad) = origins
                .into_iter()
                .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
            {
                return Err(ValidationError::InvalidCorsOrigin(bad));
            }
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            log_json: false,
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,typescore=debug,tower_http=info".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
