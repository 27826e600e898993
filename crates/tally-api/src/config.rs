//! Environment-based configuration for the Tally server.

use std::env;
use tracing::warn;

/// Server settings, read from the environment with logged fallbacks.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host, `TALLY_HOST`.
    pub host: String,
    /// Bind port, `TALLY_PORT`.
    pub port: u16,
    /// Request body size cap in megabytes, `TALLY_MAX_BODY_SIZE_MB`.
    pub max_body_size_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 3000, max_body_size_mb: 1 }
    }
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults for
    /// unset or unparseable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = env::var("TALLY_HOST").unwrap_or(defaults.host);

        let port = match env::var("TALLY_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Invalid TALLY_PORT, using default");
                defaults.port
            }),
            Err(_) => defaults.port,
        };

        let max_body_size_mb = match env::var("TALLY_MAX_BODY_SIZE_MB") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Invalid TALLY_MAX_BODY_SIZE_MB, using default");
                defaults.max_body_size_mb
            }),
            Err(_) => defaults.max_body_size_mb,
        };

        Self { host, port, max_body_size_mb }
    }

    /// The `host:port` address to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Body size cap in bytes.
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}
