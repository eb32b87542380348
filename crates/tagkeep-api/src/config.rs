//! Server configuration loaded from the environment.
//!
//! Environment variables:
//!   HOST                   - bind host (default: 0.0.0.0)
//!   PORT                   - bind port (default: 3000)
//!   DATABASE_URL           - PostgreSQL URL; unset selects the in-memory store
//!   DB_MAX_CONNECTIONS     - pool size (default: 10)
//!   RATE_LIMIT_ENABLED     - "true"/"1" enables the global limiter (default: off)
//!   RATE_LIMIT_REQUESTS    - requests per period (default: 100)
//!   RATE_LIMIT_PERIOD_SECS - period in seconds (default: 60)
//!   ALLOWED_ORIGINS        - comma separated CORS origins
//!   MAX_BODY_BYTES         - request body limit (default: 65536)

use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use tagkeep_core::defaults;

/// `EnvFilter` directives used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "tagkeep_api=debug,tagkeep_db=debug,tower_http=debug";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid bind address '{0}': {1}")]
    InvalidAddr(String, std::net::AddrParseError),
}

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs against the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub rate_limit_enabled: bool,
    pub rate_limit_requests: u32,
    pub rate_limit_period_secs: u64,
    pub allowed_origins: Vec<String>,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::SERVER_HOST.to_string(),
            port: defaults::SERVER_PORT,
            database_url: None,
            db_max_connections: defaults::DB_MAX_CONNECTIONS,
            rate_limit_enabled: false,
            rate_limit_requests: defaults::RATE_LIMIT_REQUESTS,
            rate_limit_period_secs: defaults::RATE_LIMIT_PERIOD_SECS,
            allowed_origins: split_origins(defaults::ALLOWED_ORIGINS),
            max_body_bytes: defaults::MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unparseable values fall back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: get("HOST").unwrap_or(base.host),
            port: parse_or(get("PORT"), "PORT", base.port),
            database_url: get("DATABASE_URL"),
            db_max_connections: parse_or(
                get("DB_MAX_CONNECTIONS"),
                "DB_MAX_CONNECTIONS",
                base.db_max_connections,
            ),
            rate_limit_enabled: get("RATE_LIMIT_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(base.rate_limit_enabled),
            rate_limit_requests: parse_or(
                get("RATE_LIMIT_REQUESTS"),
                "RATE_LIMIT_REQUESTS",
                base.rate_limit_requests,
            ),
            rate_limit_period_secs: parse_or(
                get("RATE_LIMIT_PERIOD_SECS"),
                "RATE_LIMIT_PERIOD_SECS",
                base.rate_limit_period_secs,
            ),
            allowed_origins: get("ALLOWED_ORIGINS")
                .map(|v| split_origins(&v))
                .unwrap_or(base.allowed_origins),
            max_body_bytes: parse_or(get("MAX_BODY_BYTES"), "MAX_BODY_BYTES", base.max_body_bytes),
        }
    }

    /// Socket address to bind the listener to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|e| ConfigError::InvalidAddr(raw, e))
    }
}

fn parse_or<T: FromStr + Copy>(raw: Option<String>, key: &str, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %value, "Invalid configuration value, using default");
            default
        }),
        None => default,
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
