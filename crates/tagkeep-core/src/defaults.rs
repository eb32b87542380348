//! Centralized default constants for tagkeep.
//!
//! All crates reference these constants instead of defining their own
//! magic numbers.

// =============================================================================
// TAGS
// =============================================================================

/// Maximum tag name length in characters (matches the `VARCHAR(255)` column).
pub const TAG_NAME_MAX_LEN: usize = 255;

/// First id handed out by an empty or freshly reset store.
pub const FIRST_TAG_ID: i64 = 1;

// =============================================================================
// SERVER
// =============================================================================

/// Default bind host.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const SERVER_PORT: u16 = 3000;

/// Default maximum request body size in bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Default CORS origins when `ALLOWED_ORIGINS` is unset.
pub const ALLOWED_ORIGINS: &str = "http://localhost:3000";

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Requests allowed per period.
pub const RATE_LIMIT_REQUESTS: u32 = 100;

/// Rate limit period in seconds.
pub const RATE_LIMIT_PERIOD_SECS: u64 = 60;

// =============================================================================
// DATABASE
// =============================================================================

/// Default maximum number of pooled connections.
pub const DB_MAX_CONNECTIONS: u32 = 10;

/// Default connection acquire timeout in seconds.
pub const DB_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default idle timeout in seconds.
pub const DB_IDLE_TIMEOUT_SECS: u64 = 600;
