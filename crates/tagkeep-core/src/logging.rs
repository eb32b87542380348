//! Structured logging schema for tagkeep.
//!
//! Every log event carries the identity fields below, so log aggregation can
//! filter by subsystem, component and operation across both record stores
//! and the HTTP layer. Field names are fixed by the `tracing` macros at each
//! call site; the values come from the constants in this module.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Request failed on the server side |
//! | WARN  | Recoverable issue, fallback applied (bad config value, rate limit hit) |
//! | INFO  | Lifecycle events and completed writes |
//! | DEBUG | Reads, searches, pool metrics |

// ─── Field names ───────────────────────────────────────────────────────────

/// Subsystem originating the log event. Values: [`subsystems`].
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem. Values: [`components`].
pub const COMPONENT: &str = "component";

/// Logical operation name. Values: [`ops`].
pub const OPERATION: &str = "op";

/// Id of the tag being operated on.
pub const TAG_ID: &str = "tag_id";

/// Search substring.
pub const QUERY: &str = "query";

/// Number of tags returned by a search.
pub const RESULT_COUNT: &str = "result_count";

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of open connections in the pool.
pub const POOL_SIZE: &str = "pool_size";

/// Number of idle connections in the pool.
pub const POOL_IDLE: &str = "pool_idle";

// ─── Field values ──────────────────────────────────────────────────────────

pub mod subsystems {
    pub const API: &str = "api";
    pub const DATABASE: &str = "database";
}

pub mod components {
    /// PostgreSQL tag repository.
    pub const PG_TAGS: &str = "tags";
    /// In-process tag repository.
    pub const MEMORY_STORE: &str = "memory_store";
    pub const POOL: &str = "pool";
}

pub mod ops {
    pub const CREATE: &str = "create";
    pub const SEARCH: &str = "search";
    pub const UPDATE: &str = "update";
    pub const RESET: &str = "reset";
    pub const CONNECT: &str = "connect";
    pub const METRICS: &str = "metrics";
}
