//! Connection pool setup for the PostgreSQL store.

use std::time::{Duration, Instant};

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info, warn};

use tagkeep_core::defaults::{DB_CONNECT_TIMEOUT_SECS, DB_IDLE_TIMEOUT_SECS, DB_MAX_CONNECTIONS};
use tagkeep_core::logging::{components, ops, subsystems};
use tagkeep_core::{Error, Result};

/// Pool sizing for a [`Database`](crate::Database).
///
/// Timeouts are fixed by `tagkeep_core::defaults`; only the connection
/// counts vary between the server and the test fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    /// Connections kept open even when idle.
    pub min_connections: u32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::with_max_connections(DB_MAX_CONNECTIONS)
    }
}

impl PoolConfig {
    pub fn with_max_connections(max_connections: u32) -> Self {
        Self {
            max_connections,
            min_connections: 0,
        }
    }

    /// One connection that is never reaped, so session state such as
    /// `search_path` applies to every query.
    pub fn single_connection() -> Self {
        Self {
            max_connections: 1,
            min_connections: 1,
        }
    }

    fn check(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(Error::Config("max_connections must be at least 1".to_string()));
        }
        if self.min_connections > self.max_connections {
            return Err(Error::Config(format!(
                "min_connections ({}) exceeds max_connections ({})",
                self.min_connections, self.max_connections
            )));
        }
        Ok(())
    }
}

/// Open a pool against `database_url`.
pub(crate) async fn connect(database_url: &str, config: PoolConfig) -> Result<PgPool> {
    config.check()?;
    let start = Instant::now();

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(DB_CONNECT_TIMEOUT_SECS))
        .idle_timeout(Duration::from_secs(DB_IDLE_TIMEOUT_SECS))
        .connect(database_url)
        .await
        .map_err(Error::Database)?;

    info!(
        subsystem = subsystems::DATABASE,
        component = components::POOL,
        op = ops::CONNECT,
        max_connections = config.max_connections,
        duration_ms = start.elapsed().as_millis() as u64,
        "Connected to PostgreSQL"
    );
    Ok(pool)
}

/// Log pool occupancy, warning when every connection is checked out.
pub fn log_pool_metrics(pool: &PgPool) {
    let size = pool.size();
    let idle = pool.num_idle();

    debug!(
        subsystem = subsystems::DATABASE,
        component = components::POOL,
        op = ops::METRICS,
        pool_size = size,
        pool_idle = idle,
        "Pool metrics"
    );

    if idle == 0 && size > 0 {
        warn!(
            subsystem = subsystems::DATABASE,
            component = components::POOL,
            pool_size = size,
            "No idle connections in pool"
        );
    }
}
