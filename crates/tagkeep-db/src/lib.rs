//! # tagkeep-db
//!
//! Record store adapters for tagkeep.
//!
//! This crate provides:
//! - Connection pool management
//! - [`PgTagRepository`], the PostgreSQL-backed tag store
//! - [`MemoryTagRepository`], an in-process tag store
//! - Embedded schema migrations (`migrations` feature)
//!
//! ## Example
//!
//! ```rust,ignore
//! use tagkeep_db::{Database, PoolConfig, TagRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect_with_config("postgres://localhost/tagkeep", PoolConfig::default())
//!         .await?;
//!     db.migrate().await?;
//!
//!     let tag = db.tags.create("rust").await?;
//!     println!("Created tag {}", tag.id);
//!     Ok(())
//! }
//! ```
pub mod memory;
pub mod pool;
pub mod tags;

// Test fixtures for integration tests
// Note: Always compiled so integration tests (in tests/) can use DEFAULT_TEST_DATABASE_URL
pub mod test_fixtures;

// Re-export core types
pub use tagkeep_core::*;

/// Escape LIKE wildcard characters (`%`, `_`, `\`) in user input.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

pub use memory::MemoryTagRepository;
pub use pool::{log_pool_metrics, PoolConfig};
pub use tags::PgTagRepository;

/// Combined database context for the PostgreSQL store.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Tag repository.
    pub tags: PgTagRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            tags: PgTagRepository::new(pool.clone()),
            pool,
        }
    }

    /// Connect to the given URL with the given pool sizing.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = pool::connect(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_plain_text_unchanged() {
        assert_eq!(escape_like("test"), "test");
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("snake_case"), "snake\\_case");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_escape_like_backslash_escaped_first() {
        // A literal backslash followed by % must not turn into an escaped %.
        assert_eq!(escape_like("\\%"), "\\\\\\%");
    }
}
