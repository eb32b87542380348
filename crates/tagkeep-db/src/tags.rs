//! PostgreSQL tag repository implementation.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use tracing::{debug, info};

use tagkeep_core::logging::{components, ops, subsystems};
use tagkeep_core::{Error, Result, Tag, TagRepository};

use crate::escape_like;

fn tag_from_row(row: &PgRow) -> Tag {
    Tag {
        id: row.get("id"),
        name: row.get("name"),
    }
}

/// PostgreSQL implementation of TagRepository.
#[derive(Clone)]
pub struct PgTagRepository {
    pool: Pool<Postgres>,
}

impl PgTagRepository {
    /// Create a new PgTagRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn create(&self, name: &str) -> Result<Tag> {
        let row = sqlx::query("INSERT INTO tag (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;

        let tag = tag_from_row(&row);
        info!(
            subsystem = subsystems::DATABASE,
            component = components::PG_TAGS,
            op = ops::CREATE,
            tag_id = tag.id,
            "Tag created"
        );
        Ok(tag)
    }

    async fn get(&self, id: i64) -> Result<Option<Tag>> {
        let row = sqlx::query("SELECT id, name FROM tag WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(row.as_ref().map(tag_from_row))
    }

    async fn search(&self, query: &str) -> Result<Vec<Tag>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name
            FROM tag
            WHERE name LIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(escape_like(query))
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        let tags: Vec<Tag> = rows.iter().map(tag_from_row).collect();
        debug!(
            subsystem = subsystems::DATABASE,
            component = components::PG_TAGS,
            op = ops::SEARCH,
            query = query,
            result_count = tags.len(),
            "Tag search complete"
        );
        Ok(tags)
    }

    async fn update(&self, id: i64, name: &str) -> Result<Option<Tag>> {
        let row = sqlx::query("UPDATE tag SET name = $2 WHERE id = $1 RETURNING id, name")
            .bind(id)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        if row.is_some() {
            info!(
                subsystem = subsystems::DATABASE,
                component = components::PG_TAGS,
                op = ops::UPDATE,
                tag_id = id,
                "Tag updated"
            );
        }
        Ok(row.as_ref().map(tag_from_row))
    }

    async fn reset(&self) -> Result<()> {
        sqlx::query("TRUNCATE tag RESTART IDENTITY")
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        info!(
            subsystem = subsystems::DATABASE,
            component = components::PG_TAGS,
            op = ops::RESET,
            "Tag table truncated"
        );
        Ok(())
    }
}
