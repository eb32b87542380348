//! Core traits for tagkeep abstractions.
//!
//! These traits define the interfaces that concrete record stores must
//! satisfy, so the HTTP layer can run against PostgreSQL or an in-process
//! store interchangeably.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Tag;

// =============================================================================
// TAG REPOSITORY TRAITS
// =============================================================================

/// Record store for tags.
///
/// Callers are expected to validate names before calling `create` or
/// `update`; implementations persist what they are given.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Persist a new tag and return it with its assigned id.
    async fn create(&self, name: &str) -> Result<Tag>;

    /// Fetch a tag by id.
    async fn get(&self, id: i64) -> Result<Option<Tag>>;

    /// All tags whose name contains `query`, ordered by id.
    ///
    /// Matching is case-sensitive and treats every character of `query`
    /// literally.
    async fn search(&self, query: &str) -> Result<Vec<Tag>>;

    /// Replace the name of an existing tag. Returns `None` for unknown ids.
    async fn update(&self, id: i64, name: &str) -> Result<Option<Tag>>;

    /// Remove every tag and restart id assignment at 1.
    async fn reset(&self) -> Result<()>;
}
