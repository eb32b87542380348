//! In-process tag repository.
//!
//! Backs the service when no `DATABASE_URL` is configured and drives the
//! router tests. All state sits behind one `RwLock`, so writes to a given id
//! are serialized and id assignment never hands out the same value twice.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use tagkeep_core::defaults::FIRST_TAG_ID;
use tagkeep_core::logging::{components, ops, subsystems};
use tagkeep_core::{Result, Tag, TagRepository};

#[derive(Debug)]
struct MemoryState {
    next_id: i64,
    tags: BTreeMap<i64, Tag>,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            next_id: FIRST_TAG_ID,
            tags: BTreeMap::new(),
        }
    }
}

/// In-memory implementation of TagRepository.
#[derive(Debug, Default)]
pub struct MemoryTagRepository {
    state: RwLock<MemoryState>,
}

impl MemoryTagRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tags.
    pub async fn len(&self) -> usize {
        self.state.read().await.tags.len()
    }

    /// Whether the repository holds no tags.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.tags.is_empty()
    }
}

#[async_trait]
impl TagRepository for MemoryTagRepository {
    async fn create(&self, name: &str) -> Result<Tag> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let tag = Tag {
            id,
            name: name.to_string(),
        };
        state.tags.insert(id, tag.clone());

        info!(
            subsystem = subsystems::DATABASE,
            component = components::MEMORY_STORE,
            op = ops::CREATE,
            tag_id = id,
            "Tag created"
        );
        Ok(tag)
    }

    async fn get(&self, id: i64) -> Result<Option<Tag>> {
        Ok(self.state.read().await.tags.get(&id).cloned())
    }

    async fn search(&self, query: &str) -> Result<Vec<Tag>> {
        let state = self.state.read().await;
        // BTreeMap iteration is ordered by id.
        let tags: Vec<Tag> = state
            .tags
            .values()
            .filter(|tag| tag.name.contains(query))
            .cloned()
            .collect();

        debug!(
            subsystem = subsystems::DATABASE,
            component = components::MEMORY_STORE,
            op = ops::SEARCH,
            query = query,
            result_count = tags.len(),
            "Tag search complete"
        );
        Ok(tags)
    }

    async fn update(&self, id: i64, name: &str) -> Result<Option<Tag>> {
        let mut state = self.state.write().await;
        let Some(tag) = state.tags.get_mut(&id) else {
            return Ok(None);
        };
        tag.name = name.to_string();

        info!(
            subsystem = subsystems::DATABASE,
            component = components::MEMORY_STORE,
            op = ops::UPDATE,
            tag_id = id,
            "Tag updated"
        );
        Ok(Some(tag.clone()))
    }

    async fn reset(&self) -> Result<()> {
        *self.state.write().await = MemoryState::default();
        info!(
            subsystem = subsystems::DATABASE,
            component = components::MEMORY_STORE,
            op = ops::RESET,
            "Tag store cleared"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids_from_one() {
        let repo = MemoryTagRepository::new();
        let a = repo.create("alpha").await.unwrap();
        let b = repo.create("beta").await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = MemoryTagRepository::new();
        assert!(repo.get(1).await.unwrap().is_none());
        assert!(repo.get(0).await.unwrap().is_none());
        assert!(repo.get(-5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let repo = MemoryTagRepository::new();
        let created = repo.create("test").await.unwrap();
        let fetched = repo.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_search_is_substring_ordered_by_id() {
        let repo = MemoryTagRepository::new();
        repo.create("rustacean").await.unwrap();
        repo.create("python").await.unwrap();
        repo.create("trust").await.unwrap();

        let found = repo.search("rust").await.unwrap();
        let names: Vec<&str> = found.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["rustacean", "trust"]);
        assert!(found.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_search_is_case_sensitive() {
        let repo = MemoryTagRepository::new();
        repo.create("Test").await.unwrap();
        assert!(repo.search("test").await.unwrap().is_empty());
        assert_eq!(repo.search("Test").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let repo = MemoryTagRepository::new();
        repo.create("abc").await.unwrap();
        repo.create("50%").await.unwrap();
        let found = repo.search("%").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "50%");
        assert!(repo.search("_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_existing_and_missing() {
        let repo = MemoryTagRepository::new();
        let tag = repo.create("old").await.unwrap();

        let updated = repo.update(tag.id, "new").await.unwrap().unwrap();
        assert_eq!(updated.id, tag.id);
        assert_eq!(updated.name, "new");
        assert_eq!(repo.get(tag.id).await.unwrap().unwrap().name, "new");

        assert!(repo.update(99, "ghost").await.unwrap().is_none());
        assert!(repo.get(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reset_clears_and_restarts_ids() {
        let repo = MemoryTagRepository::new();
        repo.create("one").await.unwrap();
        repo.create("two").await.unwrap();

        repo.reset().await.unwrap();
        assert!(repo.is_empty().await);
        assert!(repo.get(1).await.unwrap().is_none());

        let tag = repo.create("again").await.unwrap();
        assert_eq!(tag.id, FIRST_TAG_ID);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_unique_ids() {
        let repo = Arc::new(MemoryTagRepository::new());
        let tasks = (0..50).map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.create(&format!("tag-{}", i)).await.unwrap() })
        });

        let tags = futures::future::join_all(tasks).await;
        let ids: HashSet<i64> = tags.into_iter().map(|t| t.unwrap().id).collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(ids.iter().min(), Some(&1));
        assert_eq!(ids.iter().max(), Some(&50));
    }
}
