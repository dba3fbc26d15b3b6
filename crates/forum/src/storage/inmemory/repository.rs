//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use forum_core::post::{NewPost, Post};
use forum_core::storage::{PostRepository, RepositoryError, Result};

/// In-memory storage backend for local dev and testing.
///
/// Uses a `BTreeMap` wrapped in `Arc<RwLock<_>>` for thread-safe access;
/// identifiers come from an atomic counter, so they are monotonic like a
/// database sequence. Data is not persisted and is lost on drop.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    posts: Arc<RwLock<BTreeMap<i64, Post>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            posts: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryRepository {
    async fn insert(&self, post: NewPost) -> Result<Post> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Post {
            id,
            title: post.title().to_string(),
            content: post.content().to_string(),
            published: post.published(),
            author_id: post.author_id(),
            created_at: Utc::now(),
        };

        self.posts.write().await.insert(id, created.clone());
        Ok(created)
    }

    async fn list_published(&self) -> Result<Vec<Post>> {
        let posts = self.posts.read().await;
        // BTreeMap iterates ascending by id; reverse for most-recent-first.
        Ok(posts
            .values()
            .rev()
            .filter(|p| p.published)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut posts = self.posts.write().await;
        if posts.remove(&id).is_none() {
            return Err(RepositoryError::NotFound { id });
        }
        Ok(())
    }
}
