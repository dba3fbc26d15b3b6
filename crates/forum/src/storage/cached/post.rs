//! Cached post repository decorator.
//!
//! The two core paths live here. Sequencing inside one write invocation is
//! strict: store-insert, then cache-invalidate, then event-publish. There is
//! no transaction spanning the three, and no in-process locking: all
//! mutation is delegated to the external systems' own concurrency control.
//!
//! A known race is accepted rather than fixed: a reader that loaded a stale
//! listing before a concurrent writer's insert committed can repopulate the
//! cache after that writer's invalidation, leaving stale data until TTL
//! expiry. Staleness is therefore bounded by the TTL; the design favors
//! availability and simplicity over strict cache coherence.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use forum_core::cache::{deserialize_posts, serialize_posts, Cache, KeyPolicy};
use forum_core::events::{EventBus, PostCreated};
use forum_core::post::{NewPost, Post};
use forum_core::storage::{PostRepository, Result};

/// Cache behavior knobs for the decorator.
#[derive(Debug, Clone)]
pub struct CachePolicy {
    /// Key derivation for this deployment's namespace.
    pub keys: KeyPolicy,
    /// Time-to-live for cached listings.
    pub ttl: Duration,
    /// Upper bound on any single cache round-trip from the read path; a
    /// slower cache is treated as a miss.
    pub probe_timeout: Duration,
}

/// Cached post repository decorator.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
/// * `B` - The event bus used for fan-out on writes
pub struct CachedPostRepository<R, C, B>
where
    R: PostRepository,
    C: Cache,
    B: EventBus,
{
    repository: Arc<R>,
    cache: Arc<C>,
    bus: Arc<B>,
    policy: CachePolicy,
}

impl<R, C, B> CachedPostRepository<R, C, B>
where
    R: PostRepository,
    C: Cache,
    B: EventBus,
{
    /// Creates a new cached post repository.
    pub fn new(repository: Arc<R>, cache: Arc<C>, bus: Arc<B>, policy: CachePolicy) -> Self {
        Self {
            repository,
            cache,
            bus,
            policy,
        }
    }

    /// Probes the cache for a fresh listing snapshot.
    ///
    /// Returns `None` on miss, cache error, deserialization failure, or
    /// probe timeout; every one of those degrades to a store read.
    async fn probe_listing(&self, key: &str) -> Option<Vec<Post>> {
        let probe = tokio::time::timeout(self.policy.probe_timeout, self.cache.get(key));
        match probe.await {
            Ok(Ok(Some(bytes))) => match deserialize_posts(&bytes) {
                Ok(posts) => {
                    tracing::trace!(key = %key, count = posts.len(), "Cache hit for post listing");
                    Some(posts)
                }
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "Cached listing deserialization failed");
                    None
                }
            },
            Ok(Ok(None)) => {
                tracing::trace!(key = %key, "Cache miss for post listing");
                None
            }
            Ok(Err(err)) => {
                tracing::warn!(key = %key, error = %err, "Cache probe failed, falling back to store");
                None
            }
            Err(_) => {
                tracing::warn!(
                    key = %key,
                    timeout_ms = self.policy.probe_timeout.as_millis() as u64,
                    "Cache probe timed out, falling back to store"
                );
                None
            }
        }
    }

    /// Repopulates the listing cache, best-effort.
    async fn populate_listing(&self, key: &str, posts: &[Post]) {
        let bytes = match serialize_posts(posts) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Failed to serialize post listing");
                return;
            }
        };

        let set = self.cache.set(key, &bytes, Some(self.policy.ttl));
        match tokio::time::timeout(self.policy.probe_timeout, set).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                tracing::warn!(key = %key, error = %err, "Failed to cache post listing");
            }
            Err(_) => {
                tracing::warn!(key = %key, "Cache populate timed out");
            }
        }
    }

    /// Drops the listing cache entry, best-effort.
    ///
    /// The entry is deleted rather than patched: recomputing the merge is
    /// more error-prone than a forced miss on the next read. A failed delete
    /// self-heals at TTL expiry.
    async fn invalidate_listing(&self) {
        let key = self.policy.keys.listing_key();
        if let Err(err) = self.cache.delete(&key).await {
            tracing::warn!(key = %key, error = %err, "Failed to invalidate post listing cache");
        }
    }
}

#[async_trait]
impl<R, C, B> PostRepository for CachedPostRepository<R, C, B>
where
    R: PostRepository + 'static,
    C: Cache + 'static,
    B: EventBus + 'static,
{
    async fn insert(&self, post: NewPost) -> Result<Post> {
        // 1. Persist to the authoritative store; nothing downstream runs
        //    unless this commits.
        let created = self.repository.insert(post).await?;

        // 2. Invalidate the listing cache made stale by the write.
        self.invalidate_listing().await;

        // 3. Hand the event to the bus. Fire-and-forget: a failure here is
        //    logged and swallowed, never rolled into the request outcome.
        let event = PostCreated::from_post(&created);
        if let Err(err) = self.bus.publish(event) {
            tracing::warn!(post_id = created.id, error = %err, "Failed to enqueue post_created event");
        }

        tracing::debug!(post_id = created.id, "Post created");
        Ok(created)
    }

    async fn list_published(&self) -> Result<Vec<Post>> {
        let key = self.policy.keys.listing_key();

        if let Some(posts) = self.probe_listing(&key).await {
            return Ok(posts);
        }

        let posts = self.repository.list_published().await?;

        self.populate_listing(&key, &posts).await;

        Ok(posts)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>> {
        // Detail reads go straight to the store; the detail key exists in
        // the policy but is not yet populated by any path.
        self.repository.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await?;

        self.invalidate_listing().await;

        tracing::debug!(post_id = id, "Post deleted");
        Ok(())
    }
}
