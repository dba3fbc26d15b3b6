//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers see a single repository trait object; the
//! cache-aside and event fan-out behavior lives in the decorator the
//! factory functions wrap around the storage backend.

use std::sync::Arc;

use forum_core::storage::PostRepository;

use crate::config::Config;
use crate::storage::cached::CachePolicy;

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'sqlite'");

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Post repository (cached, wraps underlying storage).
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    fn build(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}

fn cache_policy(config: &Config) -> CachePolicy {
    CachePolicy {
        keys: config.key_policy(),
        ttl: config.cache_ttl(),
        probe_timeout: config.cache_probe_timeout(),
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::memory::{MemoryCache, MemoryEventBus};
    use crate::storage::cached::CachedPostRepository;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));
            let bus = Arc::new(MemoryEventBus::spawn(config.event_queue_capacity));

            let cached_posts = Arc::new(CachedPostRepository::new(
                sqlite_repo,
                memory_cache,
                bus,
                cache_policy(config),
            ));

            Ok(Self::build(cached_posts))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::redis_impl::{RedisCache, RedisEventBus};
    use crate::storage::cached::CachedPostRepository;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);
            let bus = Arc::new(
                RedisEventBus::new(
                    &config.redis_url,
                    config.key_policy().events_channel(),
                    config.event_queue_capacity,
                )
                .await?,
            );

            let cached_posts = Arc::new(CachedPostRepository::new(
                sqlite_repo,
                redis_cache,
                bus,
                cache_policy(config),
            ));

            Ok(Self::build(cached_posts))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::memory::{MemoryCache, MemoryEventBus};
    use crate::storage::cached::CachedPostRepository;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for local runs without any external dependencies.
        pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));
            let bus = Arc::new(MemoryEventBus::spawn(config.event_queue_capacity));

            let cached_posts = Arc::new(CachedPostRepository::new(
                inmemory_repo,
                memory_cache,
                bus,
                cache_policy(config),
            ));

            Ok(Self::build(cached_posts))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::redis_impl::{RedisCache, RedisEventBus};
    use crate::storage::cached::CachedPostRepository;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);
            let bus = Arc::new(
                RedisEventBus::new(
                    &config.redis_url,
                    config.key_policy().events_channel(),
                    config.event_queue_capacity,
                )
                .await?,
            );

            let cached_posts = Arc::new(CachedPostRepository::new(
                inmemory_repo,
                redis_cache,
                bus,
                cache_policy(config),
            ));

            Ok(Self::build(cached_posts))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(all(test, feature = "inmemory", feature = "memory"))]
mod test_support {
    use super::*;
    use crate::cache::memory::{MemoryCache, MemoryEventBus};
    use crate::storage::cached::CachedPostRepository;
    use crate::storage::InMemoryRepository;
    use std::time::Duration;

    use forum_core::cache::KeyPolicy;

    impl AppState {
        /// Creates an AppState wired entirely in-process, for router tests.
        ///
        /// Must be called from within a tokio runtime: the event bus spawns
        /// its drain worker.
        pub fn in_process() -> Self {
            let repo = Arc::new(InMemoryRepository::new());
            let cache = Arc::new(MemoryCache::new(1_000));
            let bus = Arc::new(MemoryEventBus::spawn(64));

            let policy = CachePolicy {
                keys: KeyPolicy::new("test"),
                ttl: Duration::from_secs(300),
                probe_timeout: Duration::from_millis(150),
            };

            Self::build(Arc::new(CachedPostRepository::new(repo, cache, bus, policy)))
        }
    }
}
