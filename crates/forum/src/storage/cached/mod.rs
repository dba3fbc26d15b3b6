//! Cached repository decorator.
//!
//! Wraps a `PostRepository` with the cache-aside pattern and event
//! publishing:
//!
//! - **Reads**: Check cache first, on miss fetch from the repository and
//!   populate the cache with a bounded TTL
//! - **Writes**: Persist to the repository, invalidate the listing cache,
//!   hand a `post_created` event to the bus
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let repo = Arc::new(InMemoryRepository::new());
//! let cache = Arc::new(MemoryCache::new(10_000));
//! let (bus, rx) = MemoryEventBus::channel(1_024);
//!
//! let posts = CachedPostRepository::new(repo, cache, Arc::new(bus), CachePolicy {
//!     keys: KeyPolicy::new("dev"),
//!     ttl: Duration::from_secs(300),
//!     probe_timeout: Duration::from_millis(150),
//! });
//! ```

mod post;

pub use post::{CachePolicy, CachedPostRepository};
