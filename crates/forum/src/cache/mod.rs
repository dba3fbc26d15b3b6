//! Cache and event bus backend implementations.
//!
//! Concrete implementations of the `forum_core::cache::Cache` and
//! `forum_core::events::EventBus` traits, selected at compile time via
//! feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): In-memory cache with LRU eviction plus an
//!   in-process event queue
//! - `redis`: Redis cache and Redis pub/sub event bus
//!
//! These features are mutually exclusive, only one cache backend can be
//! enabled at a time.

#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p forum --features memory"
);

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

// Re-export the active backend
#[cfg(feature = "memory")]
#[allow(unused_imports)]
pub use memory::{MemoryCache, MemoryEventBus};

#[cfg(feature = "redis")]
#[allow(unused_imports)]
pub use redis_impl::{RedisCache, RedisEventBus};
