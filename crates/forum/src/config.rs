use std::{env, time::Duration};

use forum_core::cache::KeyPolicy;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Deployment environment name, used as the cache key namespace
    /// (default: "local")
    pub app_env: String,
    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Cache probe timeout in milliseconds; a slower cache is treated as a
    /// miss (default: 150)
    pub cache_probe_timeout_ms: u64,
    /// Maximum number of cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Capacity of the event publish queue (default: 1,024)
    pub event_queue_capacity: usize,
    /// Path to SQLite database file (default: "forum.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `APP_ENV` - Deployment environment name (default: "local")
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `CACHE_PROBE_TIMEOUT_MS` - Cache probe timeout (default: 150)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `EVENT_QUEUE_CAPACITY` - Event publish queue size (default: 1,024)
    /// - `SQLITE_PATH` - SQLite database path (default: "forum.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> Self {
        Self {
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "local".to_string()),
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            cache_probe_timeout_ms: env::var("CACHE_PROBE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(150),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            event_queue_capacity: env::var("EVENT_QUEUE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_024),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "forum.db".to_string()),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the cache probe timeout as a Duration.
    pub fn cache_probe_timeout(&self) -> Duration {
        Duration::from_millis(self.cache_probe_timeout_ms)
    }

    /// Cache key policy for this deployment's namespace.
    pub fn key_policy(&self) -> KeyPolicy {
        KeyPolicy::new(&self.app_env)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
