//! Cache key derivation policy.
//!
//! Keys are namespaced by deployment environment and application name so that
//! multiple environments sharing one cache backend never collide. Derivation
//! is a pure function of (environment, application name, resource, optional
//! id): no randomness, no counters, stable across process restarts.

/// Application name segment used in every key.
pub const APP_NAME: &str = "forum";

/// Environment segment substituted when none is configured.
///
/// Callers must never observe an empty namespace segment.
pub const DEFAULT_ENV: &str = "local";

/// Deterministic cache key derivation for one (environment, app) namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPolicy {
    prefix: String,
}

impl KeyPolicy {
    /// Creates a policy for the given environment name.
    ///
    /// An empty or whitespace-only environment falls back to [`DEFAULT_ENV`].
    pub fn new(env: &str) -> Self {
        let env = env.trim();
        let env = if env.is_empty() { DEFAULT_ENV } else { env };
        Self {
            prefix: format!("{env}:{APP_NAME}"),
        }
    }

    /// Returns the cache key for the published-post listing.
    pub fn listing_key(&self) -> String {
        format!("{}:posts:list", self.prefix)
    }

    /// Returns the cache key for a single post.
    pub fn detail_key(&self, id: i64) -> String {
        format!("{}:posts:{id}", self.prefix)
    }

    /// Returns the cache key for a user session.
    pub fn session_key(&self, user_id: i64) -> String {
        format!("{}:users:{user_id}:session", self.prefix)
    }

    /// Returns the bus channel name for post events.
    ///
    /// The producer and any consumer must agree on this one name.
    pub fn events_channel(&self) -> String {
        format!("{}:events:posts", self.prefix)
    }
}

impl Default for KeyPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ENV)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_key() {
        let keys = KeyPolicy::new("dev");
        assert_eq!(keys.listing_key(), "dev:forum:posts:list");
    }

    #[test]
    fn test_detail_key() {
        let keys = KeyPolicy::new("dev");
        assert_eq!(keys.detail_key(42), "dev:forum:posts:42");
    }

    #[test]
    fn test_session_key() {
        let keys = KeyPolicy::new("dev");
        assert_eq!(keys.session_key(7), "dev:forum:users:7:session");
    }

    #[test]
    fn test_events_channel() {
        let keys = KeyPolicy::new("dev");
        assert_eq!(keys.events_channel(), "dev:forum:events:posts");
    }

    #[test]
    fn test_empty_env_falls_back_to_local() {
        let keys = KeyPolicy::new("");
        assert_eq!(keys.listing_key(), "local:forum:posts:list");

        let keys = KeyPolicy::new("   ");
        assert_eq!(keys.listing_key(), "local:forum:posts:list");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let keys = KeyPolicy::new("prod");
        assert_eq!(keys.listing_key(), keys.listing_key());
        assert_eq!(KeyPolicy::new("prod").listing_key(), keys.listing_key());
    }

    #[test]
    fn test_keys_do_not_collide() {
        let keys = KeyPolicy::new("dev");
        assert_ne!(keys.detail_key(42), keys.detail_key(43));
        assert_ne!(keys.detail_key(42), keys.listing_key());
        assert_ne!(keys.session_key(42), keys.detail_key(42));
    }

    #[test]
    fn test_environments_do_not_collide() {
        assert_ne!(
            KeyPolicy::new("dev").listing_key(),
            KeyPolicy::new("prod").listing_key()
        );
    }
}
