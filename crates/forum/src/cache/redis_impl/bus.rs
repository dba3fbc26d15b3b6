//! Redis pub/sub event bus.
//!
//! The producer side is a non-blocking enqueue onto a bounded tokio mpsc
//! channel. A background worker owns the Redis connection and drains the
//! queue, serializing each event into its wire envelope and issuing a
//! PUBLISH to the configured channel. A failed PUBLISH is logged and the
//! event is dropped; there is no retry and no dead-letter store.

use redis::AsyncCommands;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use forum_core::events::{EventBus, EventError, PostCreated, Result};

use super::error::map_redis_error;

/// Redis-backed event bus.
///
/// Cloning shares the same underlying queue and worker.
#[derive(Debug, Clone)]
pub struct RedisEventBus {
    sender: mpsc::Sender<PostCreated>,
}

impl RedisEventBus {
    /// Connects to Redis and spawns the publishing worker.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    /// * `channel` - Pub/sub channel name events are published to
    /// * `capacity` - Bound on the in-process queue ahead of the worker
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` mapped into
    /// [`EventError::PublishFailed`] if the connection cannot be established.
    pub async fn new(url: &str, channel: String, capacity: usize) -> Result<Self> {
        let client = redis::Client::open(url)
            .map_err(|err| EventError::PublishFailed(map_redis_error(err).to_string()))?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(|err| EventError::PublishFailed(map_redis_error(err).to_string()))?;

        let (sender, receiver) = mpsc::channel(capacity);
        tokio::spawn(publish_worker(conn, channel, receiver));

        Ok(Self { sender })
    }
}

impl EventBus for RedisEventBus {
    fn publish(&self, event: PostCreated) -> Result<()> {
        self.sender.try_send(event).map_err(|err| match err {
            TrySendError::Full(_) => EventError::QueueFull,
            TrySendError::Closed(_) => EventError::QueueClosed,
        })
    }
}

/// Drains the queue, publishing each event to Redis.
async fn publish_worker(
    mut conn: redis::aio::ConnectionManager,
    channel: String,
    mut receiver: mpsc::Receiver<PostCreated>,
) {
    while let Some(event) = receiver.recv().await {
        let post_id = event.post_id;
        let payload = match serde_json::to_vec(&event.into_wire()) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(post_id, error = %err, "Failed to serialize post_created event");
                continue;
            }
        };

        match conn.publish::<_, _, ()>(&channel, payload).await {
            Ok(()) => {
                tracing::debug!(post_id, channel = %channel, "Published post_created event");
            }
            Err(err) => {
                tracing::warn!(post_id, channel = %channel, error = %err, "Failed to publish post_created event");
            }
        }
    }
    tracing::debug!(channel = %channel, "Event queue closed, worker exiting");
}
