//! Post event payloads and the event bus producer contract.
//!
//! Events are created at the moment a store write commits and handed to the
//! bus exactly once per successful write. The producer has no further
//! lifecycle: consumption, retry, and acknowledgment belong to the bus and
//! its consumers. There is no message identifier and no delivery-count
//! metadata; a consumer is responsible for its own idempotence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::post::Post;

/// Event name carried in the wire envelope's `pattern` field.
pub const POST_CREATED: &str = "post_created";

/// Payload of a `post_created` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostCreated {
    pub post_id: i64,
    pub title: String,
    pub author_id: Option<i64>,
    /// Emission timestamp, assigned when the event is created.
    pub time: DateTime<Utc>,
}

impl PostCreated {
    /// Builds the event for a freshly committed post, stamped now.
    pub fn from_post(post: &Post) -> Self {
        Self {
            post_id: post.id,
            title: post.title.clone(),
            author_id: post.author_id,
            time: Utc::now(),
        }
    }

    /// Wraps the payload in the wire envelope consumers match on.
    pub fn into_wire(self) -> WireEvent {
        WireEvent {
            pattern: POST_CREATED.to_string(),
            data: self,
        }
    }
}

/// Wire envelope published to the bus: `{"pattern": ..., "data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireEvent {
    pub pattern: String,
    pub data: PostCreated,
}

/// Errors raised when handing an event to the bus.
///
/// All of them are non-fatal to the write path: logged and swallowed, never
/// surfaced to the caller, never retried synchronously.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("event queue is full")]
    QueueFull,
    #[error("event queue is closed")]
    QueueClosed,
    #[error("publish failed: {0}")]
    PublishFailed(String),
}

/// Result type for event bus operations.
pub type Result<T> = std::result::Result<T, EventError>;

/// Fire-and-forget event producer.
///
/// `publish` hands the event to the bus without waiting for delivery: the
/// call enqueues and returns. Implementations drain the queue on a background
/// worker that owns the actual bus I/O, so a request handler never blocks on
/// the bus.
pub trait EventBus: Send + Sync {
    /// Hands an event to the bus. Enqueue failure is the only observable
    /// error; delivery outcome is never reported back.
    fn publish(&self, event: PostCreated) -> Result<()>;
}
