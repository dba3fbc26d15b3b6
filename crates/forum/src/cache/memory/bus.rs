//! In-process event bus backed by a bounded queue.
//!
//! `publish` is a non-blocking enqueue onto a bounded tokio mpsc channel; a
//! background worker owns the receiver and drains it. With no external
//! broker in this configuration, draining amounts to logging each event,
//! which keeps the producer side identical to the Redis backend.

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use forum_core::events::{EventBus, EventError, PostCreated, Result};

/// In-process event bus.
///
/// Cloning shares the same underlying queue.
#[derive(Debug, Clone)]
pub struct MemoryEventBus {
    sender: mpsc::Sender<PostCreated>,
}

impl MemoryEventBus {
    /// Creates a bus with a bounded queue of the given capacity, handing the
    /// receiving end to the caller.
    ///
    /// The caller is responsible for draining the receiver; an undrained
    /// queue eventually reports [`EventError::QueueFull`] to publishers.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<PostCreated>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }

    /// Creates a bus whose queue is drained by a spawned worker that logs
    /// each event.
    pub fn spawn(capacity: usize) -> Self {
        let (bus, mut receiver) = Self::channel(capacity);
        tokio::spawn(async move {
            while let Some(event) = receiver.recv().await {
                tracing::debug!(
                    post_id = event.post_id,
                    title = %event.title,
                    "Delivered post_created event"
                );
            }
            tracing::debug!("Event queue closed, worker exiting");
        });
        bus
    }
}

impl EventBus for MemoryEventBus {
    fn publish(&self, event: PostCreated) -> Result<()> {
        self.sender.try_send(event).map_err(|err| match err {
            TrySendError::Full(_) => EventError::QueueFull,
            TrySendError::Closed(_) => EventError::QueueClosed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_event(post_id: i64) -> PostCreated {
        PostCreated {
            post_id,
            title: "Hello".to_string(),
            author_id: Some(7),
            time: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_publish_delivers_to_receiver() {
        let (bus, mut receiver) = MemoryEventBus::channel(8);

        bus.publish(test_event(1)).unwrap();
        bus.publish(test_event(2)).unwrap();

        assert_eq!(receiver.recv().await.unwrap().post_id, 1);
        assert_eq!(receiver.recv().await.unwrap().post_id, 2);
    }

    #[tokio::test]
    async fn test_publish_does_not_block_when_queue_is_full() {
        let (bus, _receiver) = MemoryEventBus::channel(1);

        bus.publish(test_event(1)).unwrap();

        // The queue is full; publish must return immediately with an error
        // instead of waiting for the receiver.
        let result = bus.publish(test_event(2));
        assert_eq!(result.unwrap_err(), EventError::QueueFull);
    }

    #[tokio::test]
    async fn test_publish_after_receiver_dropped() {
        let (bus, receiver) = MemoryEventBus::channel(8);
        drop(receiver);

        let result = bus.publish(test_event(1));
        assert_eq!(result.unwrap_err(), EventError::QueueClosed);
    }

    #[tokio::test]
    async fn test_spawned_worker_drains_queue() {
        let bus = MemoryEventBus::spawn(1);

        bus.publish(test_event(1)).unwrap();

        // The worker drains the single-slot queue, so a second publish
        // succeeds once it has run.
        tokio::task::yield_now().await;
        bus.publish(test_event(2)).unwrap();
    }
}
