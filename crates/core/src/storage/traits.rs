use async_trait::async_trait;

use crate::post::{NewPost, Post};

use super::Result;

/// Repository for post operations against the authoritative store.
///
/// The store owns the record lifecycle: identifiers and creation timestamps
/// are assigned on insert, and identifiers are monotonic.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Inserts a new post and returns it with its store-assigned identifier
    /// and timestamp.
    async fn insert(&self, post: NewPost) -> Result<Post>;

    /// Returns all published posts, ordered by identifier descending
    /// (most recent first), with each post's author reference.
    async fn list_published(&self) -> Result<Vec<Post>>;

    /// Gets a post by its identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>>;

    /// Deletes a post by its identifier.
    async fn delete(&self, id: i64) -> Result<()>;
}
