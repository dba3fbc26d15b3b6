//! Post domain types and boundary validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum content length accepted at the boundary, in characters.
pub const MIN_CONTENT_CHARS: usize = 10;

/// A forum post as held by the authoritative store.
///
/// The `id` and `created_at` fields are store-assigned: a `Post` only exists
/// after a successful insert. Identifiers are monotonic, so ordering by
/// `id` descending yields most-recent-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub published: bool,
    /// Author reference. Optional at read time (e.g. seeded or system posts).
    pub author_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a post.
///
/// Construction via [`NewPost::new`] is the validation boundary: once a
/// `NewPost` exists, the write path may assume its invariants hold. A
/// validation failure past this point is a defect, not an expected condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
    author_id: Option<i64>,
}

impl NewPost {
    /// Validates and normalizes raw input into a `NewPost`.
    ///
    /// The title is trimmed and must be non-empty; the content must be at
    /// least [`MIN_CONTENT_CHARS`] characters long.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let content = content.into();
        if content.chars().count() < MIN_CONTENT_CHARS {
            return Err(ValidationError::ContentTooShort {
                min: MIN_CONTENT_CHARS,
            });
        }

        Ok(Self {
            title,
            content,
            author_id,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author_id(&self) -> Option<i64> {
        self.author_id
    }

    /// Whether the post is published on creation.
    ///
    /// There is no draft workflow: every created post is published.
    pub fn published(&self) -> bool {
        true
    }
}

/// Errors raised when raw input fails boundary validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("content must be at least {min} characters long")]
    ContentTooShort { min: usize },
}
