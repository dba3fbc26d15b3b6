//! Pure functions for serializing/deserializing post listings to/from cache
//! bytes.
//!
//! JSON is used for cache storage, providing human-readable cache values that
//! are easy to inspect. A cached value is always the complete serialization
//! of one query result; it is never partially written.

use thiserror::Error;

use crate::post::Post;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Serializes a post listing to JSON bytes.
pub fn serialize_posts(posts: &[Post]) -> Result<Vec<u8>, SerializationError> {
    serde_json::to_vec(posts).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a post listing.
pub fn deserialize_posts(bytes: &[u8]) -> Result<Vec<Post>, SerializationError> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn test_post(id: i64) -> Post {
        Post {
            id,
            title: format!("Post {id}"),
            content: "some content long enough".to_string(),
            published: true,
            author_id: Some(1),
            created_at: Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_roundtrip_posts() {
        let posts = vec![test_post(2), test_post(1)];

        let bytes = serialize_posts(&posts).expect("serialize should succeed");
        let deserialized = deserialize_posts(&bytes).expect("deserialize should succeed");

        assert_eq!(posts, deserialized);
    }

    #[test]
    fn test_roundtrip_empty_listing() {
        let posts: Vec<Post> = vec![];

        let bytes = serialize_posts(&posts).expect("serialize should succeed");
        assert_eq!(bytes, b"[]");

        let deserialized = deserialize_posts(&bytes).expect("deserialize should succeed");
        assert!(deserialized.is_empty());
    }

    #[test]
    fn test_deserialize_malformed_bytes() {
        let result = deserialize_posts(b"not valid json");

        assert!(matches!(
            result.unwrap_err(),
            SerializationError::DeserializeFailed(_)
        ));
    }

    #[test]
    fn test_deserialize_wrong_shape() {
        let result = deserialize_posts(b"{\"id\": 1}");

        assert!(matches!(
            result.unwrap_err(),
            SerializationError::DeserializeFailed(_)
        ));
    }

    #[test]
    fn test_serialization_preserves_optional_author() {
        let mut post = test_post(1);
        post.author_id = None;

        let bytes = serialize_posts(&[post.clone()]).unwrap();
        let deserialized = deserialize_posts(&bytes).unwrap();

        assert_eq!(deserialized[0], post);
        assert!(deserialized[0].author_id.is_none());
    }
}
