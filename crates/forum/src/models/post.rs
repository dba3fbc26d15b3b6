use serde::Deserialize;

use forum_core::post::{NewPost, ValidationError};

/// Request payload for creating a new post.
#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub author_id: Option<i64>,
}

impl CreatePost {
    /// Validates the raw payload into the core input type.
    pub fn into_new_post(self) -> Result<NewPost, ValidationError> {
        NewPost::new(self.title, self.content, self.author_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_payload() {
        let payload: CreatePost =
            serde_json::from_str(r#"{"title": "Hello", "content": "long enough content"}"#)
                .unwrap();

        let new_post = payload.into_new_post().unwrap();
        assert_eq!(new_post.title(), "Hello");
        assert_eq!(new_post.author_id(), None);
    }

    #[test]
    fn test_author_id_is_optional() {
        let payload: CreatePost = serde_json::from_str(
            r#"{"title": "Hello", "content": "long enough content", "author_id": 3}"#,
        )
        .unwrap();

        assert_eq!(payload.into_new_post().unwrap().author_id(), Some(3));
    }

    #[test]
    fn test_short_content_is_rejected() {
        let payload: CreatePost =
            serde_json::from_str(r#"{"title": "Hello", "content": "short"}"#).unwrap();

        assert!(matches!(
            payload.into_new_post().unwrap_err(),
            ValidationError::ContentTooShort { .. }
        ));
    }
}
