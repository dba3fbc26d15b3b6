use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("post not found: {id}")]
    NotFound { id: i64 },
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = RepositoryError::NotFound { id: 42 };
        assert_eq!(error.to_string(), "post not found: 42");
    }

    #[test]
    fn test_unavailable_display() {
        let error = RepositoryError::Unavailable("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "store unavailable: timeout after 30s");
    }

    #[test]
    fn test_query_failed_display() {
        let error = RepositoryError::QueryFailed("syntax error".to_string());
        assert_eq!(error.to_string(), "query failed: syntax error");
    }

    #[test]
    fn test_serialization_display() {
        let error = RepositoryError::Serialization("missing field".to_string());
        assert_eq!(error.to_string(), "serialization error: missing field");
    }
}
