//! Handler error type that renders the standard envelope.
//!
//! Only store failures and not-found conditions reach this type: cache and
//! event-bus failures are absorbed inside the cached repository and never
//! surface here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use forum_core::post::ValidationError;
use forum_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::handlers::ApiResponse;
use crate::trace::TraceId;

/// A request-boundary failure, carrying the trace ID for the envelope.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    trace_id: TraceId,
}

impl ApiError {
    /// Malformed input rejected before entering the core paths.
    pub fn validation(error: &ValidationError, trace_id: &TraceId) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: error.to_string(),
            trace_id: trace_id.clone(),
        }
    }

    /// Request body could not be parsed at all.
    pub fn bad_request(message: impl Into<String>, trace_id: &TraceId) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            trace_id: trace_id.clone(),
        }
    }

    /// Requested record does not exist.
    pub fn not_found(id: i64, trace_id: &TraceId) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("post not found: {id}"),
            trace_id: trace_id.clone(),
        }
    }

    /// Store failure propagated from the repository.
    ///
    /// Status comes from the pure mapping in `forum_core`; internal failures
    /// get a generic message so details stay in the logs, keyed by trace ID.
    pub fn from_repository(error: RepositoryError, trace_id: &TraceId) -> Self {
        let status = StatusCode::from_u16(repository_error_to_status_code(&error))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = match &error {
            RepositoryError::NotFound { .. } => error.to_string(),
            RepositoryError::Unavailable(_) => "service temporarily unavailable".to_string(),
            _ => "internal server error".to_string(),
        };

        tracing::warn!(
            status = %status,
            error = %error,
            trace_id = %trace_id.as_str(),
            "Repository error at request boundary"
        );

        Self {
            status,
            message,
            trace_id: trace_id.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.status.as_u16();
        (
            self.status,
            ApiResponse::error(code, self.message, &self.trace_id),
        )
            .into_response()
    }
}
