//! Health check endpoint.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check that the server is accepting
/// connections; performs no backend checks.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
