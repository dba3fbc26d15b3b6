//! Trace-ID middleware.
//!
//! Every request gets a trace identifier: the inbound `X-Trace-ID` header is
//! honored when present (for propagation between services), otherwise a new
//! UUID is generated. The identifier is stored as a request extension so
//! handlers can attach it to the response envelope, and it is echoed on the
//! response header so clients can report it for log correlation.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header carrying the trace identifier.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Per-request trace identifier, available as a request extension.
#[derive(Debug, Clone)]
pub struct TraceId(pub String);

impl TraceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Middleware that assigns the trace ID and echoes it on the response.
pub async fn trace_id_middleware(mut req: Request, next: Next) -> Response {
    let trace_id = req
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(TraceId(trace_id.clone()));

    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
    }

    response
}
