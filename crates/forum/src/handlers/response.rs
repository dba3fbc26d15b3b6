//! Uniform JSON response envelope.
//!
//! Every endpoint, success or failure, answers with
//! `{ code, message, data, trace_id }`. `code` is 0 on success and an
//! HTTP-status-like code otherwise; errors carry `data: null`.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::trace::TraceId;

/// The envelope wrapping every API response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
    pub trace_id: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success envelope: code 0, message "OK".
    pub fn ok(data: T, trace_id: &TraceId) -> Json<Self> {
        Json(Self {
            code: 0,
            message: "OK".to_string(),
            data: Some(data),
            trace_id: trace_id.0.clone(),
        })
    }
}

impl ApiResponse<()> {
    /// Error envelope: non-zero code, `data: null`.
    pub fn error(code: u16, message: impl Into<String>, trace_id: &TraceId) -> Json<Self> {
        Json(Self {
            code,
            message: message.into(),
            data: None,
            trace_id: trace_id.0.clone(),
        })
    }
}
