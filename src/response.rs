//! Core response value types.
//!
//! An [`ApiResponse`] pairs an HTTP status code with an immutable
//! [`ResponseBody`] record. Builders construct the value, the transport
//! layer serializes it; nothing mutates it in between.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Standardized JSON body for API responses.
///
/// Fields are skipped entirely when absent, so the serialized shape only
/// ever contains the keys a builder put there. The empty-body builders
/// (204/205/304) leave every field unset, which serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    /// Success flag. `true` for 1xx/2xx/3xx builders, `false` for 4xx/5xx.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Structured payload. Opaque to this crate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Caller-supplied error detail. `Some(Value::Null)` serializes as an
    /// explicit JSON `null`, which the server-error builder relies on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    /// Field name to list of validation messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Map<String, Value>>,
    /// Pagination descriptor, present only when non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Value>,
    /// Additional metadata, present only when non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl ResponseBody {
    /// Returns `true` when no field is set, i.e. the body serializes to `{}`.
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.message.is_none()
            && self.data.is_none()
            && self.error.is_none()
            && self.errors.is_none()
            && self.pagination.is_none()
            && self.meta.is_none()
    }
}

/// An immutable API response: an HTTP status code plus a [`ResponseBody`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status_code: StatusCode,
    body: ResponseBody,
}

impl ApiResponse {
    /// Pair a status code with a body record.
    pub fn new(status_code: StatusCode, body: ResponseBody) -> Self {
        Self { status_code, body }
    }

    /// The HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// The body record.
    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// Split into status code and body, for hand-rolled transports.
    pub fn into_parts(self) -> (StatusCode, ResponseBody) {
        (self.status_code, self.body)
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        // 204/205/304 must go out with no body at all.
        if self.body.is_empty() {
            return self.status_code.into_response();
        }
        (self.status_code, Json(self.body)).into_response()
    }
}

/// Whether a JSON value counts as "empty" for the omit-when-empty builders
/// (`custom`, `paginated`, `with_meta`).
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
