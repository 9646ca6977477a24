//! 3xx redirection builders.

use axum::http::StatusCode;
use serde_json::Value;

use super::{empty, pick, with_data};
use crate::response::ApiResponse;

/// Multiple Choices (300).
pub fn multiple_choices(message: Option<&str>, data: Option<Value>) -> ApiResponse {
    with_data(
        StatusCode::MULTIPLE_CHOICES,
        pick(message, "Multiple Choices"),
        data,
    )
}

/// Moved Permanently (301).
pub fn moved_permanently(message: Option<&str>, data: Option<Value>) -> ApiResponse {
    with_data(
        StatusCode::MOVED_PERMANENTLY,
        pick(message, "Moved Permanently"),
        data,
    )
}

/// Found (302).
pub fn found(message: Option<&str>, data: Option<Value>) -> ApiResponse {
    with_data(StatusCode::FOUND, pick(message, "Found"), data)
}

/// See Other (303).
pub fn see_other(message: Option<&str>, data: Option<Value>) -> ApiResponse {
    with_data(StatusCode::SEE_OTHER, pick(message, "See Other"), data)
}

/// Not Modified (304). Empty body, no fields.
pub fn not_modified() -> ApiResponse {
    empty(StatusCode::NOT_MODIFIED)
}

/// Use Proxy (305).
pub fn use_proxy(message: Option<&str>, data: Option<Value>) -> ApiResponse {
    with_data(StatusCode::USE_PROXY, pick(message, "Use Proxy"), data)
}

/// Temporary Redirect (307).
pub fn temporary_redirect(message: Option<&str>, data: Option<Value>) -> ApiResponse {
    with_data(
        StatusCode::TEMPORARY_REDIRECT,
        pick(message, "Temporary Redirect"),
        data,
    )
}

/// Permanent Redirect (308).
pub fn permanent_redirect(message: Option<&str>, data: Option<Value>) -> ApiResponse {
    with_data(
        StatusCode::PERMANENT_REDIRECT,
        pick(message, "Permanent Redirect"),
        data,
    )
}
