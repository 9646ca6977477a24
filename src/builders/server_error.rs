//! 5xx server error builders.
//!
//! The 500 builder is the one place the body carries an `error` field:
//! `message` stays fixed at "Something went wrong" and the caller's detail
//! lands in `error`, serialized as an explicit `null` when absent.

use axum::http::StatusCode;
use serde_json::Value;

use super::{flagged, pick};
use crate::response::{ApiResponse, ResponseBody};

/// Internal Server Error (500).
pub fn internal_server_error(error: Option<&str>) -> ApiResponse {
    ApiResponse::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        ResponseBody {
            status: Some(false),
            message: Some("Something went wrong".to_string()),
            error: Some(error.map_or(Value::Null, |detail| Value::String(detail.to_owned()))),
            ..ResponseBody::default()
        },
    )
}

/// Server Error (500). Alias of [`internal_server_error`].
pub fn server_error(error: Option<&str>) -> ApiResponse {
    internal_server_error(error)
}

/// Not Implemented (501).
pub fn not_implemented(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::NOT_IMPLEMENTED,
        false,
        pick(message, "Not Implemented"),
    )
}

/// Bad Gateway (502).
pub fn bad_gateway(message: Option<&str>) -> ApiResponse {
    flagged(StatusCode::BAD_GATEWAY, false, pick(message, "Bad Gateway"))
}

/// Service Unavailable (503).
pub fn service_unavailable(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::SERVICE_UNAVAILABLE,
        false,
        pick(message, "Service Unavailable"),
    )
}

/// Gateway Timeout (504).
pub fn gateway_timeout(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::GATEWAY_TIMEOUT,
        false,
        pick(message, "Gateway Timeout"),
    )
}

/// HTTP Version Not Supported (505).
pub fn http_version_not_supported(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::HTTP_VERSION_NOT_SUPPORTED,
        false,
        pick(message, "HTTP Version Not Supported"),
    )
}

/// Variant Also Negotiates (506).
pub fn variant_also_negotiates(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::VARIANT_ALSO_NEGOTIATES,
        false,
        pick(message, "Variant Also Negotiates"),
    )
}

/// Insufficient Storage (507).
pub fn insufficient_storage(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::INSUFFICIENT_STORAGE,
        false,
        pick(message, "Insufficient Storage"),
    )
}

/// Loop Detected (508).
pub fn loop_detected(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::LOOP_DETECTED,
        false,
        pick(message, "Loop Detected"),
    )
}

/// Not Extended (510).
pub fn not_extended(message: Option<&str>) -> ApiResponse {
    flagged(StatusCode::NOT_EXTENDED, false, pick(message, "Not Extended"))
}

/// Network Authentication Required (511).
pub fn network_authentication_required(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::NETWORK_AUTHENTICATION_REQUIRED,
        false,
        pick(message, "Network Authentication Required"),
    )
}
