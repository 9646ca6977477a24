//! 2xx success builders.
//!
//! The data-carrying kinds default `data` to an empty object and always
//! include it; `no_content` and `reset_content` produce an empty body.

use axum::http::StatusCode;
use serde_json::Value;

use super::{empty, flagged, pick, with_data};
use crate::response::ApiResponse;

/// OK (200).
pub fn ok(message: Option<&str>, data: Option<Value>) -> ApiResponse {
    with_data(StatusCode::OK, pick(message, "OK"), data)
}

/// Success (200) with a required message.
pub fn success(message: impl Into<String>, data: Option<Value>) -> ApiResponse {
    with_data(StatusCode::OK, message.into(), data)
}

/// Success (200) with a message and no data field.
pub fn success_message(message: impl Into<String>) -> ApiResponse {
    flagged(StatusCode::OK, true, message.into())
}

/// Created (201).
pub fn created(message: impl Into<String>, data: Option<Value>) -> ApiResponse {
    with_data(StatusCode::CREATED, message.into(), data)
}

/// Accepted (202).
pub fn accepted(message: Option<&str>, data: Option<Value>) -> ApiResponse {
    with_data(StatusCode::ACCEPTED, pick(message, "Accepted"), data)
}

/// Non-Authoritative Information (203).
pub fn non_authoritative_information(message: Option<&str>, data: Option<Value>) -> ApiResponse {
    with_data(
        StatusCode::NON_AUTHORITATIVE_INFORMATION,
        pick(message, "Non-Authoritative Information"),
        data,
    )
}

/// No Content (204). Empty body, no fields.
pub fn no_content() -> ApiResponse {
    empty(StatusCode::NO_CONTENT)
}

/// Reset Content (205). Empty body, no fields.
pub fn reset_content() -> ApiResponse {
    empty(StatusCode::RESET_CONTENT)
}

/// Partial Content (206).
pub fn partial_content(message: Option<&str>, data: Option<Value>) -> ApiResponse {
    with_data(
        StatusCode::PARTIAL_CONTENT,
        pick(message, "Partial Content"),
        data,
    )
}

/// Multi-Status (207).
pub fn multi_status(message: Option<&str>, data: Option<Value>) -> ApiResponse {
    with_data(StatusCode::MULTI_STATUS, pick(message, "Multi-Status"), data)
}

/// Already Reported (208).
pub fn already_reported(message: Option<&str>, data: Option<Value>) -> ApiResponse {
    with_data(
        StatusCode::ALREADY_REPORTED,
        pick(message, "Already Reported"),
        data,
    )
}

/// IM Used (226).
pub fn im_used(message: Option<&str>, data: Option<Value>) -> ApiResponse {
    with_data(StatusCode::IM_USED, pick(message, "IM Used"), data)
}
