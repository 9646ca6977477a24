//! Cross-cutting builders: generic errors, custom shapes, pagination,
//! metadata, and the resource lifecycle conveniences.

use axum::http::StatusCode;
use serde_json::Value;

use super::{flagged, pick, with_data};
use crate::response::{ApiResponse, ResponseBody, is_empty_value};

/// Generic failure body at 200, mirroring the success flag convention
/// rather than the transport status.
pub fn error(message: impl Into<String>) -> ApiResponse {
    flagged(StatusCode::OK, false, message.into())
}

/// Generic failure body at a caller-supplied status code.
pub fn error_with_status(message: impl Into<String>, status_code: StatusCode) -> ApiResponse {
    flagged(status_code, false, message.into())
}

/// Fully caller-shaped response. `data` is omitted from the body when
/// absent or empty (`null`, `{}`, `[]`).
pub fn custom(
    status: bool,
    message: impl Into<String>,
    data: Option<Value>,
    status_code: StatusCode,
) -> ApiResponse {
    ApiResponse::new(
        status_code,
        ResponseBody {
            status: Some(status),
            message: Some(message.into()),
            data: data.filter(|value| !is_empty_value(value)),
            ..ResponseBody::default()
        },
    )
}

/// Paginated listing (200). `data` is always present; `pagination` is
/// omitted when absent or empty.
pub fn paginated(
    message: impl Into<String>,
    data: Value,
    pagination: Option<Value>,
) -> ApiResponse {
    ApiResponse::new(
        StatusCode::OK,
        ResponseBody {
            status: Some(true),
            message: Some(message.into()),
            data: Some(data),
            pagination: pagination.filter(|value| !is_empty_value(value)),
            ..ResponseBody::default()
        },
    )
}

/// Success (200) with additional metadata. `data` defaults to an empty
/// object; `meta` is omitted when absent or empty.
pub fn with_meta(message: impl Into<String>, data: Option<Value>, meta: Option<Value>) -> ApiResponse {
    ApiResponse::new(
        StatusCode::OK,
        ResponseBody {
            status: Some(true),
            message: Some(message.into()),
            data: Some(data.unwrap_or_else(|| Value::Object(Default::default()))),
            meta: meta.filter(|value| !is_empty_value(value)),
            ..ResponseBody::default()
        },
    )
}

/// Resource updated (200).
pub fn updated(message: impl Into<String>, data: Option<Value>) -> ApiResponse {
    with_data(StatusCode::OK, message.into(), data)
}

/// Resource deleted (200).
pub fn deleted(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::OK,
        true,
        pick(message, "Resource deleted successfully."),
    )
}
