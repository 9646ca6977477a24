//! 4xx client error builders.
//!
//! All of these carry `status: false` and a message, never a data field.

use axum::http::StatusCode;

use super::{flagged, pick};
use crate::response::ApiResponse;

// 425 has no named constant in `http`; the code is within the valid range.
fn too_early_code() -> StatusCode {
    StatusCode::from_u16(425).expect("425 is a valid status code")
}

/// Bad Request (400).
pub fn bad_request(message: Option<&str>) -> ApiResponse {
    flagged(StatusCode::BAD_REQUEST, false, pick(message, "Bad Request"))
}

/// Unauthorized (401).
pub fn unauthorized(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::UNAUTHORIZED,
        false,
        pick(message, "Unauthenticated."),
    )
}

/// Payment Required (402).
pub fn payment_required(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::PAYMENT_REQUIRED,
        false,
        pick(message, "Payment Required"),
    )
}

/// Forbidden (403).
pub fn forbidden(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::FORBIDDEN,
        false,
        pick(message, "Permission denied."),
    )
}

/// Not Found (404).
pub fn not_found(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::NOT_FOUND,
        false,
        pick(message, "Resource not found."),
    )
}

/// Method Not Allowed (405).
pub fn method_not_allowed(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::METHOD_NOT_ALLOWED,
        false,
        pick(message, "Method Not Allowed"),
    )
}

/// Not Acceptable (406).
pub fn not_acceptable(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::NOT_ACCEPTABLE,
        false,
        pick(message, "Not Acceptable"),
    )
}

/// Proxy Authentication Required (407).
pub fn proxy_authentication_required(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::PROXY_AUTHENTICATION_REQUIRED,
        false,
        pick(message, "Proxy Authentication Required"),
    )
}

/// Request Timeout (408).
pub fn request_timeout(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::REQUEST_TIMEOUT,
        false,
        pick(message, "Request Timeout"),
    )
}

/// Conflict (409).
pub fn conflict(message: Option<&str>) -> ApiResponse {
    flagged(StatusCode::CONFLICT, false, pick(message, "Conflict"))
}

/// Gone (410).
pub fn gone(message: Option<&str>) -> ApiResponse {
    flagged(StatusCode::GONE, false, pick(message, "Gone"))
}

/// Length Required (411).
pub fn length_required(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::LENGTH_REQUIRED,
        false,
        pick(message, "Length Required"),
    )
}

/// Precondition Failed (412).
pub fn precondition_failed(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::PRECONDITION_FAILED,
        false,
        pick(message, "Precondition Failed"),
    )
}

/// Payload Too Large (413).
pub fn payload_too_large(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::PAYLOAD_TOO_LARGE,
        false,
        pick(message, "Payload Too Large"),
    )
}

/// URI Too Long (414).
pub fn uri_too_long(message: Option<&str>) -> ApiResponse {
    flagged(StatusCode::URI_TOO_LONG, false, pick(message, "URI Too Long"))
}

/// Unsupported Media Type (415).
pub fn unsupported_media_type(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::UNSUPPORTED_MEDIA_TYPE,
        false,
        pick(message, "Unsupported Media Type"),
    )
}

/// Range Not Satisfiable (416).
pub fn range_not_satisfiable(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::RANGE_NOT_SATISFIABLE,
        false,
        pick(message, "Range Not Satisfiable"),
    )
}

/// Expectation Failed (417).
pub fn expectation_failed(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::EXPECTATION_FAILED,
        false,
        pick(message, "Expectation Failed"),
    )
}

/// I'm a teapot (418).
pub fn im_a_teapot(message: Option<&str>) -> ApiResponse {
    flagged(StatusCode::IM_A_TEAPOT, false, pick(message, "I'm a teapot"))
}

/// Misdirected Request (421).
pub fn misdirected_request(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::MISDIRECTED_REQUEST,
        false,
        pick(message, "Misdirected Request"),
    )
}

/// Unprocessable Entity (422).
pub fn unprocessable_entity(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::UNPROCESSABLE_ENTITY,
        false,
        pick(message, "Unprocessable Entity"),
    )
}

/// Locked (423).
pub fn locked(message: Option<&str>) -> ApiResponse {
    flagged(StatusCode::LOCKED, false, pick(message, "Locked"))
}

/// Failed Dependency (424).
pub fn failed_dependency(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::FAILED_DEPENDENCY,
        false,
        pick(message, "Failed Dependency"),
    )
}

/// Too Early (425).
pub fn too_early(message: Option<&str>) -> ApiResponse {
    flagged(too_early_code(), false, pick(message, "Too Early"))
}

/// Upgrade Required (426).
pub fn upgrade_required(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::UPGRADE_REQUIRED,
        false,
        pick(message, "Upgrade Required"),
    )
}

/// Precondition Required (428).
pub fn precondition_required(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::PRECONDITION_REQUIRED,
        false,
        pick(message, "Precondition Required"),
    )
}

/// Too Many Requests (429).
pub fn too_many_requests(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::TOO_MANY_REQUESTS,
        false,
        pick(message, "Too Many Requests"),
    )
}

/// Request Header Fields Too Large (431).
pub fn request_header_fields_too_large(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE,
        false,
        pick(message, "Request Header Fields Too Large"),
    )
}

/// Unavailable For Legal Reasons (451).
pub fn unavailable_for_legal_reasons(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::UNAVAILABLE_FOR_LEGAL_REASONS,
        false,
        pick(message, "Unavailable For Legal Reasons"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_codes_and_defaults() {
        let cases = [
            (bad_request(None), 400, "Bad Request"),
            (unauthorized(None), 401, "Unauthenticated."),
            (payment_required(None), 402, "Payment Required"),
            (forbidden(None), 403, "Permission denied."),
            (not_found(None), 404, "Resource not found."),
            (method_not_allowed(None), 405, "Method Not Allowed"),
            (not_acceptable(None), 406, "Not Acceptable"),
            (
                proxy_authentication_required(None),
                407,
                "Proxy Authentication Required",
            ),
            (request_timeout(None), 408, "Request Timeout"),
            (conflict(None), 409, "Conflict"),
            (gone(None), 410, "Gone"),
            (length_required(None), 411, "Length Required"),
            (precondition_failed(None), 412, "Precondition Failed"),
            (payload_too_large(None), 413, "Payload Too Large"),
            (uri_too_long(None), 414, "URI Too Long"),
            (unsupported_media_type(None), 415, "Unsupported Media Type"),
            (range_not_satisfiable(None), 416, "Range Not Satisfiable"),
            (expectation_failed(None), 417, "Expectation Failed"),
            (im_a_teapot(None), 418, "I'm a teapot"),
            (misdirected_request(None), 421, "Misdirected Request"),
            (unprocessable_entity(None), 422, "Unprocessable Entity"),
            (locked(None), 423, "Locked"),
            (failed_dependency(None), 424, "Failed Dependency"),
            (too_early(None), 425, "Too Early"),
            (upgrade_required(None), 426, "Upgrade Required"),
            (precondition_required(None), 428, "Precondition Required"),
            (too_many_requests(None), 429, "Too Many Requests"),
            (
                request_header_fields_too_large(None),
                431,
                "Request Header Fields Too Large",
            ),
            (
                unavailable_for_legal_reasons(None),
                451,
                "Unavailable For Legal Reasons",
            ),
        ];
        for (response, code, message) in cases {
            assert_eq!(response.status_code().as_u16(), code);
            assert_eq!(response.body().status, Some(false));
            assert_eq!(response.body().message.as_deref(), Some(message));
            assert!(response.body().data.is_none());
        }
    }

    #[test]
    fn test_message_override() {
        let response = not_found(Some("User not found"));
        assert_eq!(response.body().message.as_deref(), Some("User not found"));
    }
}
