//! 1xx informational builders.

use axum::http::StatusCode;

use super::{flagged, pick};
use crate::response::ApiResponse;

/// Continue (100).
pub fn continue_(message: Option<&str>) -> ApiResponse {
    flagged(StatusCode::CONTINUE, true, pick(message, "Continue"))
}

/// Switching Protocols (101).
pub fn switching_protocols(message: Option<&str>) -> ApiResponse {
    flagged(
        StatusCode::SWITCHING_PROTOCOLS,
        true,
        pick(message, "Switching Protocols"),
    )
}

/// Processing (102).
pub fn processing(message: Option<&str>) -> ApiResponse {
    flagged(StatusCode::PROCESSING, true, pick(message, "Processing"))
}

/// Early Hints (103).
pub fn early_hints(message: Option<&str>) -> ApiResponse {
    // 103 has no named constant in `http`; the code is within the valid range.
    let code = StatusCode::from_u16(103).expect("103 is a valid status code");
    flagged(code, true, pick(message, "Early Hints"))
}
