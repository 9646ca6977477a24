//! The builder catalog: one pure function per semantic response kind.
//!
//! Builders are grouped by HTTP status class. Each one is total and
//! stateless: absent optional arguments fall back to the kind's default
//! message, and no input can make a builder fail.

mod client_error;
mod informational;
mod redirect;
mod server_error;
mod success;
mod utility;

pub use client_error::*;
pub use informational::*;
pub use redirect::*;
pub use server_error::*;
pub use success::*;
pub use utility::*;

use axum::http::StatusCode;
use serde_json::Value;

use crate::response::{ApiResponse, ResponseBody};

/// Flag-and-message body, no data field. Covers 1xx and the
/// message-only 2xx kinds.
pub(crate) fn flagged(code: StatusCode, flag: bool, message: String) -> ApiResponse {
    ApiResponse::new(
        code,
        ResponseBody {
            status: Some(flag),
            message: Some(message),
            ..ResponseBody::default()
        },
    )
}

/// Success body carrying a data payload. The payload defaults to an empty
/// object and is always included, even when empty.
pub(crate) fn with_data(code: StatusCode, message: String, data: Option<Value>) -> ApiResponse {
    ApiResponse::new(
        code,
        ResponseBody {
            status: Some(true),
            message: Some(message),
            data: Some(data.unwrap_or_else(|| Value::Object(Default::default()))),
            ..ResponseBody::default()
        },
    )
}

/// Body with every field unset. Serializes to `{}`, goes out with no body.
pub(crate) fn empty(code: StatusCode) -> ApiResponse {
    ApiResponse::new(code, ResponseBody::default())
}

pub(crate) fn pick(message: Option<&str>, default: &str) -> String {
    message.unwrap_or(default).to_owned()
}
