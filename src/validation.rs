//! Adapter between [`validator::ValidationErrors`] and the
//! validation-failure response shape.
//!
//! The body carries the first violated rule's message plus the full
//! field-to-messages map under `errors`, always at 422.

use axum::http::StatusCode;
use serde_json::{Map, Value};
use validator::{ValidationError, ValidationErrors};

use crate::response::{ApiResponse, ResponseBody};

const FALLBACK_MESSAGE: &str = "The given data was invalid.";

/// Validation failure (422) from a [`ValidationErrors`] report.
///
/// Fields are ordered by name so the headline message is deterministic
/// regardless of hash-map iteration order. Only top-level field errors
/// are reported; nested struct errors stay with their collaborator.
pub fn validation_error(errors: &ValidationErrors) -> ApiResponse {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| (field.to_string(), messages(errs)))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let first = fields
        .iter()
        .find_map(|(_, msgs)| msgs.first().cloned())
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());

    let mut map = Map::new();
    for (field, msgs) in fields {
        map.insert(
            field,
            Value::Array(msgs.into_iter().map(Value::String).collect()),
        );
    }

    ApiResponse::new(
        StatusCode::UNPROCESSABLE_ENTITY,
        ResponseBody {
            status: Some(false),
            message: Some(first),
            errors: Some(map),
            ..ResponseBody::default()
        },
    )
}

/// Alias of [`validation_error`].
pub fn validation_failure(errors: &ValidationErrors) -> ApiResponse {
    validation_error(errors)
}

fn messages(errs: &[ValidationError]) -> Vec<String> {
    errs.iter()
        .map(|err| match &err.message {
            Some(message) => message.to_string(),
            None => err.code.to_string(),
        })
        .collect()
}
