//! Integration tests for the builder catalog and its wire shape.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{Value, json};

use axum_respond::{
    ApiResponse, accepted, bad_request, created, custom, deleted, error, error_with_status,
    no_content, not_found, not_modified, ok, paginated, reset_content, server_error, success,
    success_message, unauthorized, updated, with_meta,
};

fn body_json(response: &ApiResponse) -> Value {
    serde_json::to_value(response.body()).unwrap()
}

#[test]
fn created_scenario_matches_wire_contract() {
    let response = created(
        "User created successfully",
        Some(json!({"id": 1, "name": "John Doe"})),
    );

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(
        body_json(&response),
        json!({
            "status": true,
            "message": "User created successfully",
            "data": {"id": 1, "name": "John Doe"}
        })
    );
}

#[test]
fn paginated_scenario_omits_missing_pagination() {
    let response = paginated("Users retrieved successfully", json!({"users": []}), None);

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        body_json(&response),
        json!({
            "status": true,
            "message": "Users retrieved successfully",
            "data": {"users": []}
        })
    );
}

#[test]
fn paginated_includes_supplied_pagination() {
    let response = paginated(
        "Users retrieved successfully",
        json!({"users": [{"id": 1}]}),
        Some(json!({"current_page": 1, "per_page": 10, "total": 100})),
    );

    let body = body_json(&response);
    assert_eq!(body["pagination"]["total"], json!(100));
    assert_eq!(body["data"]["users"][0]["id"], json!(1));
}

#[test]
fn success_includes_explicit_empty_data() {
    for response in [
        ok(None, Some(json!({}))),
        success("Done", Some(json!({}))),
        accepted(None, Some(json!({}))),
        updated("Updated", Some(json!({}))),
    ] {
        let body = body_json(&response);
        assert_eq!(body["data"], json!({}), "data must be present: {body}");
    }
}

#[test]
fn custom_with_meta_and_paginated_omit_empty_values() {
    assert!(
        !body_json(&custom(true, "ok", Some(json!({})), StatusCode::OK))
            .as_object()
            .unwrap()
            .contains_key("data")
    );
    assert!(
        !body_json(&with_meta("ok", None, Some(json!({}))))
            .as_object()
            .unwrap()
            .contains_key("meta")
    );
    assert!(
        !body_json(&paginated("ok", json!([]), Some(json!([]))))
            .as_object()
            .unwrap()
            .contains_key("pagination")
    );
}

#[test]
fn empty_body_builders_have_no_keys() {
    for (response, code) in [
        (no_content(), 204),
        (reset_content(), 205),
        (not_modified(), 304),
    ] {
        assert_eq!(response.status_code().as_u16(), code);
        assert_eq!(body_json(&response), json!({}));
    }
}

#[test]
fn error_defaults_to_200_with_failure_body() {
    let response = error("X");
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(body_json(&response), json!({"status": false, "message": "X"}));

    let response = error_with_status("X", StatusCode::BAD_REQUEST);
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(&response), json!({"status": false, "message": "X"}));
}

#[test]
fn server_error_keeps_fixed_message_and_nullable_detail() {
    assert_eq!(
        body_json(&server_error(None)),
        json!({"status": false, "message": "Something went wrong", "error": null})
    );
    assert_eq!(
        body_json(&server_error(Some("db down"))),
        json!({"status": false, "message": "Something went wrong", "error": "db down"})
    );
}

#[test]
fn client_errors_have_no_data_field() {
    for response in [
        bad_request(None),
        unauthorized(None),
        not_found(Some("User not found")),
    ] {
        let body = body_json(&response);
        assert_eq!(body["status"], json!(false));
        assert!(!body.as_object().unwrap().contains_key("data"));
    }
}

#[test]
fn success_message_and_deleted_are_message_only() {
    let body = body_json(&success_message("Password changed"));
    assert_eq!(body, json!({"status": true, "message": "Password changed"}));

    let body = body_json(&deleted(None));
    assert_eq!(
        body,
        json!({"status": true, "message": "Resource deleted successfully."})
    );
}

#[tokio::test]
async fn into_response_preserves_status_and_body() {
    let response = created("User created successfully", Some(json!({"id": 1}))).into_response();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let decoded: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        decoded,
        json!({
            "status": true,
            "message": "User created successfully",
            "data": {"id": 1}
        })
    );
}

#[tokio::test]
async fn into_response_sends_no_body_for_no_content() {
    let response = no_content().into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}
