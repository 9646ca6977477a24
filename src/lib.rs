//! # axum-respond
//!
//! Standardized JSON API responses for Axum services: a catalog of pure
//! builder functions covering the HTTP status catalog (1xx through 5xx
//! plus pagination/metadata/validation utilities), and a chainable
//! logging decorator built on `tracing`.
//!
//! Every builder returns an immutable [`ApiResponse`] pairing a status
//! code with a [`ResponseBody`] record. The value implements
//! `axum::response::IntoResponse`, so handlers can return it directly:
//!
//! ```
//! use axum_respond::created;
//! use serde_json::json;
//!
//! let response = created(
//!     "User created successfully",
//!     Some(json!({"id": 1, "name": "John Doe"})),
//! )
//! .log();
//! assert_eq!(response.status_code().as_u16(), 201);
//! ```

pub mod builders;
pub mod log;
pub mod response;
pub mod validation;

pub use builders::*;
pub use log::{LogOptions, default_level_for};
pub use response::{ApiResponse, ResponseBody};
pub use validation::{validation_error, validation_failure};
