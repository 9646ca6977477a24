//! Response logging decorator.
//!
//! [`ApiResponse::log`] records a response's status code and body through
//! `tracing` and hands the value back unchanged, so it chains after any
//! builder without touching what reaches the transport layer.

use serde_json::{Map, Value};
use tracing::Level;

use axum::http::StatusCode;

use crate::response::ApiResponse;

/// Default channel name when the caller does not supply one.
const DEFAULT_CHANNEL: &str = "response";

/// Default log line when the caller does not supply one.
const DEFAULT_MESSAGE: &str = "API response";

/// Optional knobs for [`ApiResponse::log_with`].
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    channel: Option<String>,
    level: Option<Level>,
    message: Option<String>,
    context: Option<Map<String, Value>>,
}

impl LogOptions {
    /// Start from all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route the record to a named channel.
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Override the status-class level policy.
    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Override the log line.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach caller context to the record.
    pub fn context(mut self, context: Map<String, Value>) -> Self {
        self.context = Some(context);
        self
    }
}

/// Default level policy by status class: 5xx logs at `ERROR`, 4xx at
/// `WARN`, everything else at `INFO`. Callers override it per call via
/// [`LogOptions::level`].
pub fn default_level_for(status_code: StatusCode) -> Level {
    if status_code.is_server_error() {
        Level::ERROR
    } else if status_code.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

impl ApiResponse {
    /// Log this response with all defaults and return it unchanged.
    pub fn log(self) -> Self {
        self.log_with(LogOptions::default())
    }

    /// Log this response and return it unchanged.
    ///
    /// Emits a single structured event carrying the status code, the
    /// serialized body, the channel, and any caller context. Never fails
    /// and never alters the response, including the empty-body kinds.
    pub fn log_with(self, options: LogOptions) -> Self {
        let level = options
            .level
            .unwrap_or_else(|| default_level_for(self.status_code()));
        let channel = options.channel.as_deref().unwrap_or(DEFAULT_CHANNEL);
        let message = options.message.as_deref().unwrap_or(DEFAULT_MESSAGE);
        let body = serde_json::to_string(self.body()).unwrap_or_else(|_| "{}".to_string());
        let context = options
            .context
            .as_ref()
            .map(|map| Value::Object(map.clone()).to_string())
            .unwrap_or_else(|| "{}".to_string());
        let status = self.status_code().as_u16();

        // tracing resolves level metadata per call site, hence the match.
        match level {
            Level::ERROR => {
                tracing::error!(channel, status, body = %body, context = %context, "{message}")
            }
            Level::WARN => {
                tracing::warn!(channel, status, body = %body, context = %context, "{message}")
            }
            Level::INFO => {
                tracing::info!(channel, status, body = %body, context = %context, "{message}")
            }
            Level::DEBUG => {
                tracing::debug!(channel, status, body = %body, context = %context, "{message}")
            }
            _ => {
                tracing::trace!(channel, status, body = %body, context = %context, "{message}")
            }
        }

        self
    }
}
