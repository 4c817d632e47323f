// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for fetching and summarizing WakaTime durations.

use reqwest::StatusCode;

/// Everything that can go wrong between building the request and
/// rendering the final duration string.
#[derive(Debug, thiserror::Error)]
pub enum WakatimeError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("NOT OK {0}")]
    HttpStatus(StatusCode),

    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Duration cannot be represented: {0} seconds")]
    InvalidDuration(f64),
}

impl WakatimeError {
    /// Short, stable name of the failure mode, suitable for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            WakatimeError::InvalidUrl { .. } => "invalid-url",
            WakatimeError::InvalidRequest(_) => "invalid-request",
            WakatimeError::Transport(_) => "transport",
            WakatimeError::HttpStatus(_) => "http-status",
            WakatimeError::BodyRead(_) => "body-read",
            WakatimeError::Decode(_) => "decode",
            WakatimeError::InvalidDuration(_) => "invalid-duration",
        }
    }

    /// True for failures that happened before the body was interpreted.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            WakatimeError::InvalidUrl { .. }
                | WakatimeError::InvalidRequest(_)
                | WakatimeError::Transport(_)
                | WakatimeError::HttpStatus(_)
                | WakatimeError::BodyRead(_)
        )
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, WakatimeError>;
