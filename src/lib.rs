// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! wakatime-today: print today's WakaTime coding time
//!
//! This crate fetches the current user's durations for today from the
//! WakaTime API and renders the total as "H hour M minute".

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

use services::DurationSource;

/// Text printed when today's duration is unavailable.
pub const FALLBACK: &str = "n/a";

/// Ask `source` for today's duration and turn any failure into [`FALLBACK`].
///
/// Failures are logged with their kind; the caller only sees display text.
pub async fn report<S: DurationSource>(source: &S) -> String {
    match source.current_duration().await {
        Ok(duration) => duration,
        Err(err) => {
            let stage = if err.is_fetch_error() { "fetch" } else { "content" };
            tracing::error!(stage, kind = err.kind(), error = %err, "Duration unavailable");
            FALLBACK.to_string()
        }
    }
}
