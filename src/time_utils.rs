// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use crate::error::{Result, WakatimeError};
use chrono::Local;

const SECONDS_PER_MINUTE: f64 = 60.0;
const MINUTES_PER_HOUR: u64 = 60;

/// Current local date as `YYYY-MM-DD`, the format WakaTime expects for `date`.
pub fn today_local() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Round a number of seconds to the nearest whole minute.
///
/// Rounds directly from float seconds, half away from zero: 89.6s is
/// 1 minute and 90.0s is 2 minutes.
pub fn round_to_minutes(seconds: f64) -> Result<u64> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(WakatimeError::InvalidDuration(seconds));
    }

    let minutes = (seconds / SECONDS_PER_MINUTE).round();
    if minutes >= u64::MAX as f64 {
        return Err(WakatimeError::InvalidDuration(seconds));
    }

    Ok(minutes as u64)
}

/// Render a duration in seconds as `"<hours> hour <minutes> minute"`.
///
/// Unit labels stay singular regardless of the value.
pub fn format_duration(seconds: f64) -> Result<String> {
    let total_minutes = round_to_minutes(seconds)?;
    let hours = total_minutes / MINUTES_PER_HOUR;
    let minutes = total_minutes % MINUTES_PER_HOUR;

    Ok(format!("{} hour {} minute", hours, minutes))
}
