// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API client layer.

pub mod wakatime;

pub use wakatime::{DurationSource, WakatimeClient};
