// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! wakatime-today CLI
//!
//! Prints today's WakaTime coding time on stdout. Diagnostics go to stderr
//! as structured JSON; the exit code is always 0.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wakatime_today::{config::Config, services::WakatimeClient, FALLBACK};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let line = match Config::from_env() {
        Ok(config) => {
            tracing::debug!(host = %config.api_host, "Configuration loaded");
            let client = WakatimeClient::new(config);
            wakatime_today::report(&client).await
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to load configuration");
            FALLBACK.to_string()
        }
    };

    println!("{}", line);
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wakatime_today=info,warn"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
