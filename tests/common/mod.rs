// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use wakatime_today::config::Config;
use wakatime_today::services::WakatimeClient;

pub const DURATIONS_PATH: &str = "/api/v1/users/current/durations";

/// What the stand-in WakaTime server saw on each request.
#[derive(Debug, Clone, Default)]
pub struct SeenRequest {
    pub query: HashMap<String, String>,
    pub headers: HashMap<String, String>,
}

pub type Seen = Arc<Mutex<Vec<SeenRequest>>>;

#[derive(Clone)]
struct FakeWakatime {
    status: StatusCode,
    body: &'static str,
    seen: Seen,
}

async fn durations(
    State(fake): State<FakeWakatime>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, &'static str) {
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    fake.seen
        .lock()
        .unwrap()
        .push(SeenRequest { query, headers });

    (fake.status, fake.body)
}

/// Start a stand-in WakaTime server that answers the durations endpoint
/// with a fixed status and body.
/// Returns the client config pointing at it and the log of seen requests.
#[allow(dead_code)]
pub async fn spawn_fake_wakatime(status: StatusCode, body: &'static str) -> (Config, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route(DURATIONS_PATH, get(durations))
        .with_state(FakeWakatime {
            status,
            body,
            seen: seen.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server failed");
    });

    (config_for(addr), seen)
}

/// Start a raw TCP server that promises a 1000-byte body, sends a few
/// bytes of it, then closes the connection.
#[allow(dead_code)]
pub async fn spawn_truncated_body_server() -> Config {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Accept failed");

        let mut request: Vec<u8> = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("Read failed");
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }

        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1000\r\n\r\n{\"data\": [")
            .await
            .expect("Write failed");
        socket.shutdown().await.ok();
    });

    config_for(addr)
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    listener.local_addr().expect("Listener has no address")
}

#[allow(dead_code)]
pub fn config_for(addr: SocketAddr) -> Config {
    Config {
        api_key: "waka_test_key".to_string(),
        api_host: format!("http://{}/api/v1", addr),
    }
}

#[allow(dead_code)]
pub fn test_client(config: Config) -> WakatimeClient {
    WakatimeClient::new(config)
}
