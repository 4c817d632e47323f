// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! WakaTime API client.
//!
//! Handles:
//! - URL construction with query merging
//! - The single `/users/current/durations` call
//! - Status checking (anything but 200 is a failure, no retry)

use crate::config::Config;
use crate::error::{Result, WakatimeError};
use crate::models::AggregateResponse;
use crate::time_utils;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{StatusCode, Url};
use std::collections::BTreeMap;
use std::future::Future;

/// Durations endpoint for the authenticated user.
const DURATIONS_ENDPOINT: &str = "/users/current/durations";

/// Something that can report today's coding time as display text.
pub trait DurationSource {
    /// Today's total, formatted as `"<hours> hour <minutes> minute"`.
    fn current_duration(&self) -> impl Future<Output = Result<String>> + Send;
}

/// WakaTime API client.
#[derive(Clone)]
pub struct WakatimeClient {
    http: reqwest::Client,
    host: String,
    api_key: String,
}

impl WakatimeClient {
    /// Create a new client from loaded configuration.
    pub fn new(config: Config) -> Self {
        Self::with_http(config, reqwest::Client::new())
    }

    /// Create a client that reuses an existing `reqwest::Client`.
    pub fn with_http(config: Config, http: reqwest::Client) -> Self {
        Self {
            http,
            host: config.api_host,
            api_key: config.api_key,
        }
    }

    /// Fetch and decode durations for a `YYYY-MM-DD` date.
    pub async fn durations_for(&self, date: &str) -> Result<AggregateResponse> {
        let params = [("api_key", self.api_key.as_str()), ("date", date)];
        let body = self.get_bytes(DURATIONS_ENDPOINT, &params, &[]).await?;

        let response = AggregateResponse::from_slice(&body)?;
        tracing::debug!(
            records = response.data.len(),
            timezone = %response.timezone,
            "Durations decoded"
        );
        Ok(response)
    }

    /// Issue a GET against `host + endpoint` and return the raw body.
    ///
    /// `params` are merged into any query string already on the URL, with
    /// the caller's value winning when a key appears in both.
    pub async fn get_bytes(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<Bytes> {
        let url = self.build_url(endpoint, params)?;
        let headers = build_headers(headers)?;

        tracing::debug!(endpoint, "Sending WakaTime request");

        let response = self
            .http
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(WakatimeError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), endpoint, "WakaTime returned non-200");
            return Err(WakatimeError::HttpStatus(status));
        }

        response.bytes().await.map_err(WakatimeError::BodyRead)
    }

    /// Parse `host + endpoint` and merge `params` into its query string.
    pub fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}{}", self.host, endpoint);
        let mut url = Url::parse(&raw).map_err(|e| WakatimeError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        let mut query: BTreeMap<String, String> = url.query_pairs().into_owned().collect();
        for (key, value) in params {
            query.insert((*key).to_string(), (*value).to_string());
        }

        url.query_pairs_mut().clear().extend_pairs(&query);
        if query.is_empty() {
            url.set_query(None);
        }
        Ok(url)
    }
}

impl DurationSource for WakatimeClient {
    async fn current_duration(&self) -> Result<String> {
        let response = self.durations_for(&time_utils::today_local()).await?;
        time_utils::format_duration(response.total_duration())
    }
}

fn build_headers(headers: &[(&str, &str)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| WakatimeError::InvalidRequest(format!("header name {}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| WakatimeError::InvalidRequest(format!("header {}: {}", name, e)))?;
        map.append(name, value);
    }
    Ok(map)
}
