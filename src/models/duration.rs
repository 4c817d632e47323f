// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! WakaTime `/durations` response model.

use crate::error::Result;
use serde::{de::IgnoredAny, Deserialize, Deserializer};

/// One logged activity span.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DurationRecord {
    /// Project name, if WakaTime attributed one
    #[serde(default)]
    pub project: Option<String>,
    /// Start of the span (unix seconds)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub time: f64,
    /// Length of the span in seconds
    #[serde(default, deserialize_with = "number_or_zero")]
    pub duration: f64,
}

/// Full decoded `/users/current/durations` payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregateResponse {
    #[serde(default, deserialize_with = "records_or_empty")]
    pub data: Vec<DurationRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub branches: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timezone: String,
}

impl AggregateResponse {
    /// Decode a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Sum of every record's duration, in seconds.
    ///
    /// Durations are added as whole microseconds so the result does not
    /// depend on record order. Values too large for that fall back to a
    /// float sum over the durations sorted by `total_cmp`.
    pub fn total_duration(&self) -> f64 {
        let micros: Option<Vec<i128>> = self
            .data
            .iter()
            .map(|record| to_micros(record.duration))
            .collect();

        match micros {
            Some(micros) => micros.iter().sum::<i128>() as f64 / MICROS_PER_SECOND,
            None => {
                let mut seconds: Vec<f64> = self.data.iter().map(|r| r.duration).collect();
                seconds.sort_by(f64::total_cmp);
                seconds.iter().sum()
            }
        }
    }
}

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Largest magnitude summed as integers; keeps any realistic record count
/// far from `i128` overflow.
const MAX_FIXED_POINT_MICROS: f64 = 1e30;

fn to_micros(seconds: f64) -> Option<i128> {
    let micros = (seconds * MICROS_PER_SECOND).round();
    (micros.is_finite() && micros.abs() <= MAX_FIXED_POINT_MICROS).then_some(micros as i128)
}

/// `null` decodes as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` decodes as 0.0.
fn number_or_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single `data` entry: either a well-formed record or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRecord {
    Record(DurationRecord),
    Malformed(IgnoredAny),
}

/// Decode `data`, turning `null` into an empty list and malformed entries
/// into zero-valued records.
fn records_or_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<DurationRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<RawRecord>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|entry| match entry {
            RawRecord::Record(record) => record,
            RawRecord::Malformed(_) => {
                tracing::debug!("Ignoring malformed duration record");
                DurationRecord::default()
            }
        })
        .collect())
}
