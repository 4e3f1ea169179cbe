// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Health probe configuration and execution.
//!
//! A probe is a single GET request against a health endpoint. The
//! response must be an HTTP 2xx with a JSON body; anything else is a
//! failure with a typed reason. There is no retry: one call, one
//! outcome.

use std::time::Duration;

use log::debug;
use serde_json::Value;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::report::HealthReport;

/// Configuration for a health probe.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Full URL of the health endpoint.
    pub url: String,
    /// Optional request timeout. `None` lets the request run until the
    /// transport gives up or the probe is cancelled.
    pub timeout: Option<Duration>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080/api/v1/health".to_string(),
            timeout: None,
        }
    }
}

/// Errors that can occur during a health probe.
///
/// Every variant renders to a single "health check failed" display state
/// for the user; the variants exist so the reason can be logged.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status code.
    #[error("unexpected HTTP status: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The response body was not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The probe was cancelled before a response arrived.
    #[error("probe cancelled")]
    Cancelled,
}

/// Issue a single health probe and decode the response.
///
/// Returns a [`HealthReport`] on an HTTP 2xx response with a JSON body,
/// or a [`ProbeError`] describing why the check failed.
pub async fn check(config: &ProbeConfig) -> Result<HealthReport, ProbeError> {
    debug!("Probing health endpoint {}", config.url);

    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    let response = client.get(&config.url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProbeError::HttpStatus(status));
    }

    let body = response.text().await?;
    let payload: Value = serde_json::from_str(&body)?;

    Ok(HealthReport::new(payload))
}

/// Issue a single health probe bound to a cancellation token.
///
/// If the token is cancelled before the response arrives the in-flight
/// request is dropped and the probe resolves with
/// [`ProbeError::Cancelled`], so a caller torn down mid-request never
/// observes a late result.
pub async fn check_with_cancel(
    config: &ProbeConfig,
    cancel: CancellationToken,
) -> Result<HealthReport, ProbeError> {
    tokio::select! {
        () = cancel.cancelled() => Err(ProbeError::Cancelled),
        result = check(config) => result,
    }
}
