// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the generation service.
//!
//! Provides [`GenerationClient`] which handles request construction, the
//! request timeout, status classification, and optional retry of transient
//! statuses.

use std::time::Duration;

use architect_core::ArchitectError;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::types::{ApiErrorBody, GenerateBody, GenerateResponse};

/// HTTP client for `POST {base_url}/generate`.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    max_retries: u32,
    retry_delay: Duration,
}

impl GenerationClient {
    /// Creates a client for the service rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration, max_retries: u32) -> Result<Self, ArchitectError> {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers.insert("accept", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ArchitectError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/generate", base_url.trim_end_matches('/')),
            timeout,
            max_retries,
            retry_delay: Duration::from_secs(1),
        })
    }

    /// Overrides the pause between retries of a transient status.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// The full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one generation request and decodes the success body.
    ///
    /// Transient statuses (429, 500, 503, 529) are retried up to
    /// `max_retries` times; everything else fails immediately.
    pub async fn generate(&self, body: &GenerateBody) -> Result<GenerateResponse, ArchitectError> {
        let mut attempt = 0;

        loop {
            let response = self
                .client
                .post(&self.endpoint)
                .json(body)
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;

            let status = response.status();
            debug!(status = %status, attempt, "generation response received");

            if status.is_success() {
                let text = response.text().await.map_err(|e| self.transport_error(e))?;
                return serde_json::from_str::<GenerateResponse>(&text).map_err(|e| {
                    ArchitectError::MalformedResponse {
                        message: format!("failed to parse generation response: {e}"),
                        source: Some(Box::new(e)),
                    }
                });
            }

            let text = response.text().await.unwrap_or_else(|e| {
                debug!(status = %status, error = %e, "could not read error response body");
                String::new()
            });

            if is_transient_error(status) && attempt < self.max_retries {
                attempt += 1;
                warn!(status = %status, attempt, "transient error from generation service, retrying");
                tokio::time::sleep(self.retry_delay).await;
                continue;
            }

            let body = match serde_json::from_str::<ApiErrorBody>(&text) {
                Ok(api_err) => api_err.detail,
                Err(_) => text,
            };
            return Err(ArchitectError::Service {
                status: status.as_u16(),
                body,
            });
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> ArchitectError {
        let message = if e.is_timeout() {
            format!("request timed out after {:?}", self.timeout)
        } else {
            format!("HTTP request failed: {e}")
        };
        ArchitectError::Transport {
            message,
            source: Some(Box::new(e)),
        }
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503 | 529)
}
