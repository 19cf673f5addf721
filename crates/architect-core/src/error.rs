// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Architect client.

use thiserror::Error;

/// The primary error type used across the session, client, and presentation crates.
#[derive(Debug, Error)]
pub enum ArchitectError {
    /// Empty or whitespace-only prompt. Rejected before any state mutation.
    #[error("prompt must not be empty")]
    InvalidInput,

    /// A submit was attempted while another generation is still pending.
    #[error("a generation request is already in flight")]
    RequestInFlight,

    /// Rollback was requested on an empty conversation log.
    #[error("conversation log is empty")]
    EmptyLog,

    /// Network-level failure reaching the generation service (includes timeouts).
    #[error("could not reach generation service: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The generation service answered with a non-success status.
    #[error("API error {status}{}", format_body(.body))]
    Service { status: u16, body: String },

    /// Success status, but the body does not match the expected result shape.
    #[error("malformed response from generation service: {message}")]
    MalformedResponse {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors (bad URL, invalid header values, missing settings).
    #[error("configuration error: {0}")]
    Config(String),

    /// Writing an exported artifact or copying it to the clipboard failed.
    #[error("export failed: {message}")]
    Export {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ArchitectError {
    /// True for the two submit rejections that never reach the network.
    ///
    /// Callers ignore these silently: the submit affordance is disabled in
    /// both situations.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::InvalidInput | Self::RequestInFlight)
    }

    /// True for failures raised by a generation call once it was issued.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Service { .. } | Self::MalformedResponse { .. }
        )
    }
}

fn format_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}
