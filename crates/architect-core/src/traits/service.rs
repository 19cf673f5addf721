// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generation service trait (remote HTTP service, offline demo, test mocks).

use async_trait::async_trait;

use crate::error::ArchitectError;
use crate::types::{GenerationRequest, GenerationResult};

/// The remote service that turns a prompt into a validated component.
///
/// Implementations report every failure as one of
/// [`ArchitectError::Transport`], [`ArchitectError::Service`] or
/// [`ArchitectError::MalformedResponse`]; the controller treats all three
/// identically.
#[async_trait]
pub trait GenerationService: Send + Sync + 'static {
    /// Returns the human-readable name of this service (for logs).
    fn name(&self) -> &str;

    /// Runs one generation cycle for the given prompt and session.
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResult, ArchitectError>;
}
