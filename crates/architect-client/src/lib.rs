// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generation service adapters for the Architect client.
//!
//! [`HttpGenerationService`] implements [`GenerationService`] against the
//! remote `POST /generate` endpoint; [`DemoService`] answers offline with a
//! canned component. [`build_service`] picks one from configuration.

pub mod client;
pub mod demo;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use architect_config::model::{ServiceConfig, ServiceMode};
use architect_core::{ArchitectError, GenerationRequest, GenerationResult, GenerationService};
use async_trait::async_trait;
use tracing::info;

pub use crate::client::GenerationClient;
pub use crate::demo::DemoService;
use crate::types::GenerateBody;

/// Remote generation service reached over HTTP.
pub struct HttpGenerationService {
    client: GenerationClient,
}

impl HttpGenerationService {
    /// Creates the service from the `[service]` config section.
    pub fn new(config: &ServiceConfig) -> Result<Self, ArchitectError> {
        let client = GenerationClient::new(
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
            config.max_retries,
        )?;

        info!(endpoint = client.endpoint(), "generation service client initialized");

        Ok(Self { client })
    }

    /// Creates a service around an existing client.
    pub fn with_client(client: GenerationClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GenerationService for HttpGenerationService {
    fn name(&self) -> &str {
        "http"
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResult, ArchitectError> {
        let body = GenerateBody {
            prompt: request.prompt,
            session_id: request.session_id.0,
        };
        let response = self.client.generate(&body).await?;
        GenerationResult::try_from(response)
    }
}

/// Builds the configured backend.
pub fn build_service(config: &ServiceConfig) -> Result<Arc<dyn GenerationService>, ArchitectError> {
    match config.mode {
        ServiceMode::Live => Ok(Arc::new(HttpGenerationService::new(config)?)),
        ServiceMode::Demo => {
            info!("demo mode: canned output, no network calls");
            Ok(Arc::new(DemoService::new(Duration::from_millis(
                config.demo_latency_ms,
            ))))
        }
    }
}
