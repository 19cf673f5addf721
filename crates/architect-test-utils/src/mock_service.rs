// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock generation service for deterministic testing.
//!
//! `MockService` implements `GenerationService` with pre-configured replies,
//! enabling fast tests without a running backend.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, Semaphore};

use architect_core::{ArchitectError, GenerationRequest, GenerationResult, GenerationService};

use crate::fixtures;

type Reply = Result<GenerationResult, ArchitectError>;

/// A mock generation service that returns pre-configured replies.
///
/// Replies are popped from a FIFO queue. When the queue is empty,
/// [`fixtures::login_card_result`] is returned.
pub struct MockService {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
    gate: Option<Arc<Semaphore>>,
}

/// Releases gated calls one at a time.
#[derive(Clone)]
pub struct MockGate {
    permits: Arc<Semaphore>,
}

impl MockGate {
    /// Let one blocked (or future) `generate` call proceed.
    pub fn open_one(&self) {
        self.permits.add_permits(1);
    }
}

impl MockService {
    /// Create a mock service with an empty reply queue.
    pub fn new() -> Self {
        Self::with_replies(Vec::new())
    }

    /// Create a mock service pre-loaded with the given replies.
    pub fn with_replies(replies: Vec<Reply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            requests: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// Block every call until the returned gate releases it.
    pub fn gated(mut self) -> (Self, MockGate) {
        let permits = Arc::new(Semaphore::new(0));
        self.gate = Some(permits.clone());
        (self, MockGate { permits })
    }

    pub async fn push_reply(&self, reply: Reply) {
        self.replies.lock().await.push_back(reply);
    }

    /// Requests received so far, in arrival order.
    pub async fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    async fn next_reply(&self) -> Reply {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(fixtures::login_card_result()))
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationService for MockService {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult, ArchitectError> {
        self.requests.lock().await.push(request);

        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|e| ArchitectError::Internal(format!("mock gate closed: {e}")))?
                .forget();
        }

        self.next_reply().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use architect_core::SessionId;

    fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest {
            prompt: prompt.to_string(),
            session_id: SessionId("session_mock".into()),
        }
    }

    #[tokio::test]
    async fn default_reply_when_queue_empty() {
        let service = MockService::new();
        let result = service.generate(request("x")).await.unwrap();
        assert_eq!(result, fixtures::login_card_result());
    }

    #[tokio::test]
    async fn queued_replies_returned_in_order() {
        let service = MockService::with_replies(vec![
            Ok(fixtures::result_with_template("first")),
            Err(fixtures::service_error(500)),
        ]);

        assert_eq!(service.generate(request("a")).await.unwrap().template, "first");
        assert!(matches!(
            service.generate(request("b")).await,
            Err(ArchitectError::Service { status: 500, .. })
        ));
        // Queue exhausted, falls back to default
        assert_eq!(service.generate(request("c")).await.unwrap().template, "<div></div>");

        let prompts: Vec<String> = service.requests().await.into_iter().map(|r| r.prompt).collect();
        assert_eq!(prompts, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn push_reply_after_construction() {
        let service = MockService::new();
        service.push_reply(Ok(fixtures::failing_result())).await;
        let result = service.generate(request("x")).await.unwrap();
        assert!(!result.success);
        assert_eq!(result.iteration_count, 3);
    }

    #[tokio::test]
    async fn gated_call_waits_for_permit() {
        let (service, gate) = MockService::new().gated();
        let service = Arc::new(service);

        let call = tokio::spawn({
            let service = service.clone();
            async move { service.generate(request("x")).await }
        });

        tokio::task::yield_now().await;
        assert!(!call.is_finished());

        gate.open_one();
        assert!(call.await.unwrap().is_ok());
    }
}
