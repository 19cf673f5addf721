// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end session testing.
//!
//! `TestHarness` wires a [`GenerationController`] to a [`MockService`] and a
//! [`MockSink`], so tests drive whole generation cycles through the same
//! entry points the shell uses.

use std::sync::Arc;

use architect_core::{ArchitectError, GenerationResult, SessionId};
use architect_session::{CycleOutcome, GenerationController};

use crate::mock_service::{MockGate, MockService};
use crate::mock_sink::MockSink;

type Reply = Result<GenerationResult, ArchitectError>;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    replies: Vec<Reply>,
    session_id: Option<SessionId>,
    gated: bool,
    failing_sink: bool,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            replies: Vec::new(),
            session_id: None,
            gated: false,
            failing_sink: false,
        }
    }

    /// Set mock service replies.
    pub fn with_replies(mut self, replies: Vec<Reply>) -> Self {
        self.replies = replies;
        self
    }

    /// Pin the session id instead of generating one.
    pub fn with_session_id(mut self, id: &str) -> Self {
        self.session_id = Some(SessionId(id.to_string()));
        self
    }

    /// Hold every generation call until [`TestHarness::gate`] releases it.
    pub fn gated(mut self) -> Self {
        self.gated = true;
        self
    }

    pub fn with_failing_sink(mut self) -> Self {
        self.failing_sink = true;
        self
    }

    pub fn build(self) -> TestHarness {
        let service = MockService::with_replies(self.replies);
        let (service, gate) = if self.gated {
            let (service, gate) = service.gated();
            (service, Some(gate))
        } else {
            (service, None)
        };
        let service = Arc::new(service);

        let session_id = self.session_id.unwrap_or_else(SessionId::generate);
        let controller = Arc::new(GenerationController::with_session_id(
            service.clone(),
            session_id,
        ));

        let sink = Arc::new(if self.failing_sink {
            MockSink::failing()
        } else {
            MockSink::new()
        });

        TestHarness {
            service,
            sink,
            controller,
            gate,
        }
    }
}

/// A complete test environment around one session.
pub struct TestHarness {
    /// The scripted generation service.
    pub service: Arc<MockService>,
    /// Recording sink for export and clipboard actions.
    pub sink: Arc<MockSink>,
    /// The controller under test.
    pub controller: Arc<GenerationController>,
    gate: Option<MockGate>,
}

impl TestHarness {
    /// Create a new builder for configuring the test harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Run one generation cycle.
    pub async fn submit(&self, prompt: &str) -> Result<CycleOutcome, ArchitectError> {
        self.controller.submit(prompt).await
    }

    /// Gate handle when built with [`TestHarnessBuilder::gated`].
    pub fn gate(&self) -> Option<&MockGate> {
        self.gate.as_ref()
    }

    pub async fn current_result(&self) -> Option<GenerationResult> {
        self.controller.current_result().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[tokio::test]
    async fn harness_drives_a_cycle() {
        let harness = TestHarness::builder()
            .with_session_id("session_harness")
            .build();

        let outcome = harness.submit("A pricing table with 3 tiers").await.unwrap();

        assert_eq!(outcome, CycleOutcome::Committed);
        assert_eq!(harness.current_result().await, Some(fixtures::login_card_result()));
        assert_eq!(
            harness.service.requests().await[0].session_id.as_str(),
            "session_harness"
        );
        assert!(harness.gate().is_none());
    }

    #[tokio::test]
    async fn failing_sink_reports_export_error() {
        use architect_core::ArtifactSink;

        let harness = TestHarness::builder().with_failing_sink().build();
        let err = harness.sink.export_artifact("x").unwrap_err();
        assert!(matches!(err, ArchitectError::Export { .. }));
        assert!(harness.sink.exports().is_empty());
    }
}
