// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Architect integration tests.
//!
//! Provides a scripted generation service, a recording artifact sink and a
//! harness that wires them to a [`GenerationController`](architect_session::GenerationController).
//!
//! # Components
//!
//! - [`MockService`] - Generation service with a FIFO reply queue and optional gate
//! - [`MockSink`] - Artifact sink that records exports and clipboard copies
//! - [`fixtures`] - Canned results and errors

pub mod fixtures;
pub mod harness;
pub mod mock_service;
pub mod mock_sink;

pub use harness::TestHarness;
pub use mock_service::{MockGate, MockService};
pub use mock_sink::MockSink;
