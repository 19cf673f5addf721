// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seam traits between the session core and its external collaborators.

pub mod service;
pub mod sink;

pub use service::GenerationService;
pub use sink::ArtifactSink;
