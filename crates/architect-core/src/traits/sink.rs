// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Artifact sink trait isolating export and clipboard side effects.

use crate::error::ArchitectError;

/// Destination for artifacts the user takes out of the client.
///
/// Core logic never calls these directly; only the presentation layer does.
pub trait ArtifactSink: Send + Sync {
    /// Persists the combined artifact text (e.g. as a downloadable file).
    fn export_artifact(&self, text: &str) -> Result<(), ArchitectError>;

    /// Places the given text on the system clipboard.
    fn copy_to_clipboard(&self, text: &str) -> Result<(), ArchitectError>;
}
