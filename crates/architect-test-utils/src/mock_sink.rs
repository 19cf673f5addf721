// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recording artifact sink.

use std::sync::Mutex;

use architect_core::{ArchitectError, ArtifactSink};

/// Captures exported and copied text instead of touching disk or clipboard.
#[derive(Default)]
pub struct MockSink {
    exports: Mutex<Vec<String>>,
    copies: Mutex<Vec<String>>,
    fail: bool,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every operation fails with [`ArchitectError::Export`].
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn exports(&self) -> Vec<String> {
        self.exports.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn copies(&self) -> Vec<String> {
        self.copies.lock().map(|v| v.clone()).unwrap_or_default()
    }

    fn record(&self, into: &Mutex<Vec<String>>, text: &str) -> Result<(), ArchitectError> {
        if self.fail {
            return Err(ArchitectError::Export {
                message: "mock sink configured to fail".to_string(),
                source: None,
            });
        }
        into.lock()
            .map_err(|_| ArchitectError::Internal("mock sink poisoned".to_string()))?
            .push(text.to_string());
        Ok(())
    }
}

impl ArtifactSink for MockSink {
    fn export_artifact(&self, text: &str) -> Result<(), ArchitectError> {
        self.record(&self.exports, text)
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<(), ArchitectError> {
        self.record(&self.copies, text)
    }
}
