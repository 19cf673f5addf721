// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Combined artifact export to a file and to the system clipboard.

use std::fs;
use std::path::{Path, PathBuf};

use architect_config::model::ExportConfig;
use architect_core::{ArchitectError, ArtifactSink, GenerationResult};
use tracing::{debug, info};

/// Template and component source joined into one downloadable artifact.
pub fn export_text(result: &GenerationResult) -> String {
    format!(
        "<!-- Template -->\n{}\n\n/* TypeScript */\n{}",
        result.template, result.component_source
    )
}

/// Writes artifacts under a directory and copies through the desktop clipboard.
#[derive(Debug, Clone)]
pub struct LocalSink {
    path: PathBuf,
}

impl LocalSink {
    pub fn new(directory: impl AsRef<Path>, file_name: &str) -> Self {
        Self {
            path: directory.as_ref().join(file_name),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(&config.directory, &config.file_name)
    }

    /// Destination of [`ArtifactSink::export_artifact`].
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArtifactSink for LocalSink {
    fn export_artifact(&self, text: &str) -> Result<(), ArchitectError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ArchitectError::Export {
                message: format!("cannot create {}", parent.display()),
                source: Some(Box::new(e)),
            })?;
        }
        fs::write(&self.path, text).map_err(|e| ArchitectError::Export {
            message: format!("cannot write {}", self.path.display()),
            source: Some(Box::new(e)),
        })?;
        info!(path = %self.path.display(), bytes = text.len(), "artifact exported");
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<(), ArchitectError> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| ArchitectError::Export {
            message: "clipboard unavailable".to_string(),
            source: Some(Box::new(e)),
        })?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ArchitectError::Export {
                message: "clipboard write failed".to_string(),
                source: Some(Box::new(e)),
            })?;
        debug!(bytes = text.len(), "copied to clipboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use architect_test_utils::fixtures;

    #[test]
    fn export_text_layout() {
        let text = export_text(&fixtures::login_card_result());
        assert_eq!(
            text,
            "<!-- Template -->\n<div></div>\n\n/* TypeScript */\nclass X {}"
        );
    }

    #[test]
    fn writes_file_into_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = LocalSink::new(dir.path().join("out"), "generated-component.ts");

        sink.export_artifact("hello").unwrap();

        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "hello");
    }

    #[test]
    fn overwrites_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        let sink = LocalSink::new(dir.path(), "a.ts");
        sink.export_artifact("first").unwrap();
        sink.export_artifact("second").unwrap();
        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "second");
    }

    #[test]
    fn from_config_joins_path() {
        let config = ExportConfig {
            directory: "build".to_string(),
            file_name: "x.ts".to_string(),
        };
        assert_eq!(LocalSink::from_config(&config).path(), Path::new("build/x.ts"));
    }

    #[test]
    fn unwritable_destination_is_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        // A regular file where a directory is expected.
        let sink = LocalSink::new(&blocker, "out.ts");

        let err = sink.export_artifact("data").unwrap_err();
        assert!(matches!(err, ArchitectError::Export { .. }));
    }
}
