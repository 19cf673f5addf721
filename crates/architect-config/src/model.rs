// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Architect client.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Top-level Architect configuration.
///
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ArchitectConfig {
    /// Process-wide settings.
    #[serde(default)]
    pub app: AppConfig,

    /// Generation service connection settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Terminal rendering settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Artifact export settings.
    #[serde(default)]
    pub export: ExportConfig,
}

/// Process-wide configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Which generation backend the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Deserialize, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ServiceMode {
    /// Offline canned output, no network.
    #[default]
    Demo,
    /// Real HTTP calls to `service.base_url`.
    Live,
}

/// Generation service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Demo or live backend.
    #[serde(default)]
    pub mode: ServiceMode,

    /// Base URL of the generation service; requests go to `{base_url}/generate`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout. Expiry is reported as a transport failure.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra attempts for transient statuses (429, 500, 503, 529).
    #[serde(default)]
    pub max_retries: u32,

    /// Simulated latency of the demo backend.
    #[serde(default = "default_demo_latency_ms")]
    pub demo_latency_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            mode: ServiceMode::default(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: 0,
            demo_latency_ms: default_demo_latency_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_demo_latency_ms() -> u64 {
    2000
}

/// Terminal rendering configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Colour generated code by token category.
    #[serde(default = "default_highlight")]
    pub highlight: bool,

    /// How many passed checks the validation summary lists.
    #[serde(default = "default_max_passed_checks")]
    pub max_passed_checks: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            highlight: default_highlight(),
            max_passed_checks: default_max_passed_checks(),
        }
    }
}

fn default_highlight() -> bool {
    true
}

fn default_max_passed_checks() -> usize {
    3
}

/// Artifact export configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Directory exported artifacts are written to.
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// File name of the combined artifact.
    #[serde(default = "default_export_file_name")]
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            file_name: default_export_file_name(),
        }
    }
}

fn default_export_directory() -> String {
    ".".to_string()
}

fn default_export_file_name() -> String {
    "generated-component.ts".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ArchitectConfig::default();
        assert_eq!(config.app.log_level, "info");
        assert_eq!(config.service.mode, ServiceMode::Demo);
        assert_eq!(config.service.base_url, "http://localhost:8000");
        assert_eq!(config.service.timeout_secs, 120);
        assert_eq!(config.service.max_retries, 0);
        assert!(config.display.highlight);
        assert_eq!(config.display.max_passed_checks, 3);
        assert_eq!(config.export.file_name, "generated-component.ts");
    }

    #[test]
    fn service_mode_parses_lowercase() {
        use std::str::FromStr;
        assert_eq!(ServiceMode::from_str("live").unwrap(), ServiceMode::Live);
        assert_eq!(ServiceMode::Demo.to_string(), "demo");
    }
}
