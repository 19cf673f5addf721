// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./architect.toml` > `~/.config/architect/architect.toml`
//! > `/etc/architect/architect.toml`, with environment variable overrides via
//! the `ARCHITECT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::ArchitectConfig;

pub(crate) const LOCAL_CONFIG_FILE: &str = "architect.toml";
pub(crate) const SYSTEM_CONFIG_FILE: &str = "/etc/architect/architect.toml";

/// Path of the per-user config file, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("architect").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/architect/architect.toml`
/// 3. `~/.config/architect/architect.toml`
/// 4. `./architect.toml`
/// 5. `ARCHITECT_*` environment variables
pub fn load_config() -> Result<ArchitectConfig, figment::Error> {
    tracing::debug!(user_file = ?user_config_path(), "loading configuration hierarchy");
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<ArchitectConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ArchitectConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ArchitectConfig, figment::Error> {
    tracing::debug!(path = %path.display(), "loading configuration file");
    Figment::new()
        .merge(Serialized::defaults(ArchitectConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for the XDG hierarchy before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ArchitectConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_FILE))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Environment provider mapping `ARCHITECT_<SECTION>_<KEY>` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because keys themselves
/// contain underscores: `ARCHITECT_SERVICE_BASE_URL` must become
/// `service.base_url`, not `service.base.url`.
fn env_provider() -> Env {
    Env::prefixed("ARCHITECT_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("app_", "app.", 1)
            .replacen("service_", "service.", 1)
            .replacen("display_", "display.", 1)
            .replacen("export_", "export.", 1);
        mapped.into()
    })
}
