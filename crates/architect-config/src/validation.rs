// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::ArchitectConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every violation rather than failing fast.
pub fn validate_config(config: &ArchitectConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.app.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level `{}` is not one of {}",
                config.app.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    let base_url = config.service.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "service.base_url must not be empty".to_string(),
        });
    } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(ConfigError::Validation {
            message: format!("service.base_url `{base_url}` must start with http:// or https://"),
        });
    }

    if config.service.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "service.timeout_secs must be at least 1".to_string(),
        });
    }

    if config.service.max_retries > 5 {
        errors.push(ConfigError::Validation {
            message: format!(
                "service.max_retries must be at most 5, got {}",
                config.service.max_retries
            ),
        });
    }

    if config.export.file_name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "export.file_name must not be empty".to_string(),
        });
    } else if config.export.file_name.contains(['/', '\\']) {
        errors.push(ConfigError::Validation {
            message: format!(
                "export.file_name `{}` must be a bare file name; use export.directory for the location",
                config.export.file_name
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&ArchitectConfig::default()).is_ok());
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let mut config = ArchitectConfig::default();
        config.service.timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("timeout_secs"));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = ArchitectConfig::default();
        config.app.log_level = "loud".into();
        config.service.base_url = "localhost:8000".into();
        config.export.file_name = "out/component.ts".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3, "got: {errors:?}");
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = ArchitectConfig::default();
        config.app.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn parsed_toml_is_validated() {
        let config: ArchitectConfig = toml::from_str(
            r#"
[service]
mode = "live"
base_url = "ftp://builder.local"
max_retries = 9
"#,
        )
        .unwrap();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2, "got: {errors:?}");
        assert!(errors.iter().any(|e| e.to_string().contains("base_url")));
        assert!(errors.iter().any(|e| e.to_string().contains("max_retries")));
    }

    #[test]
    fn unknown_toml_key_is_rejected() {
        let result = toml::from_str::<ArchitectConfig>("[service]\nbase_ulr = \"http://x\"\n");
        assert!(result.is_err());
    }
}
