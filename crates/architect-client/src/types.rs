// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the `POST /generate` endpoint.

use architect_core::{ArchitectError, AttemptRecord, GenerationResult, ValidationReport};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Request body for `POST /generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateBody {
    pub prompt: String,
    pub session_id: String,
}

/// Success body returned by `POST /generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub template: String,
    /// Component logic; the service generates TypeScript.
    pub typescript: String,
    pub success: bool,
    pub iterations: u32,
    pub validation: ApiValidation,
    /// Older service builds omit the trail entirely.
    #[serde(default)]
    pub audit_trail: Option<Vec<ApiAttempt>>,
}

/// Validation block as the service reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiValidation {
    pub is_valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub passed: Vec<String>,
}

/// One entry of the self-correction audit trail.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiAttempt {
    pub attempt: u32,
    pub validation: ApiValidation,
}

/// Error body some deployments send with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

impl From<ApiValidation> for ValidationReport {
    fn from(v: ApiValidation) -> Self {
        Self {
            is_valid: v.is_valid,
            errors: v.errors,
            warnings: v.warnings,
            passed_checks: v.passed,
        }
    }
}

impl TryFrom<GenerateResponse> for GenerationResult {
    type Error = ArchitectError;

    fn try_from(resp: GenerateResponse) -> Result<Self, Self::Error> {
        if resp.iterations == 0 {
            return Err(ArchitectError::MalformedResponse {
                message: "`iterations` must be at least 1".into(),
                source: None,
            });
        }

        let audit_trail: Vec<AttemptRecord> = resp
            .audit_trail
            .unwrap_or_default()
            .into_iter()
            .map(|a| AttemptRecord {
                attempt_number: a.attempt,
                validation: a.validation.into(),
            })
            .collect();

        let ordered = audit_trail
            .iter()
            .enumerate()
            .all(|(i, a)| a.attempt_number as usize == i + 1);
        if !ordered {
            warn!(
                attempts = audit_trail.len(),
                "audit trail attempt numbers are not 1..=n in order"
            );
        }

        Ok(Self {
            template: resp.template,
            component_source: resp.typescript,
            success: resp.success,
            iteration_count: resp.iterations,
            validation: resp.validation.into(),
            audit_trail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_serializes_with_wire_names() {
        let body = GenerateBody {
            prompt: "A login card".into(),
            session_id: "session_abc".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"prompt": "A login card", "session_id": "session_abc"})
        );
    }

    #[test]
    fn response_maps_renamed_fields() {
        let json = serde_json::json!({
            "template": "<div></div>",
            "typescript": "class X {}",
            "success": true,
            "iterations": 1,
            "validation": {"is_valid": true, "errors": [], "warnings": [], "passed": ["ok"]},
            "audit_trail": [{"attempt": 1, "validation": {"is_valid": true, "errors": []}}]
        });
        let resp: GenerateResponse = serde_json::from_value(json).unwrap();
        let result = GenerationResult::try_from(resp).unwrap();

        assert_eq!(result.component_source, "class X {}");
        assert_eq!(result.iteration_count, 1);
        assert_eq!(result.validation.passed_checks, vec!["ok".to_string()]);
        assert_eq!(result.audit_trail.len(), 1);
        assert_eq!(result.audit_trail[0].attempt_number, 1);
        assert!(result.audit_trail[0].validation.warnings.is_empty());
    }

    #[test]
    fn missing_audit_trail_defaults_to_empty() {
        let json = serde_json::json!({
            "template": "",
            "typescript": "",
            "success": false,
            "iterations": 3,
            "validation": {"is_valid": false, "errors": ["Unbalanced braces"]}
        });
        let resp: GenerateResponse = serde_json::from_value(json).unwrap();
        let result = GenerationResult::try_from(resp).unwrap();
        assert!(result.audit_trail.is_empty());
        assert!(result.validation.passed_checks.is_empty());
        assert_eq!(result.validation.errors, vec!["Unbalanced braces".to_string()]);
    }

    #[test]
    fn zero_iterations_is_malformed() {
        let json = serde_json::json!({
            "template": "",
            "typescript": "",
            "success": true,
            "iterations": 0,
            "validation": {"is_valid": true}
        });
        let resp: GenerateResponse = serde_json::from_value(json).unwrap();
        let err = GenerationResult::try_from(resp).unwrap_err();
        assert!(matches!(err, ArchitectError::MalformedResponse { .. }));
    }
}
