// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation and artifact types shared across the Architect workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Identifier for one client session, sent unchanged on every request.
///
/// Generated once per client lifetime and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generates a fresh, collision-resistant session identifier.
    pub fn generate() -> Self {
        Self(format!("session_{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the conversation log.
#[derive(Debug, Clone, PartialEq)]
pub enum Turn {
    /// A prompt typed by the user.
    User { prompt: String },
    /// A committed generation, kept together with the prompt that produced it.
    Assistant {
        prompt: String,
        result: Box<GenerationResult>,
    },
}

impl Turn {
    pub fn role(&self) -> Role {
        match self {
            Turn::User { .. } => Role::User,
            Turn::Assistant { .. } => Role::Assistant,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Turn::User { prompt } | Turn::Assistant { prompt, .. } => prompt,
        }
    }

    /// The generation result carried by an assistant turn.
    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            Turn::User { .. } => None,
            Turn::Assistant { result, .. } => Some(result),
        }
    }
}

/// Which part of the current result the output panel shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ResultView {
    /// Generated markup.
    #[default]
    Template,
    /// Generated component logic.
    Component,
    /// Design tokens injected into every generation.
    Tokens,
}

/// A request for one generation cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub session_id: SessionId,
}

/// The artifact produced by one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Generated markup.
    pub template: String,
    /// Generated component logic.
    pub component_source: String,
    /// True iff the final validation passed.
    pub success: bool,
    /// Number of self-correction attempts the service needed. Always >= 1.
    pub iteration_count: u32,
    pub validation: ValidationReport,
    /// One record per self-correction attempt, oldest first.
    #[serde(default)]
    pub audit_trail: Vec<AttemptRecord>,
}

/// Outcome of validating one generated artifact.
///
/// `is_valid` is expected to equal `errors.is_empty()`, but the value comes
/// from the remote service and is not trusted; see [`ValidationReport::is_consistent`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    /// Blocking issues.
    #[serde(default)]
    pub errors: Vec<String>,
    /// Non-blocking issues.
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Rules the artifact satisfied.
    #[serde(default)]
    pub passed_checks: Vec<String>,
}

impl ValidationReport {
    /// A passing report with the given satisfied checks.
    pub fn passing(passed_checks: Vec<String>) -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            passed_checks,
        }
    }

    /// A failing report with the given blocking errors.
    pub fn failing(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
            warnings: Vec::new(),
            passed_checks: Vec::new(),
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Whether the reported flag agrees with the error list.
    pub fn is_consistent(&self) -> bool {
        self.is_valid == self.errors.is_empty()
    }
}

/// Validation outcome of one self-correction attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// 1-based, strictly increasing within a trail.
    pub attempt_number: u32,
    pub validation: ValidationReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_are_prefixed_and_unique() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert!(a.as_str().starts_with("session_"));
        assert_ne!(a, b);
        assert_eq!(a.to_string(), a.0);
    }

    #[test]
    fn turn_accessors() {
        let user = Turn::User {
            prompt: "A login card".into(),
        };
        assert_eq!(user.role(), Role::User);
        assert_eq!(user.prompt(), "A login card");
        assert!(user.result().is_none());

        let result = GenerationResult {
            template: "<div></div>".into(),
            component_source: "class X {}".into(),
            success: true,
            iteration_count: 1,
            validation: ValidationReport::passing(vec!["ok".into()]),
            audit_trail: Vec::new(),
        };
        let assistant = Turn::Assistant {
            prompt: "A login card".into(),
            result: Box::new(result.clone()),
        };
        assert_eq!(assistant.role(), Role::Assistant);
        assert_eq!(assistant.result(), Some(&result));
    }

    #[test]
    fn result_view_parses_case_insensitively() {
        use std::str::FromStr;
        assert_eq!(ResultView::from_str("Component").unwrap(), ResultView::Component);
        assert_eq!(ResultView::default(), ResultView::Template);
        assert!(ResultView::from_str("preview").is_err());
    }

    #[test]
    fn report_consistency() {
        assert!(ValidationReport::passing(vec![]).is_consistent());
        assert!(ValidationReport::failing(vec!["x".into()]).is_consistent());

        let lying = ValidationReport {
            is_valid: true,
            errors: vec!["unbalanced braces".into()],
            ..Default::default()
        };
        assert!(!lying.is_consistent());
        assert_eq!(lying.error_count(), 1);
    }
}
