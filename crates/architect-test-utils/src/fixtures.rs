// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned generation results and errors.

use architect_core::{ArchitectError, AttemptRecord, GenerationResult, ValidationReport};

/// Minimal valid single-pass result.
pub fn login_card_result() -> GenerationResult {
    GenerationResult {
        template: "<div></div>".to_string(),
        component_source: "class X {}".to_string(),
        success: true,
        iteration_count: 1,
        validation: ValidationReport::passing(vec!["ok".to_string()]),
        audit_trail: vec![AttemptRecord {
            attempt_number: 1,
            validation: ValidationReport::passing(vec!["ok".to_string()]),
        }],
    }
}

/// Same as [`login_card_result`] with a different template, to tell results apart.
pub fn result_with_template(template: &str) -> GenerationResult {
    GenerationResult {
        template: template.to_string(),
        ..login_card_result()
    }
}

/// A result that exhausted its repair loop: three attempts, still failing.
pub fn failing_result() -> GenerationResult {
    let failing = |errors: &[&str]| ValidationReport {
        is_valid: false,
        errors: errors.iter().map(|e| e.to_string()).collect(),
        warnings: vec!["Consider adding aria-label to the submit button".to_string()],
        passed_checks: vec!["Template parses".to_string()],
    };

    GenerationResult {
        template: "<form><input></form>".to_string(),
        component_source: "export class BrokenComponent {}".to_string(),
        success: false,
        iteration_count: 3,
        validation: failing(&["Missing closing tag for <input>", "Unknown binding [valu]"]),
        audit_trail: vec![
            AttemptRecord {
                attempt_number: 1,
                validation: failing(&[
                    "Missing closing tag for <input>",
                    "Unknown binding [valu]",
                    "Selector is not kebab-case",
                ]),
            },
            AttemptRecord {
                attempt_number: 2,
                validation: failing(&["Missing closing tag for <input>", "Unknown binding [valu]"]),
            },
            AttemptRecord {
                attempt_number: 3,
                validation: failing(&["Missing closing tag for <input>", "Unknown binding [valu]"]),
            },
        ],
    }
}

pub fn service_error(status: u16) -> ArchitectError {
    let body = match status {
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "",
    };
    ArchitectError::Service {
        status,
        body: body.to_string(),
    }
}

pub fn transport_error() -> ArchitectError {
    ArchitectError::Transport {
        message: "connection refused".to_string(),
        source: None,
    }
}

pub fn malformed_error() -> ArchitectError {
    ArchitectError::MalformedResponse {
        message: "missing field `template`".to_string(),
        source: None,
    }
}
