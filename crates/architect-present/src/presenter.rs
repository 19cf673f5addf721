// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turns a validation report and its audit trail into display-ready data.

use architect_core::{AttemptRecord, ValidationReport};

/// Kind of a validation message, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Passed,
}

impl Severity {
    pub fn marker(self) -> &'static str {
        match self {
            Severity::Error => "✗",
            Severity::Warning => "⚠",
            Severity::Passed => "✓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub severity: Severity,
    pub text: String,
}

/// Display model for one validation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationModel {
    pub is_valid: bool,
    /// `All checks passed` or `N error(s) found`.
    pub headline: String,
    /// Set when `is_valid` disagrees with the error list.
    pub discrepancy: Option<String>,
    /// Errors, then warnings, then passed checks; input order within each group.
    pub messages: Vec<Message>,
    /// `None` when the trail is empty.
    pub audit: Option<AuditTrailView>,
}

impl PresentationModel {
    /// Messages with passed checks capped at `max_passed`. Errors and warnings are never hidden.
    pub fn visible_messages(&self, max_passed: usize) -> impl Iterator<Item = &Message> {
        let mut passed_shown = 0;
        self.messages.iter().filter(move |m| {
            if m.severity != Severity::Passed {
                return true;
            }
            passed_shown += 1;
            passed_shown <= max_passed
        })
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.messages.iter().filter(|m| m.severity == severity).count()
    }
}

/// Build the display model. Inconsistent reports are rendered, never rejected.
pub fn present(report: &ValidationReport, audit_trail: &[AttemptRecord]) -> PresentationModel {
    let headline = if report.is_valid {
        "All checks passed".to_string()
    } else {
        format!("{} error(s) found", report.error_count())
    };

    let discrepancy = if report.is_consistent() {
        None
    } else if report.is_valid {
        Some(format!(
            "validator reported the component as valid but listed {} error(s)",
            report.error_count()
        ))
    } else {
        Some("validator reported the component as invalid but listed no errors".to_string())
    };

    let tagged = |severity: Severity, items: &[String]| {
        items
            .iter()
            .map(move |text| Message {
                severity,
                text: text.clone(),
            })
            .collect::<Vec<_>>()
    };
    let mut messages = tagged(Severity::Error, &report.errors);
    messages.extend(tagged(Severity::Warning, &report.warnings));
    messages.extend(tagged(Severity::Passed, &report.passed_checks));

    PresentationModel {
        is_valid: report.is_valid,
        headline,
        discrepancy,
        messages,
        audit: AuditTrailView::new(audit_trail),
    }
}

/// One repair-loop attempt, summarized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptSummary {
    pub attempt_number: u32,
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl AttemptSummary {
    /// `Attempt 1: valid` or `Attempt 2: 3 error(s)`.
    pub fn summary(&self) -> String {
        if self.is_valid {
            format!("Attempt {}: valid", self.attempt_number)
        } else {
            format!("Attempt {}: {} error(s)", self.attempt_number, self.errors.len())
        }
    }
}

/// Collapsible list of repair attempts. Collapsed until toggled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditTrailView {
    expanded: bool,
    attempts: Vec<AttemptSummary>,
}

impl AuditTrailView {
    pub fn new(trail: &[AttemptRecord]) -> Option<Self> {
        if trail.is_empty() {
            return None;
        }
        let attempts = trail
            .iter()
            .map(|record| AttemptSummary {
                attempt_number: record.attempt_number,
                is_valid: record.validation.is_valid,
                errors: record.validation.errors.clone(),
            })
            .collect();
        Some(Self {
            expanded: false,
            attempts,
        })
    }

    pub fn label(&self) -> String {
        let n = self.attempts.len();
        let plural = if n == 1 { "" } else { "s" };
        format!("Audit trail ({n} attempt{plural})")
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn attempts(&self) -> &[AttemptSummary] {
        &self.attempts
    }

    /// Attempts to draw right now: none while collapsed.
    pub fn visible_attempts(&self) -> &[AttemptSummary] {
        if self.expanded { &self.attempts } else { &[] }
    }
}
