// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal rendering of results, validation and history.
//!
//! Every function returns a `String`; the shell decides where it goes.

use std::fmt::Write as _;

use architect_config::model::DisplayConfig;
use architect_core::{GenerationResult, ResultView, Turn};
use architect_present::tokens::{self, PALETTE, STYLE_TOKENS, TOKENS_NOTE};
use architect_present::{
    tokenize, AuditTrailView, BadgeTier, IterationBadge, Language, PresentationModel, Severity,
};
use colored::{ColoredString, Colorize};

fn paint(text: &str, hex: &str) -> ColoredString {
    match tokens::hex_to_rgb(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

/// Source code with span colours, or verbatim when highlighting is off.
pub fn render_code(source: &str, language: Language, highlight: bool) -> String {
    if !highlight {
        return source.to_string();
    }
    let mut out = String::with_capacity(source.len() * 2);
    for span in tokenize(source, language) {
        match span.category.color() {
            Some(hex) => {
                let _ = write!(out, "{}", paint(span.text, hex));
            }
            None => out.push_str(span.text),
        }
    }
    out
}

pub fn render_badge(badge: IterationBadge) -> String {
    let label = format!("[{badge}]");
    let colored = match badge.tier() {
        BadgeTier::FirstPass | BadgeTier::Repaired => paint(&label, badge.tier().color()),
        BadgeTier::Struggled | BadgeTier::Exhausted => paint(&label, badge.tier().color()).bold(),
    };
    colored.to_string()
}

pub fn render_validation(model: &PresentationModel, max_passed: usize) -> String {
    let mut out = String::new();
    let headline = if model.is_valid {
        model.headline.green().bold()
    } else {
        model.headline.red().bold()
    };
    let _ = writeln!(out, "{headline}");
    if let Some(note) = &model.discrepancy {
        let _ = writeln!(out, "  {}", format!("note: {note}").yellow());
    }
    for message in model.visible_messages(max_passed) {
        let line = format!("  {} {}", message.severity.marker(), message.text);
        let line = match message.severity {
            Severity::Error => line.red(),
            Severity::Warning => line.yellow(),
            Severity::Passed => line.green(),
        };
        let _ = writeln!(out, "{line}");
    }
    out
}

pub fn render_audit(audit: &AuditTrailView) -> String {
    let mut out = String::new();
    let arrow = if audit.is_expanded() { "▲" } else { "▼" };
    let _ = writeln!(out, "{}", format!("{arrow} {}", audit.label()).dimmed());
    for attempt in audit.visible_attempts() {
        let _ = writeln!(out, "  {}", attempt.summary());
        for error in &attempt.errors {
            let _ = writeln!(out, "    {}", format!("✗ {error}").red());
        }
    }
    out
}

pub fn render_tokens() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", TOKENS_NOTE.dimmed());
    for token in PALETTE {
        let _ = writeln!(out, "  {} {:<14} {}", paint("■", token.hex), token.label, token.hex.dimmed());
    }
    let _ = writeln!(out, "{}", "Token constants".dimmed());
    for (name, value) in STYLE_TOKENS {
        let _ = writeln!(out, "  {}: {}", paint(name, "#9cdcfe"), paint(value, "#ce9178"));
    }
    out
}

/// The selected view of `result` with its badge and validation summary.
pub fn render_result(
    result: &GenerationResult,
    view: ResultView,
    model: &PresentationModel,
    display: &DisplayConfig,
) -> String {
    let mut out = String::new();
    let tabs = [
        (ResultView::Template, "HTML Template"),
        (ResultView::Component, "TypeScript"),
        (ResultView::Tokens, "Design Tokens"),
    ]
    .iter()
    .map(|(v, label)| {
        if *v == view {
            label.bold().underline().to_string()
        } else {
            label.dimmed().to_string()
        }
    })
    .collect::<Vec<_>>()
    .join(" | ");
    let _ = writeln!(
        out,
        "{tabs}   {}",
        render_badge(IterationBadge::new(result.iteration_count))
    );
    let _ = writeln!(out);

    match view {
        ResultView::Template => {
            out.push_str(&render_code(&result.template, Language::Markup, display.highlight));
            out.push('\n');
        }
        ResultView::Component => {
            out.push_str(&render_code(
                &result.component_source,
                Language::ComponentLogic,
                display.highlight,
            ));
            out.push('\n');
        }
        ResultView::Tokens => out.push_str(&render_tokens()),
    }

    let _ = writeln!(out);
    out.push_str(&render_validation(model, display.max_passed_checks));
    if let Some(audit) = &model.audit {
        out.push_str(&render_audit(audit));
    }
    out
}

pub fn render_history(turns: &[Turn]) -> String {
    if turns.is_empty() {
        return format!("{}\n", "no turns yet".dimmed());
    }
    let mut out = String::new();
    for (i, turn) in turns.iter().enumerate() {
        let line = match turn {
            Turn::User { prompt } => format!("{:>3}  {} {prompt}", i + 1, "you".cyan()),
            Turn::Assistant { result, .. } => format!(
                "{:>3}  {} {} {}",
                i + 1,
                "architect".green(),
                IterationBadge::new(result.iteration_count),
                if result.validation.is_valid { "valid" } else { "invalid" }
            ),
        };
        let _ = writeln!(out, "{line}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use architect_present::present;
    use architect_test_utils::fixtures;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn code_without_highlight_is_verbatim() {
        plain();
        let src = "<div class=\"x\"></div>";
        assert_eq!(render_code(src, Language::Markup, false), src);
        assert_eq!(render_code(src, Language::Markup, true), src);
    }

    #[test]
    fn validation_caps_passed_checks() {
        plain();
        let mut result = fixtures::login_card_result();
        result.validation.passed_checks =
            (1..=5).map(|i| format!("check {i}")).collect();
        let model = present(&result.validation, &result.audit_trail);

        let out = render_validation(&model, 3);
        assert!(out.starts_with("All checks passed\n"));
        assert!(out.contains("✓ check 3"));
        assert!(!out.contains("check 4"));
    }

    #[test]
    fn failing_result_shows_errors_and_collapsed_audit() {
        plain();
        let result = fixtures::failing_result();
        let model = present(&result.validation, &result.audit_trail);
        let out = render_result(&result, ResultView::Template, &model, &DisplayConfig::default());

        assert!(out.contains("[3 iterations]"));
        assert!(out.contains("2 error(s) found"));
        assert!(out.contains("✗ Missing closing tag for <input>"));
        assert!(out.contains("▼ Audit trail (3 attempts)"));
        assert!(!out.contains("Attempt 1"));
    }

    #[test]
    fn expanded_audit_lists_attempts() {
        plain();
        let result = fixtures::failing_result();
        let mut audit = AuditTrailView::new(&result.audit_trail).unwrap();
        audit.toggle();
        let out = render_audit(&audit);
        assert!(out.contains("Attempt 1: 3 error(s)"));
        assert!(out.contains("✗ Selector is not kebab-case"));
    }

    #[test]
    fn tokens_view_lists_palette() {
        plain();
        let result = fixtures::login_card_result();
        let model = present(&result.validation, &result.audit_trail);
        let out = render_result(&result, ResultView::Tokens, &model, &DisplayConfig::default());
        assert!(out.contains("Primary Dark"));
        assert!(out.contains("#0f172a"));
        assert!(out.contains("shadow-glow: rgba(99,102,241,0.4)"));
        assert!(!out.contains("<div></div>"));
    }

    #[test]
    fn history_lists_turns() {
        plain();
        let turns = vec![
            Turn::User {
                prompt: "A login card".into(),
            },
            Turn::Assistant {
                prompt: "A login card".into(),
                result: Box::new(fixtures::login_card_result()),
            },
        ];
        let out = render_history(&turns);
        assert!(out.contains("you A login card"));
        assert!(out.contains("architect 1 pass valid"));
        assert_eq!(render_history(&[]), "no turns yet\n");
    }
}
