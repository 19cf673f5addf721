// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `architect shell` command implementation.
//!
//! Launches an interactive REPL with colored prompt and readline history.
//! Plain lines are prompts; lines starting with `/` are commands. One
//! session per invocation.

use std::str::FromStr;
use std::sync::Arc;

use architect_config::model::DisplayConfig;
use architect_config::ArchitectConfig;
use architect_core::{ArchitectError, ArtifactSink, ResultView};
use architect_present::tokens::{example_prompt, EXAMPLE_PROMPTS};
use architect_present::{export_text, present, AuditTrailView, LocalSink};
use architect_session::{CycleOutcome, GenerationController};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::render;

const HELP: &str = "\
commands:
  <text>            generate a component from a description
  /examples         list example prompts
  /use N            generate from example prompt N
  /view template|component|tokens
  /audit            expand or collapse the audit trail
  /export           write template and component to the export file
  /copy             copy the code in the current view to the clipboard
  /history          list the conversation
  /session          show session details
  /quit, /exit      leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Prompt(String),
    Quit,
    Help,
    Examples,
    Use(usize),
    View(ResultView),
    Audit,
    Export,
    Copy,
    History,
    Session,
    Unknown(String),
}

pub fn parse_command(line: &str) -> ShellCommand {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return ShellCommand::Prompt(trimmed.to_string());
    };
    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (name, arg) {
        ("quit" | "exit", _) => ShellCommand::Quit,
        ("help", _) => ShellCommand::Help,
        ("examples", _) => ShellCommand::Examples,
        ("use", Some(n)) => n
            .parse()
            .map(ShellCommand::Use)
            .unwrap_or_else(|_| ShellCommand::Unknown(trimmed.to_string())),
        ("view", Some("ts" | "typescript")) => ShellCommand::View(ResultView::Component),
        ("view", Some(v)) => ResultView::from_str(v)
            .map(ShellCommand::View)
            .unwrap_or_else(|_| ShellCommand::Unknown(trimmed.to_string())),
        ("audit", _) => ShellCommand::Audit,
        ("export", _) => ShellCommand::Export,
        ("copy", _) => ShellCommand::Copy,
        ("history", _) => ShellCommand::History,
        ("session", _) => ShellCommand::Session,
        _ => ShellCommand::Unknown(trimmed.to_string()),
    }
}

/// What to print after a command, and whether to leave.
#[derive(Debug, Default)]
pub struct Reply {
    pub output: String,
    pub quit: bool,
}

impl Reply {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }
}

/// REPL state around one controller.
pub struct Shell {
    controller: Arc<GenerationController>,
    sink: Arc<dyn ArtifactSink>,
    display: DisplayConfig,
    export_target: String,
    service_name: String,
    /// Audit view of the current result, reset on every commit.
    audit: Option<AuditTrailView>,
}

impl Shell {
    pub fn new(
        controller: Arc<GenerationController>,
        sink: Arc<dyn ArtifactSink>,
        display: DisplayConfig,
        export_target: String,
        service_name: String,
    ) -> Self {
        Self {
            controller,
            sink,
            display,
            export_target,
            service_name,
            audit: None,
        }
    }

    pub async fn handle(&mut self, command: ShellCommand) -> Reply {
        match command {
            ShellCommand::Prompt(prompt) => self.submit(&prompt).await,
            ShellCommand::Quit => Reply {
                output: String::new(),
                quit: true,
            },
            ShellCommand::Help => Reply::text(format!("{HELP}\n")),
            ShellCommand::Examples => {
                let list: String = EXAMPLE_PROMPTS
                    .iter()
                    .enumerate()
                    .map(|(i, p)| format!("  {} {p}\n", format!("{}.", i + 1).cyan()))
                    .collect();
                Reply::text(list)
            }
            ShellCommand::Use(n) => match example_prompt(n) {
                Some(prompt) => self.submit(prompt).await,
                None => Reply::text(format!(
                    "{}\n",
                    format!("no example {n}; pick 1-{}", EXAMPLE_PROMPTS.len()).yellow()
                )),
            },
            ShellCommand::View(view) => {
                self.controller.select_view(view).await;
                self.show_current().await
            }
            ShellCommand::Audit => match self.audit.as_mut() {
                Some(audit) => {
                    audit.toggle();
                    Reply::text(render::render_audit(audit))
                }
                None => Reply::text(format!("{}\n", "no audit trail".dimmed())),
            },
            ShellCommand::Export => self.export().await,
            ShellCommand::Copy => self.copy().await,
            ShellCommand::History => {
                Reply::text(render::render_history(&self.controller.turns().await))
            }
            ShellCommand::Session => {
                let snapshot = self.controller.snapshot().await;
                Reply::text(format!(
                    "session {}\nservice {}\nphase {}\nturns {}\n",
                    snapshot.session_id,
                    self.service_name,
                    snapshot.phase,
                    snapshot.turns.len()
                ))
            }
            ShellCommand::Unknown(line) => Reply::text(format!(
                "{}\n",
                format!("unknown command: {line} (try /help)").yellow()
            )),
        }
    }

    async fn submit(&mut self, prompt: &str) -> Reply {
        match self.controller.submit(prompt).await {
            Ok(CycleOutcome::Committed) => {
                self.audit = self
                    .controller
                    .current_result()
                    .await
                    .and_then(|r| AuditTrailView::new(&r.audit_trail));
                self.show_current().await
            }
            Ok(CycleOutcome::RolledBack { error }) => Reply::text(format!(
                "{}: {error}\n{}\n",
                "generation failed".red(),
                "your prompt was not kept; edit and resubmit".dimmed()
            )),
            Err(e) if e.is_rejection() => {
                debug!(reason = %e, "input ignored");
                Reply::default()
            }
            Err(e) => Reply::text(format!("{}: {e}\n", "error".red())),
        }
    }

    async fn show_current(&self) -> Reply {
        let Some(result) = self.controller.current_result().await else {
            return Reply::text(format!("{}\n", "no result yet".dimmed()));
        };
        let mut model = present(&result.validation, &result.audit_trail);
        model.audit = self.audit.clone();
        let view = self.controller.selected_view().await;
        Reply::text(render::render_result(&result, view, &model, &self.display))
    }

    async fn export(&self) -> Reply {
        let Some(result) = self.controller.current_result().await else {
            return Reply::text(format!("{}\n", "nothing to export yet".dimmed()));
        };
        match self.sink.export_artifact(&export_text(&result)) {
            Ok(()) => Reply::text(format!("exported to {}\n", self.export_target.bold())),
            Err(e) => Reply::text(format!("{}: {e}\n", "error".red())),
        }
    }

    async fn copy(&self) -> Reply {
        let Some(result) = self.controller.current_result().await else {
            return Reply::text(format!("{}\n", "nothing to copy yet".dimmed()));
        };
        let text = match self.controller.selected_view().await {
            ResultView::Template => result.template,
            ResultView::Component => result.component_source,
            ResultView::Tokens => {
                return Reply::text(format!("{}\n", "switch to template or component to copy".dimmed()));
            }
        };
        match self.sink.copy_to_clipboard(&text) {
            Ok(()) => Reply::text("copied\n"),
            Err(e) => Reply::text(format!("{}: {e}\n", "error".red())),
        }
    }
}

/// Runs the `architect shell` interactive REPL.
pub async fn run_shell(config: ArchitectConfig) -> Result<(), ArchitectError> {
    let service = architect_client::build_service(&config.service)?;
    let service_name = format!("{} ({})", service.name(), config.service.mode);
    let controller = Arc::new(GenerationController::new(service));
    let sink = LocalSink::from_config(&config.export);
    let export_target = sink.path().display().to_string();

    let mut shell = Shell::new(
        controller.clone(),
        Arc::new(sink),
        config.display.clone(),
        export_target,
        service_name,
    );

    let mut rl = DefaultEditor::new()
        .map_err(|e| ArchitectError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "architect shell".bold().green());
    println!(
        "Describe a component, or type {} for commands and {} to exit.\n",
        "/help".yellow(),
        "/quit".yellow()
    );

    let prompt = format!("{}> ", "architect".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                let command = parse_command(&line);
                if matches!(command, ShellCommand::Prompt(_) | ShellCommand::Use(_)) {
                    eprintln!("{}", "generating...".dimmed());
                }
                let reply = shell.handle(command).await;
                print!("{}", reply.output);
                if reply.quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}
