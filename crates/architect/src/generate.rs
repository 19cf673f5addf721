// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `architect generate` command implementation.

use architect_config::ArchitectConfig;
use architect_core::{ArchitectError, ArtifactSink, GenerationResult, ResultView};
use architect_present::{export_text, present, Language, LocalSink};
use architect_session::{CycleOutcome, GenerationController};
use colored::Colorize;

/// Run one cycle. `Ok(None)` means the service failed and the message was printed.
pub async fn generate_once(
    controller: &GenerationController,
    prompt: &str,
) -> Result<Option<GenerationResult>, ArchitectError> {
    match controller.submit(prompt).await? {
        CycleOutcome::Committed => Ok(controller.current_result().await),
        CycleOutcome::RolledBack { error } => {
            eprintln!("{}: {error}", "generation failed".red());
            Ok(None)
        }
    }
}

/// Template view plus component source, for non-interactive output.
pub fn render_one_shot(result: &GenerationResult, config: &ArchitectConfig) -> String {
    let model = present(&result.validation, &result.audit_trail);
    let mut out =
        crate::render::render_result(result, ResultView::Template, &model, &config.display);
    out.push('\n');
    out.push_str(&format!("{}\n", "TypeScript Component Class".bold()));
    out.push_str(&crate::render::render_code(
        &result.component_source,
        Language::ComponentLogic,
        config.display.highlight,
    ));
    out.push('\n');
    out
}

/// Runs `architect generate`. Returns `false` when the generation failed.
pub async fn run_generate(
    config: ArchitectConfig,
    prompt: &str,
    export: bool,
    json: bool,
) -> Result<bool, ArchitectError> {
    let service = architect_client::build_service(&config.service)?;
    let controller = GenerationController::new(service);

    let Some(result) = generate_once(&controller, prompt).await? else {
        return Ok(false);
    };

    if json {
        let rendered = serde_json::to_string_pretty(&result)
            .map_err(|e| ArchitectError::Internal(format!("cannot serialize result: {e}")))?;
        println!("{rendered}");
    } else {
        print!("{}", render_one_shot(&result, &config));
    }

    if export {
        let sink = LocalSink::from_config(&config.export);
        sink.export_artifact(&export_text(&result))?;
        eprintln!("exported to {}", sink.path().display());
    }

    Ok(true)
}
