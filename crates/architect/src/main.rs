// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Architect - natural-language to UI component generation, in the terminal.
//!
//! This is the binary entry point for the Architect client.

mod generate;
mod render;
mod shell;

use std::path::PathBuf;

use architect_config::ArchitectConfig;
use clap::{Parser, Subcommand};
use colored::Colorize;

/// Architect - describe a UI component, get an Angular template and class back.
#[derive(Parser, Debug)]
#[command(name = "architect", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default hierarchy.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch an interactive session (default).
    Shell,
    /// Generate one component and print it.
    Generate {
        /// Natural-language description of the component.
        prompt: String,
        /// Also write the combined artifact to the configured export file.
        #[arg(long)]
        export: bool,
        /// Print the raw result as JSON instead of rendering it.
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => architect_config::load_and_validate_path(path),
        None => architect_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            architect_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);
    tracing::debug!(mode = %config.service.mode, base_url = %config.service.base_url, "config loaded");

    let result = match cli.command {
        Some(Commands::Shell) | None => shell::run_shell(config).await.map(|()| true),
        Some(Commands::Generate {
            prompt,
            export,
            json,
        }) => generate::run_generate(config, &prompt, export, json).await,
        Some(Commands::Config) => print_config(&config).map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            eprintln!("{}: {e}", "error".red());
            std::process::exit(1);
        }
    }
}

fn print_config(config: &ArchitectConfig) -> Result<(), architect_core::ArchitectError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| architect_core::ArchitectError::Config(e.to_string()))?;
    print!("{rendered}");
    Ok(())
}

/// Logs go to stderr so they never interleave with rendered artifacts on stdout.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("architect={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
