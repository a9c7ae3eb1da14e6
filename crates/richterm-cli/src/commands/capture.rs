// Rust guideline compliant 2026-10-17

//! Implementation of the main `richterm <COMMAND>...` run.
//!
//! Runs the command, echoes what it printed, renders the SVG and writes it
//! to disk.

use crate::cli::Cli;
use crate::terminal::{print_error, print_warning};
use anyhow::{Context, Result};
use richterm_core::{
    command_to_display, current_environment, render_svg, run_command_with_env, shape_environment,
    Config, Env, RenderOptions, EXIT_COMMAND_NOT_FOUND,
};
use std::io::Write;
use std::path::PathBuf;

/// Returns the default output path, `rich_term_<date>_<time>.svg`.
pub fn default_output_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("rich_term_{}.svg", stamp))
}

/// Loads the configuration and layers the command-line flags on top.
///
/// # Errors
///
/// Returns an error if the config file is invalid or the resulting values
/// fail validation.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(prompt) = &cli.prompt {
        config.prompt = prompt.clone();
    }
    if cli.hide_command {
        config.hide_command = true;
    }
    if let Some(shown) = &cli.shown_command {
        config.shown_command = Some(shown.clone());
    }
    if let Some(title) = &cli.title {
        config.title = title.clone();
    }
    if let Some(width) = cli.width {
        config.width = width;
    }

    config.validate()?;
    Ok(config)
}

/// Runs the capture.
///
/// # Arguments
///
/// * `cli` - Parsed arguments
/// * `out` - Destination for the echoed output and the "Created" line
///
/// # Returns
///
/// The exit code to report: the child's code, or 127 if the command was
/// not found.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The command cannot be started for a reason other than not existing
/// - The SVG file cannot be written
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<i32> {
    let config = resolve_config(cli)?;

    let env: Env = shape_environment(current_environment(), config.color_hint);
    let captured = match run_command_with_env(&cli.command, &env) {
        Ok(captured) => captured,
        Err(err) if err.is_not_found() => {
            print_error(&err.to_string());
            return Ok(EXIT_COMMAND_NOT_FOUND);
        }
        Err(err) => return Err(err.into()),
    };

    out.write_all(captured.output.as_bytes())?;
    if !captured.output.is_empty() && !captured.output.ends_with('\n') {
        writeln!(out)?;
    }

    if config.hide_command && config.shown_command.is_some() {
        print_warning("the shown command is ignored because the command is hidden");
    }
    let displayed = config
        .shown_command
        .clone()
        .unwrap_or_else(|| command_to_display(&cli.command));

    let options = RenderOptions::from(&config);
    let svg = render_svg(&displayed, &captured.output, &options);

    let path = cli.output.clone().unwrap_or_else(default_output_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), exit_code = captured.exit_code, "image written");

    writeln!(out, "Created {}", path.display())?;
    Ok(captured.exit_code)
}
