// Rust guideline compliant 2026-10-17

//! The `.. richterm::` directive.
//!
//! A directive names a command and, optionally, overrides the prompt and
//! what is shown in place of the command. Values that are not given come
//! from the project [`Config`].

use crate::error::DirectiveError;
use richterm_core::markup::parse_markup;
use richterm_core::{
    current_environment, render_svg, render_text, run_command_with_env, shape_environment,
    split_command, Config, RenderOptions,
};
use std::str::FromStr;

/// Name the directive is registered under.
pub const DIRECTIVE_NAME: &str = "richterm";

/// Output format of the documentation build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// HTML builds embed the SVG directly.
    #[default]
    Html,
    /// Other builds get the SVG for HTML plus a plain-text fallback.
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "text" => Ok(OutputFormat::Text),
            other => Err(format!("unknown format '{}' (expected html or text)", other)),
        }
    }
}

/// Options given on the directive itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveOptions {
    /// `:prompt:` override.
    pub prompt: Option<String>,
    /// `:hide-command:` flag.
    pub hide_command: bool,
    /// `:shown-command:` override.
    pub shown_command: Option<String>,
}

impl DirectiveOptions {
    /// Applies one `:name: value` option.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown names and for a value on the
    /// `hide-command` flag.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), DirectiveError> {
        match name {
            "prompt" => self.prompt = Some(value.to_string()),
            "hide-command" => {
                if !value.is_empty() {
                    return Err(DirectiveError::InvalidOption {
                        name: name.to_string(),
                        reason: format!("no argument is allowed; \"{}\" supplied", value),
                    });
                }
                self.hide_command = true;
            }
            "shown-command" => self.shown_command = Some(value.to_string()),
            other => return Err(DirectiveError::UnknownOption(other.to_string())),
        }
        Ok(())
    }
}

/// One directive occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Command text as written in the document.
    pub command: String,
    pub options: DirectiveOptions,
}

/// Output of a successfully run directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    /// The rendered SVG document.
    pub svg: String,
    /// Plain-text transcript used where images are not available.
    pub text: String,
    /// Non-fatal problems found while running the directive.
    pub warnings: Vec<String>,
}

impl Directive {
    /// Creates a directive with no options.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            options: DirectiveOptions::default(),
        }
    }

    /// Runs the command and renders it.
    ///
    /// # Arguments
    ///
    /// * `config` - Project-wide defaults for options not given here
    ///
    /// # Returns
    ///
    /// The rendered block.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command is blank or cannot be split
    /// - The prompt markup is invalid
    /// - The command cannot be executed
    /// - The command exits with a non-zero code
    pub fn run(&self, config: &Config) -> Result<RenderedBlock, DirectiveError> {
        let command = self.command.trim();
        if command.is_empty() {
            return Err(DirectiveError::MissingCommand);
        }

        let argv = split_command(command).map_err(|err| DirectiveError::InvalidSyntax {
            command: command.to_string(),
            reason: err.to_string(),
        })?;
        if argv.is_empty() {
            return Err(DirectiveError::MissingCommand);
        }

        let hide_command = self.options.hide_command || config.hide_command;
        let shown_command = self
            .options
            .shown_command
            .as_ref()
            .or(config.shown_command.as_ref());

        let prompt = self
            .options
            .prompt
            .clone()
            .unwrap_or_else(|| config.prompt.clone());
        parse_markup(&prompt).map_err(|err| DirectiveError::InvalidOption {
            name: "prompt".to_string(),
            reason: err.to_string(),
        })?;

        let mut warnings = Vec::new();
        if hide_command && shown_command.is_some() {
            let warning = format!(
                "shown-command is ignored for '{}' because the command is hidden",
                command
            );
            tracing::warn!("{}", warning);
            warnings.push(warning);
        }

        let env = shape_environment(current_environment(), config.color_hint);
        let captured = run_command_with_env(&argv, &env)?;
        if !captured.success() {
            return Err(DirectiveError::CommandFailed {
                command: command.to_string(),
                exit_code: captured.exit_code,
                output: captured.output,
            });
        }

        let displayed = shown_command.map(String::as_str).unwrap_or(command);
        let options = RenderOptions {
            prompt,
            hide_command,
            ..RenderOptions::from(config)
        };

        tracing::info!(command, "rendered richterm directive");
        Ok(RenderedBlock {
            svg: render_svg(displayed, &captured.output, &options),
            text: render_text(displayed, &captured.output, &options),
            warnings,
        })
    }
}

fn indent_lines(text: &str, indent: &str) -> String {
    let mut out = String::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            out.push('\n');
        } else {
            out.push_str(indent);
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

impl RenderedBlock {
    /// Formats the block as reStructuredText.
    ///
    /// HTML builds get a single `raw` block. Other builds get the same raw
    /// block restricted to HTML plus a literal transcript for everything
    /// else.
    ///
    /// # Arguments
    ///
    /// * `format` - Output format of the build
    /// * `indent` - Indentation of the directive being replaced
    pub fn to_rst(&self, format: OutputFormat, indent: &str) -> String {
        let html = format!("<div class=\"richterm\">\n{}</div>\n", self.svg);

        match format {
            OutputFormat::Html => {
                let mut out = format!("{indent}.. raw:: html\n\n");
                out.push_str(&indent_lines(&html, &format!("{indent}   ")));
                out
            }
            OutputFormat::Text => {
                let inner = format!("{indent}   ");
                let mut out = format!("{indent}.. only:: html\n\n{inner}.. raw:: html\n\n");
                out.push_str(&indent_lines(&html, &format!("{inner}   ")));
                out.push_str(&format!(
                    "\n{indent}.. only:: not html\n\n{inner}.. code-block:: text\n\n"
                ));
                out.push_str(&indent_lines(&self.text, &format!("{inner}   ")));
                out
            }
        }
    }
}
