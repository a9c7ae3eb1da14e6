// Rust guideline compliant 2026-10-17

//! Configuration management for richterm.

use crate::markup::parse_markup;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "richterm.toml";

/// Narrowest accepted terminal width.
pub const MIN_WIDTH: usize = 20;

/// Widest accepted terminal width.
pub const MAX_WIDTH: usize = 1000;

/// Configuration for richterm behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Prompt markup shown before the command.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Whether to omit the prompt and command from the image.
    #[serde(default)]
    pub hide_command: bool,

    /// Command text displayed instead of the one actually run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shown_command: Option<String>,

    /// Window title of the rendered terminal.
    #[serde(default = "default_title")]
    pub title: String,

    /// Terminal width in columns.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Whether to set environment variables that encourage colored output.
    #[serde(default = "default_color_hint")]
    pub color_hint: bool,
}

fn default_prompt() -> String {
    "$".to_string()
}

fn default_title() -> String {
    "richterm".to_string()
}

fn default_width() -> usize {
    80
}

fn default_color_hint() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            hide_command: false,
            shown_command: None,
            title: default_title(),
            width: default_width(),
            color_hint: default_color_hint(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The file at `path`, or `richterm.toml` in the current directory
    /// 3. Environment variables with `RICHTERM_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Explicit configuration file; it must exist when given
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit configuration file is missing or unreadable
    /// - The configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = PathBuf::from(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides()?;
        config.validate()?;

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Reads a configuration file without applying overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            crate::Error::InvalidConfig(format!("{}: {}", path.display(), e))
        })
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `RICHTERM_PROMPT` - Prompt markup
    /// - `RICHTERM_HIDE_COMMAND` - Hide the command line (true/false)
    /// - `RICHTERM_SHOWN_COMMAND` - Displayed command text
    /// - `RICHTERM_TITLE` - Window title
    /// - `RICHTERM_WIDTH` - Terminal width in columns
    /// - `RICHTERM_DISABLE_COLOR_HINT` - Any value disables color hints
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("RICHTERM_PROMPT") {
            self.prompt = val;
        }

        if let Ok(val) = std::env::var("RICHTERM_HIDE_COMMAND") {
            self.hide_command = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "RICHTERM_HIDE_COMMAND must be true or false".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("RICHTERM_SHOWN_COMMAND") {
            self.shown_command = Some(val).filter(|v| !v.is_empty());
        }

        if let Ok(val) = std::env::var("RICHTERM_TITLE") {
            self.title = val;
        }

        if let Ok(val) = std::env::var("RICHTERM_WIDTH") {
            self.width = val.parse().map_err(|_| {
                crate::Error::InvalidConfig("RICHTERM_WIDTH must be a positive number".to_string())
            })?;
        }

        if std::env::var_os(crate::environment::DISABLE_COLOR_HINT_VAR).is_some() {
            self.color_hint = false;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - width is outside 20-1000
    /// - prompt is not valid markup
    pub fn validate(&self) -> Result<()> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.width) {
            return Err(crate::Error::InvalidConfig(format!(
                "width must be {}-{}, got {}",
                MIN_WIDTH, MAX_WIDTH, self.width
            )));
        }

        parse_markup(&self.prompt)
            .map_err(|e| crate::Error::InvalidConfig(format!("prompt: {}", e)))?;

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
