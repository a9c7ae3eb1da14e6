// Rust guideline compliant 2026-10-17

//! richterm Core Library
//!
//! This crate provides the building blocks for turning a command run into a
//! terminal-styled SVG image:
//! - Environment shaping that coaxes programs into emitting color
//! - Command execution with interleaved stdout/stderr capture
//! - Shell-style quoting and splitting of command lines
//! - Console markup (prompts) and ANSI escape parsing into styled spans
//! - SVG rendering of a terminal window
//! - Configuration, logging and error types

pub mod ansi;
pub mod config;
pub mod environment;
pub mod error;
pub mod exec;
pub mod logging;
pub mod markup;
pub mod render;
pub mod shell;
pub mod style;

pub use config::Config;
pub use environment::{current_environment, prepare_environment, shape_environment, Env};
pub use error::{Error, Result};
pub use exec::{run_command, run_command_with_env, CommandOutput, EXIT_COMMAND_NOT_FOUND};
pub use render::{render_svg, render_text, RenderOptions, TerminalTheme};
pub use shell::{command_to_display, split_command};
pub use style::{Color, Span, Style};
