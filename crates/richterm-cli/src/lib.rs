// Rust guideline compliant 2026-10-17

//! richterm CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod cli;
pub mod commands;
pub mod terminal;

pub use cli::{parse_args, Cli};
pub use terminal::should_use_color;
