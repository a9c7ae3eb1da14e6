// Rust guideline compliant 2026-10-17

//! Command-line arguments for `richterm`.

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Parsed `richterm` invocation.
///
/// `-h` hides the command, so help is only available as `--help`.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "richterm",
    version,
    about = "Run a command and render its output as a terminal-styled SVG",
    long_about = "richterm runs a command with color-friendly environment variables, echoes its output, and saves an SVG image of the prompt, command and output.",
    disable_help_flag = true,
    after_help = "Examples:\n  richterm ls --color=always\n  richterm -o docs/build.svg --prompt '[bold green]>' cargo build\n  richterm -h python -c \"print('only output')\"\n  richterm --shown-command 'make demo' ./scripts/demo.sh\n"
)]
pub struct Cli {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Path of the SVG file to write
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Prompt markup shown before the command
    #[arg(short, long, value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Hide the prompt and command in the image
    #[arg(short = 'h', long)]
    pub hide_command: bool,

    /// Command text to show instead of the one actually run
    #[arg(long, value_name = "TEXT")]
    pub shown_command: Option<String>,

    /// Window title of the rendered terminal
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Terminal width in columns
    #[arg(long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Custom config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Command to execute, followed by its arguments
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Parses arguments, requiring a command to run.
///
/// # Arguments
/// * `args` - Full argument list including the binary name
///
/// # Returns
/// The parsed arguments
///
/// # Errors
///
/// Returns a clap error for invalid flags, for `--help`/`--version`
/// requests, and when no command is given.
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    if cli.command.is_empty() {
        return Err(Cli::command().error(
            ErrorKind::MissingRequiredArgument,
            "a command to execute is required",
        ));
    }
    Ok(cli)
}
