// Rust guideline compliant 2026-10-17

//! Command execution with combined output capture.

use crate::environment::{prepare_environment, Env};
use crate::{Error, Result};
use std::io::{ErrorKind, Read};
use std::process::{Command, ExitStatus, Stdio};

/// Exit code reported when the program cannot be found, as shells do.
pub const EXIT_COMMAND_NOT_FOUND: i32 = 127;

/// Result of running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code of the child process.
    pub exit_code: i32,
    /// Interleaved stdout and stderr, decoded lossily as UTF-8.
    pub output: String,
}

impl CommandOutput {
    /// Returns `true` if the command exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs `argv` and captures everything it writes.
///
/// The program is started directly (no shell) with the environment from
/// [`prepare_environment`]. stdout and stderr share one pipe so the
/// captured text keeps the order the program wrote it in.
///
/// # Arguments
/// * `argv` - Program followed by its arguments
/// * `env` - Explicit base environment, or `None` for the current one
///
/// # Returns
/// The exit code and captured output.
///
/// # Errors
///
/// Returns an error if:
/// - `argv` is empty
/// - The program does not exist (`Error::CommandNotFound`)
/// - The program cannot be started for another reason
/// - Reading the output or waiting for the child fails
pub fn run_command(argv: &[String], env: Option<Env>) -> Result<CommandOutput> {
    run_command_with_env(argv, &prepare_environment(env))
}

/// Runs `argv` with exactly the environment `env`.
///
/// # Errors
///
/// Same as [`run_command`].
pub fn run_command_with_env(argv: &[String], env: &Env) -> Result<CommandOutput> {
    let (program, args) = argv.split_first().ok_or(Error::EmptyCommand)?;

    let (mut reader, writer) = std::io::pipe()?;
    let mut command = Command::new(program);
    command
        .args(args)
        .env_clear()
        .envs(env)
        .stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer);

    tracing::debug!(program = %program, args = args.len(), "launching command");
    let mut child = command.spawn().map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::CommandNotFound(program.clone()),
        _ => Error::Launch {
            program: program.clone(),
            source,
        },
    })?;
    // The command still holds write ends of the pipe; the read only ends
    // once every write end is closed.
    drop(command);

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let status = child.wait()?;
    let exit_code = exit_code_of(status);

    tracing::debug!(program = %program, exit_code, bytes = bytes.len(), "command finished");
    Ok(CommandOutput {
        exit_code,
        output: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

#[cfg(unix)]
fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
