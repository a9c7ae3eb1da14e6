// Rust guideline compliant 2026-10-17

//! richterm CLI Application
//!
//! Runs a command and saves a terminal-styled SVG of its output.

use richterm_cli::{commands, parse_args};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    richterm_core::logging::init_tracing()?;

    let exit_code = {
        let mut stdout = std::io::stdout().lock();
        let code = commands::capture::execute(&cli, &mut stdout)?;
        stdout.flush()?;
        code
    };

    std::process::exit(exit_code);
}
