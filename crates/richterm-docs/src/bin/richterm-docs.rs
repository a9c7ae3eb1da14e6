// Rust guideline compliant 2026-10-17

//! CLI entry point for expanding richterm directives in a document.

use anyhow::Context;
use clap::Parser;
use richterm_core::Config;
use richterm_docs::{expand_document, OutputFormat};
use std::io::{Read, Write};
use std::path::PathBuf;

/// Expand richterm directives in reStructuredText
#[derive(Parser, Debug)]
#[command(name = "richterm-docs")]
#[command(
    version,
    about = "Replace `.. richterm::` directives with rendered terminal SVGs",
    after_help = "Examples:\n  richterm-docs docs/usage.rst.in -o docs/usage.rst\n  richterm-docs --format text README.rst\n  cat page.rst | richterm-docs -\n"
)]
struct Cli {
    /// Source document ('-' for stdin)
    input: String,

    /// Path to output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format of the documentation build (html or text)
    #[arg(long, default_value = "html")]
    format: OutputFormat,

    /// Custom config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    richterm_core::logging::init_tracing()?;

    let config = Config::load(cli.config.as_deref())?;
    let source = read_input(&cli.input)?;
    let expanded = expand_document(&source, &config, cli.format)
        .with_context(|| format!("{}: richterm directive failed", cli.input))?;

    match &cli.output {
        Some(path) => std::fs::write(path, expanded)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(expanded.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
