// Rust guideline compliant 2026-10-17

//! Integration tests for the `richterm` command.

#![cfg(unix)]

use richterm_cli::commands::capture;
use richterm_cli::parse_args;
use std::path::Path;
use tempfile::TempDir;

/// Runs the CLI with `args` and returns the exit code and captured stdout.
fn run(args: &[&str]) -> (i32, String) {
    let mut argv = vec!["richterm"];
    argv.extend_from_slice(args);
    let cli = parse_args(argv).expect("arguments should parse");
    let mut out = Vec::new();
    let code = capture::execute(&cli, &mut out).expect("capture should succeed");
    (code, String::from_utf8(out).expect("stdout should be UTF-8"))
}

fn read_svg(path: &Path) -> String {
    std::fs::read_to_string(path)
        .expect("Failed to read SVG")
        .replace("&#160;", " ")
}

#[test]
fn test_runs_command_and_creates_svg() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("example.svg");
    let output_arg = output.to_str().unwrap();

    let (code, stdout) = run(&["-o", output_arg, "sh", "-c", "printf hello"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("hello"));
    assert!(stdout.trim_end().ends_with(&format!("Created {}", output_arg)));
    let svg = read_svg(&output);
    assert!(svg.contains("<svg"));
    assert!(svg.contains("hello"));
    assert!(svg.contains("$"));
    assert!(svg.contains("sh -c"));
}

#[test]
fn test_hide_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("no_command.svg");

    let (code, _) = run(&[
        "-h",
        "--prompt",
        "[bold]$",
        "-o",
        output.to_str().unwrap(),
        "sh",
        "-c",
        "echo hidden",
    ]);

    assert_eq!(code, 0);
    let svg = read_svg(&output);
    assert!(svg.contains("hidden"));
    assert!(!svg.contains("$ sh"));
    assert!(!svg.contains("sh -c"));
}

#[test]
fn test_shown_command_replaces_real_one() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("shown.svg");

    run(&[
        "--shown-command",
        "echo pretend",
        "-o",
        output.to_str().unwrap(),
        "sh",
        "-c",
        "echo real",
    ]);

    let svg = read_svg(&output);
    assert!(svg.contains("echo pretend"));
    assert!(!svg.contains("sh -c"));
    assert!(svg.contains("real"));
}

#[test]
fn test_shown_command_ignored_when_hidden() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("hidden_shown.svg");

    run(&[
        "-h",
        "--shown-command",
        "echo pretend",
        "-o",
        output.to_str().unwrap(),
        "sh",
        "-c",
        "echo real",
    ]);

    let svg = read_svg(&output);
    assert!(!svg.contains("echo pretend"));
    assert!(svg.contains("real"));
}

#[test]
fn test_non_zero_exit_code() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("failure.svg");

    let (code, stdout) = run(&[
        "-o",
        output.to_str().unwrap(),
        "sh",
        "-c",
        "printf boom >&2; exit 3",
    ]);

    assert_eq!(code, 3);
    assert_eq!(stdout.lines().next(), Some("boom"));
    assert!(output.exists());
    assert!(read_svg(&output).contains("boom"));
}

#[test]
fn test_command_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("missing.svg");

    let (code, stdout) = run(&[
        "-o",
        output.to_str().unwrap(),
        "this-command-should-not-exist-123456",
    ]);

    assert_eq!(code, 127);
    assert!(stdout.is_empty());
    assert!(!output.exists());
}

#[test]
fn test_title_and_width_flags() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("titled.svg");

    run(&[
        "--title",
        "Build Log",
        "--width",
        "40",
        "-o",
        output.to_str().unwrap(),
        "sh",
        "-c",
        "echo ok",
    ]);

    let svg = read_svg(&output);
    assert!(svg.contains("Build Log"));
}

#[test]
fn test_config_file_supplies_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = temp_dir.path().join("richterm.toml");
    std::fs::write(&config, "prompt = \"[green]>>>\"\ntitle = \"From Config\"\n")
        .expect("Failed to write config");
    let output = temp_dir.path().join("configured.svg");

    run(&[
        "--config",
        config.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "sh",
        "-c",
        "echo ok",
    ]);

    let svg = read_svg(&output);
    assert!(svg.contains("&gt;&gt;&gt;"));
    assert!(svg.contains("From Config"));
}

#[test]
fn test_invalid_width_is_rejected() {
    let cli = parse_args(["richterm", "--width", "3", "sh", "-c", "true"]).unwrap();
    let mut out = Vec::new();
    assert!(capture::execute(&cli, &mut out).is_err());
}

#[test]
fn test_output_parent_directories_are_created() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("nested/dir/out.svg");

    let (code, _) = run(&["-o", output.to_str().unwrap(), "sh", "-c", "echo nested"]);

    assert_eq!(code, 0);
    assert!(output.exists());
}

/// Runs the built `richterm` binary inside `dir`.
fn run_binary(dir: &Path, args: &[&str]) -> std::process::Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_richterm"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RICHTERM_SHOWN_COMMAND")
        .env_remove("RICHTERM_HIDE_COMMAND")
        .output()
        .expect("binary should start")
}

#[test]
fn test_binary_requires_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_binary(temp_dir.path(), &["-o", "out.svg"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("a command to execute is required"));
    assert!(!temp_dir.path().join("out.svg").exists());
}

#[test]
fn test_binary_command_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_binary(
        temp_dir.path(),
        &["-o", "out.svg", "richterm-definitely-missing-binary"],
    );

    assert_eq!(output.status.code(), Some(127));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Command not found: richterm-definitely-missing-binary"));
    assert!(output.stdout.is_empty());
    assert!(!temp_dir.path().join("out.svg").exists());
}

#[test]
fn test_binary_propagates_exit_code() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_binary(temp_dir.path(), &["-o", "out.svg", "sh", "-c", "echo boom; exit 4"]);

    assert_eq!(output.status.code(), Some(4));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("boom\n"));
    assert!(stdout.trim_end().ends_with("Created out.svg"));
    assert!(temp_dir.path().join("out.svg").exists());
}

#[test]
fn test_binary_warns_about_hidden_shown_command_from_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(
        temp_dir.path().join("richterm.toml"),
        "hide_command = true\nshown_command = \"make demo\"\n",
    )
    .expect("Failed to write config");

    let output = run_binary(temp_dir.path(), &["-o", "out.svg", "sh", "-c", "echo hi"]);

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("the shown command is ignored because the command is hidden"));
    assert!(!stderr.contains("--shown-command"));
}
