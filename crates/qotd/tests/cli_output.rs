//! Integration tests for CLI output behavior
//!
//! Every test points `--config` at a temp file so the user's own config never
//! leaks in. None of them need `fortune` installed.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn write_config(dir: &Path, content: &str) -> String {
    let path = dir.join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    path.to_string_lossy().into_owned()
}

fn run_qotd(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qotd"))
        .args(args)
        .output()
        .expect("Failed to execute qotd")
}

#[test]
fn test_command_with_file_and_no_params() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = write_config(temp_dir.path(), "");

    let output = run_qotd(&[
        "command",
        "--config",
        &config,
        "--file",
        "/usr/share/fortune/quotes",
    ]);

    assert!(
        output.status.success(),
        "qotd command failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "fortune /usr/share/fortune/quotes\n"
    );
}

#[test]
fn test_command_ignoring_input_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = write_config(temp_dir.path(), "file = \"/usr/share/fortune/quotes\"\n");

    let output = run_qotd(&[
        "command",
        "--config",
        &config,
        "--ignore-input-file",
        "--params",
        "-s -n 200",
    ]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "fortune -s -n 200\n"
    );
}

#[test]
fn test_command_reads_config_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let quotes = temp_dir.path().join("wisdom");
    fs::write(&quotes, "Know thyself.\n%\n").expect("Failed to write quotes");

    let config = write_config(
        temp_dir.path(),
        &format!(
            "file = \"{}\"\nfortune-params = \"-s\"\n",
            quotes.display()
        ),
    );

    let output = run_qotd(&["command", "--config", &config]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("fortune -s {}\n", quotes.display())
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("quote file not found"),
        "existing quote file should not warn, got: {}",
        stderr
    );
}

#[test]
fn test_command_without_quote_file_fails() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = write_config(temp_dir.path(), "delay = 5\n");

    let output = run_qotd(&["command", "--config", &config]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Quote file is not configured"),
        "Expected missing source error, got: {}",
        stderr
    );
}

#[test]
fn test_style_prints_css() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = write_config(
        temp_dir.path(),
        "font-size = 20\ntext-color = \"#eeeeee\"\nshadow-blur = 4\n",
    );

    let output = run_qotd(&["style", "--config", &config]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "font-size: 20pt;\ncolor: #eeeeee;\ntext-shadow: 1px 1px 4px #000000;\n"
    );
}

#[test]
fn test_invalid_config_warns_and_uses_defaults() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = write_config(temp_dir.path(), "invalid toml [[[");

    let output = run_qotd(&["style", "--config", &config]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(
        stderr.contains("Tip: Check"),
        "Expected tip about config file in stderr, got: {}",
        stderr
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "font-size: 12pt;\ncolor: #ffffff;\ntext-shadow: 1px 1px 2px #000000;\n"
    );
}

#[test]
fn test_invalid_delay_is_rejected() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = write_config(temp_dir.path(), "");

    let output = run_qotd(&["command", "--config", &config, "--delay", "-1"]);

    assert!(!output.status.success());
}

/// Verify that stdout contains only user-facing output (no JSON logs)
/// and that stderr has no INFO logs by default (quiet mode)
#[test]
fn test_stdout_is_clean_by_default() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = write_config(temp_dir.path(), "");

    let output = run_qotd(&["style", "--config", &config]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should not emit INFO logs, got: {}",
        stderr
    );
}

/// Verify that verbose mode emits structured logs on stderr only
#[test]
fn test_verbose_logs_go_to_stderr() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = write_config(temp_dir.path(), "");

    let output = run_qotd(&["-v", "style", "--config", &config]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains(r#""event":"#));
    assert!(
        stderr.contains("core.app.startup_completed"),
        "Verbose mode should log startup, got: {}",
        stderr
    );
}
