//! Integration tests for `qotd run` and `qotd show`
//!
//! A fake `fortune` that echoes its arguments is the only program on PATH,
//! so the output is deterministic and the real clipboard is never touched.
#![cfg(unix)]

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Output, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

const WAIT: Duration = Duration::from_secs(10);

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}")).expect("Failed to write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
    path
}

/// A bin dir holding a `fortune` that prints `args:<its arguments>`.
fn fake_bin(dir: &Path) -> PathBuf {
    let bin = dir.join("bin");
    fs::create_dir(&bin).expect("Failed to create bin dir");
    write_script(&bin, "fortune", "echo \"args:$*\"\n");
    bin
}

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

fn qotd(bin: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_qotd"));
    command.env("PATH", bin);
    command
}

struct Desklet {
    child: Child,
    stdin: ChildStdin,
    lines: Receiver<String>,
}

impl Desklet {
    fn start(bin: &Path, args: &[&str]) -> Self {
        let mut child = qotd(bin)
            .arg("run")
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to start qotd run");

        let stdin = child.stdin.take().expect("stdin is piped");
        let stdout = child.stdout.take().expect("stdout is piped");
        let (tx, lines) = mpsc::channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines().map_while(Result::ok) {
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        Self {
            child,
            stdin,
            lines,
        }
    }

    /// Lines of the next displayed quote, up to and including its separator.
    fn next_quote(&self) -> Vec<String> {
        let mut block = Vec::new();
        loop {
            let line = self
                .lines
                .recv_timeout(WAIT)
                .unwrap_or_else(|_| panic!("No quote displayed, got so far: {block:?}"));
            let done = line == "%";
            block.push(line);
            if done {
                return block;
            }
        }
    }

    fn send(&mut self, line: &str) {
        writeln!(self.stdin, "{line}").expect("Failed to write to qotd stdin");
        self.stdin.flush().expect("Failed to flush qotd stdin");
    }

    fn wait_for_exit(mut self) -> bool {
        let deadline = Instant::now() + WAIT;
        loop {
            if let Some(status) = self.child.try_wait().expect("Failed to poll qotd") {
                return status.success();
            }
            if Instant::now() > deadline {
                let _ = self.child.kill();
                panic!("qotd run did not exit after quit");
            }
            thread::sleep(Duration::from_millis(20));
        }
    }
}

fn wait_for_file(path: &Path) -> String {
    let deadline = Instant::now() + WAIT;
    loop {
        if let Ok(content) = fs::read_to_string(path)
            && !content.is_empty()
        {
            return content;
        }
        assert!(
            Instant::now() < deadline,
            "{} was never written",
            path.display()
        );
        thread::sleep(Duration::from_millis(20));
    }
}

#[test]
fn test_run_displays_quote_on_start_and_on_next() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let bin = fake_bin(temp_dir.path());
    let config = write_config(temp_dir.path(), "");
    let config = config.to_string_lossy();

    let mut desklet = Desklet::start(
        &bin,
        &[
            "--config",
            &config,
            "--ignore-input-file",
            "--params",
            "-s",
        ],
    );

    assert_eq!(desklet.next_quote(), vec!["args:-s", "%"]);

    desklet.send("next");
    assert_eq!(desklet.next_quote(), vec!["args:-s", "%"]);

    desklet.send("quit");
    assert!(desklet.wait_for_exit());
}

#[test]
fn test_run_copies_displayed_quote() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let bin = fake_bin(temp_dir.path());
    let clipboard = temp_dir.path().join("clipboard.txt");
    write_script(
        &bin,
        "xclip",
        &format!(
            "while IFS= read -r line; do printf '%s\\n' \"$line\"; done > '{}'\n",
            clipboard.display()
        ),
    );
    let config = write_config(
        temp_dir.path(),
        "ignore-input-file = true\nfortune-params = \"-s\"\n",
    );
    let config = config.to_string_lossy();

    let mut desklet = Desklet::start(&bin, &["--config", &config]);
    assert_eq!(desklet.next_quote(), vec!["args:-s", "%"]);

    desklet.send("copy");
    assert_eq!(wait_for_file(&clipboard), "args:-s\n");

    desklet.send("quit");
    assert!(desklet.wait_for_exit());
}

#[test]
fn test_run_reloads_edited_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let bin = fake_bin(temp_dir.path());
    let config = write_config(
        temp_dir.path(),
        "ignore-input-file = true\nfortune-params = \"-s\"\n",
    );
    let config_arg = config.to_string_lossy();

    let mut desklet = Desklet::start(&bin, &["--config", &config_arg]);
    assert_eq!(desklet.next_quote(), vec!["args:-s", "%"]);

    fs::write(&config, "ignore-input-file = true\nfortune-params = \"-l\"\n")
        .expect("Failed to rewrite config");
    assert_eq!(desklet.next_quote(), vec!["args:-l", "%"]);

    desklet.send("quit");
    assert!(desklet.wait_for_exit());
}

fn run_show(bin: &Path, args: &[&str]) -> Output {
    qotd(bin)
        .arg("show")
        .args(args)
        .output()
        .expect("Failed to execute qotd show")
}

#[test]
fn test_show_prints_quote_with_separator() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let bin = fake_bin(temp_dir.path());
    let config = write_config(temp_dir.path(), "");

    let output = run_show(
        &bin,
        &[
            "--config",
            &config.to_string_lossy(),
            "--ignore-input-file",
            "--params",
            "-s",
        ],
    );

    assert!(
        output.status.success(),
        "qotd show failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), "args:-s\n%\n");
}

#[test]
fn test_show_json_output() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let bin = fake_bin(temp_dir.path());
    let config = write_config(temp_dir.path(), "");

    let output = run_show(
        &bin,
        &[
            "--json",
            "--config",
            &config.to_string_lossy(),
            "--ignore-input-file",
            "--params",
            "-s -n 200",
        ],
    );

    assert!(output.status.success());
    let quote: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(quote["text"], "args:-s -n 200\n");
    assert_eq!(quote["command"], "fortune -s -n 200");
    assert!(
        quote["fetched_at"].as_str().is_some_and(|s| !s.is_empty()),
        "fetched_at should be a timestamp, got: {}",
        quote["fetched_at"]
    );
}

#[test]
fn test_show_without_fortune_fails() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let empty_bin = temp_dir.path().join("empty");
    fs::create_dir(&empty_bin).expect("Failed to create bin dir");
    let config = write_config(temp_dir.path(), "ignore-input-file = true\n");

    let output = run_show(&empty_bin, &["--config", &config.to_string_lossy()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Failed to fetch quote"),
        "Expected fetch error, got: {}",
        stderr
    );
}
