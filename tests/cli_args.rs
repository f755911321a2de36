//! Tests for the `buttonbook` binary's non-interactive modes.

use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    // Point at a config path that does not exist so user config never leaks in
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = dir.path().join("config.toml");
    Command::new(env!("CARGO_BIN_EXE_buttonbook"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_shows_options() {
    let output = run(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("--list"));
    assert!(stdout.contains("--story"));
}

#[test]
fn test_list_prints_button_stories() {
    let output = run(&["--list"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["Button/Normal button", "Button/Primary button"]);
}

#[test]
fn test_list_json() {
    let output = run(&["--list", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["groups"][0]["name"], "Button");
    assert_eq!(
        value["groups"][0]["stories"],
        serde_json::json!(["Normal button", "Primary button"])
    );
}

#[test]
fn test_json_requires_list() {
    let output = run(&["--json"]);
    assert!(!output.status.success());
}

#[test]
fn test_story_renders_label() {
    let output = run(&["--story", "Primary button"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(" Button "));
}

#[test]
fn test_unknown_story_exits_with_error() {
    let output = run(&["--story", "Huge button"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Story 'Huge button' not found in group 'Button'"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[browser]\ntick_rate_ms = 0\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_buttonbook"))
        .arg("--config")
        .arg(&config)
        .arg("--list")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
}
