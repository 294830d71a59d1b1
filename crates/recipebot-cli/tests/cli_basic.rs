//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new("cargo")
        .args(["run", "-p", "recipebot-cli", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_config_path_prints_location() {
    let (code, stdout, _stderr) = run_cli(&["config", "path"]);
    assert_eq!(code, 0);
    assert!(stdout.trim().ends_with("config.toml"));
}

#[test]
fn test_config_show_missing_file_fails() {
    let (code, _stdout, stderr) = run_cli(&["config", "show", "--path", "/nonexistent/config.toml"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_config_init_and_show_roundtrip() {
    let dir = std::env::temp_dir().join("recipebot_cli_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    let _ = std::fs::remove_file(&path);

    let (code, _stdout, _stderr) = run_cli(&["config", "init", "--path", path.to_str().unwrap()]);
    assert_eq!(code, 0);

    let (code, stdout, _stderr) = run_cli(&["config", "show", "--path", path.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("[telegram]"));
    assert!(stdout.contains("poll_timeout_secs = 30"));

    let _ = std::fs::remove_file(&path);
}
