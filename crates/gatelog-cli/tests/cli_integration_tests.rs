//! CLI integration tests
//!
//! These run the `gatelog` binary against a settings file in a temporary
//! directory and check the file it leaves behind.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const SETTINGS: &str = r#"
[targets.android]
define_symbols = ""

[targets.ios]
define_symbols = "BAR"
supported = false

[targets.standalone]
define_symbols = "FOO"

[targets.unknown]
define_symbols = "X"
"#;

fn write_settings(temp_dir: &TempDir, contents: &str) -> PathBuf {
    let path = temp_dir.path().join("gatelog.toml");
    fs::write(&path, contents).unwrap();
    path
}

fn run_cli(temp_dir: &TempDir, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_gatelog");
    Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .env_remove("GATELOG_LEVEL")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn defines(path: &Path, target: &str) -> String {
    let settings: toml::Value = toml::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    settings["targets"][target]["define_symbols"]
        .as_str()
        .unwrap()
        .to_string()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_apply_enabled_edits_supported_targets_only() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_settings(&temp_dir, SETTINGS);

    let output = run_cli(&temp_dir, &["apply", "enabled"]);

    assert_success(&output);
    assert_eq!(defines(&path, "standalone"), "FOO;GATELOG_ENABLED");
    assert_eq!(defines(&path, "android"), "GATELOG_ENABLED");
    assert_eq!(defines(&path, "ios"), "BAR");
    assert_eq!(defines(&path, "unknown"), "X");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Skip ios"), "stderr: {}", stderr);
    assert!(stderr.contains("Skip unknown"), "stderr: {}", stderr);
    assert!(stderr.contains("no hook configured"), "stderr: {}", stderr);
}

#[test]
fn test_apply_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_settings(&temp_dir, SETTINGS);

    assert_success(&run_cli(&temp_dir, &["apply", "release"]));
    assert_success(&run_cli(&temp_dir, &["apply", "release"]));

    assert_eq!(defines(&path, "standalone"), "FOO;GATELOG_RELEASE");
}

#[test]
fn test_remove_drops_symbol() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_settings(
        &temp_dir,
        r#"
[targets.standalone]
define_symbols = "GATELOG_ENABLED;FOO;GATELOG_RELEASE"
"#,
    );

    assert_success(&run_cli(&temp_dir, &["remove", "enabled"]));

    assert_eq!(defines(&path, "standalone"), "FOO;GATELOG_RELEASE");
}

#[test]
fn test_list_prints_every_target() {
    let temp_dir = TempDir::new().unwrap();
    write_settings(&temp_dir, SETTINGS);

    let output = run_cli(&temp_dir, &["list"]);

    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("standalone: FOO"));
    assert!(stdout.contains("ios: BAR"));
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn test_features_for_target() {
    let temp_dir = TempDir::new().unwrap();
    write_settings(
        &temp_dir,
        r#"
[targets.standalone]
define_symbols = "GATELOG_RELEASE;FOO;GATELOG_ENABLED"
"#,
    );

    let output = run_cli(&temp_dir, &["features", "--target", "standalone"]);

    assert_success(&output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "gatelog/enabled,gatelog/release"
    );
}

#[test]
fn test_features_for_unknown_target_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_settings(&temp_dir, SETTINGS);

    let output = run_cli(&temp_dir, &["features", "--target", "switch"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Unknown build target: switch"));
}

#[test]
fn test_missing_settings_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(&temp_dir, &["apply", "enabled"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_explicit_settings_path() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("project");
    fs::create_dir_all(&nested).unwrap();
    let path = nested.join("targets.toml");
    fs::write(&path, SETTINGS).unwrap();

    let output = run_cli(
        &temp_dir,
        &["--settings", path.to_str().unwrap(), "apply", "enabled"],
    );

    assert_success(&output);
    assert_eq!(defines(&path, "android"), "GATELOG_ENABLED");
}

#[cfg(unix)]
mod hooks {
    use super::*;

    #[test]
    fn test_regenerate_hook_runs_in_settings_dir() {
        let temp_dir = TempDir::new().unwrap();
        write_settings(
            &temp_dir,
            r#"
regenerate = ["sh", "-c", "echo done > regenerated.txt"]

[targets.standalone]
define_symbols = ""
"#,
        );

        assert_success(&run_cli(&temp_dir, &["apply", "enabled"]));

        let marker = temp_dir.path().join("regenerated.txt");
        assert_eq!(fs::read_to_string(marker).unwrap().trim(), "done");
    }

    #[test]
    fn test_failing_hook_keeps_edit() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_settings(
            &temp_dir,
            r#"
regenerate = ["false"]

[targets.standalone]
define_symbols = ""
"#,
        );

        let output = run_cli(&temp_dir, &["apply", "release"]);

        assert_success(&output);
        assert_eq!(defines(&path, "standalone"), "GATELOG_RELEASE");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Regenerate hook 'false' failed"), "stderr: {}", stderr);
    }

    #[test]
    fn test_regenerate_command_reports_failure() {
        let temp_dir = TempDir::new().unwrap();
        write_settings(&temp_dir, "regenerate = [\"false\"]\n");

        let output = run_cli(&temp_dir, &["regenerate"]);

        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("Error: Regenerate hook"));
    }
}
