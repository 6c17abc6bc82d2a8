//! End-to-end tests for the fibseq CLI
//!
//! These tests run the built binary with an isolated configuration directory
//! and check what it prints.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Test context with an isolated config directory
struct TestContext {
    /// Kept alive for the duration of the test
    _temp_dir: TempDir,
    /// Config directory (XDG_CONFIG_HOME)
    config_dir: PathBuf,
}

/// Captured result of one CLI invocation
struct FibseqOutput {
    stdout: String,
    stderr: String,
    success: bool,
    code: Option<i32>,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            _temp_dir: temp_dir,
            config_dir,
        }
    }

    /// Write a config.toml where the binary will look for it
    fn create_config(&self, content: &str) {
        let config_path = self.config_dir.join("fibseq").join("config.toml");
        fs::create_dir_all(config_path.parent().unwrap()).expect("Failed to create config dir");
        fs::write(&config_path, content).expect("Failed to write config");
    }

    /// Run a fibseq command
    fn run(&self, args: &[&str]) -> FibseqOutput {
        let output = Command::new(env!("CARGO_BIN_EXE_fibseq"))
            .args(args)
            .env("XDG_CONFIG_HOME", &self.config_dir)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run fibseq");

        FibseqOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }

    /// Run a command expecting success
    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.success,
            "fibseq {:?} failed:\nstdout: {}\nstderr: {}",
            args, output.stdout, output.stderr
        );
        output.stdout
    }
}

#[test]
fn test_generate_default_count() {
    let ctx = TestContext::new();
    let stdout = ctx.run_ok(&["generate"]);
    assert_eq!(
        stdout,
        "The first 10 Fibonacci numbers are: [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]\n"
    );
}

#[test]
fn test_generate_explicit_count() {
    let ctx = TestContext::new();
    assert_eq!(
        ctx.run_ok(&["gen", "2"]),
        "The first 2 Fibonacci numbers are: [0, 1]\n"
    );
}

#[test]
fn test_generate_negative_count_is_empty() {
    let ctx = TestContext::new();
    assert_eq!(
        ctx.run_ok(&["generate", "-4"]),
        "The first -4 Fibonacci numbers are: []\n"
    );
    assert_eq!(ctx.run_ok(&["generate", "0", "--format", "list"]), "");
}

#[test]
fn test_generate_list_and_json() {
    let ctx = TestContext::new();
    assert_eq!(ctx.run_ok(&["generate", "5", "-f", "list"]), "0\n1\n1\n2\n3\n");

    let json = ctx.run_ok(&["generate", "3", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["count"], 3);
    assert_eq!(value["terms"], serde_json::json!(["0", "1", "1"]));
}

#[test]
fn test_generate_rejects_non_number() {
    let ctx = TestContext::new();
    let output = ctx.run(&["generate", "many"]);

    assert!(!output.success);
    assert_eq!(output.code, Some(1));
    assert!(
        output.stderr.contains("Invalid count 'many'"),
        "unexpected stderr: {}",
        output.stderr
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_term() {
    let ctx = TestContext::new();
    assert_eq!(ctx.run_ok(&["term", "10"]), "55\n");
    assert_eq!(ctx.run_ok(&["term", "100"]), "354224848179261915075\n");
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_defaults_are_used() {
    let ctx = TestContext::new();
    ctx.create_config("[defaults]\ncount = 4\nformat = \"list\"\n");

    assert_eq!(ctx.run_ok(&["generate"]), "0\n1\n1\n2\n");
    // Flags still win over config
    assert_eq!(
        ctx.run_ok(&["generate", "1", "--format", "text"]),
        "The first 1 Fibonacci numbers are: [0]\n"
    );
}

#[cfg(target_os = "linux")]
#[test]
fn test_invalid_config_reports_error() {
    let ctx = TestContext::new();
    ctx.create_config("[defaults]\ncount = \"lots\"\n");

    let output = ctx.run(&["generate"]);
    assert!(!output.success);
    assert!(
        output.stderr.contains("Invalid configuration file"),
        "unexpected stderr: {}",
        output.stderr
    );
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_command_shows_path_and_settings() {
    let ctx = TestContext::new();

    let stdout = ctx.run_ok(&["config"]);
    assert!(stdout.contains("not found, using defaults"), "{stdout}");
    assert!(stdout.contains("count = 10"), "{stdout}");

    ctx.create_config("[defaults]\ncount = 21\n");
    let stdout = ctx.run_ok(&["config"]);
    assert!(!stdout.contains("not found"), "{stdout}");
    assert!(stdout.contains("count = 21"), "{stdout}");
}
