//! End-to-end tests for CLI exit codes.
//!
//! - Exit code 0: success, or the child command exited with 0
//! - Exit code 1: a configuration could not be generated
//! - Exit code 2: invalid command-line usage (handled by clap)
//! - Otherwise: the exit code of the child command

mod common;
use common::prelude::*;

/// Exit code 0 is returned when there is nothing to do.
#[test]
fn test_exit_code_no_configs() {
    TestFixture::new().command().assert().code(0);
}

/// Exit code 0 is returned for --help.
#[test]
fn test_exit_code_help() {
    let mut cmd = cargo_bin_cmd!("env2conf");

    cmd.arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("--configs"));
}

/// Exit code 0 is returned for --version.
#[test]
fn test_exit_code_version() {
    let mut cmd = cargo_bin_cmd!("env2conf");

    cmd.arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Exit code 1 is returned when required options are missing.
#[test]
fn test_exit_code_missing_options() {
    TestFixture::new()
        .command()
        .args(["--configs", "app"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Missing required environment variables: APP_OPTS_FILE, APP_OPTS_FORMAT",
        ));
}

/// Exit code 1 is returned for an invalid configuration name.
#[test]
fn test_exit_code_invalid_name() {
    TestFixture::new()
        .command()
        .args(["--configs", "my-app"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Config names must only use letters or numbers",
        ));
}

/// The child command is not run when generation fails.
#[cfg(unix)]
#[test]
fn test_exit_code_failure_skips_command() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--configs", "app", "touch", "ran"])
        .assert()
        .code(1);

    assert!(!fixture.path("ran").exists());
}

/// The child command's exit code is passed through.
#[cfg(unix)]
#[test]
fn test_exit_code_from_command() {
    TestFixture::new()
        .command()
        .args(["sh", "-c", "exit 3"])
        .assert()
        .code(3);
}

/// The child command sees the generated file.
#[cfg(unix)]
#[test]
fn test_command_runs_after_generation() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--configs", "app", "cat", "out.yaml"])
        .env("APP_OPTS_FILE", fixture.path("out.yaml"))
        .env("APP_OPTS_FORMAT", "yaml")
        .env("APP_greeting", "hello")
        .assert()
        .success()
        .stdout(predicate::str::contains("greeting: hello"));
}

/// Exit code 2 is returned when a flag is missing its value.
#[test]
fn test_exit_code_missing_flag_value() {
    TestFixture::new()
        .command()
        .arg("--configs")
        .assert()
        .code(2);
}
