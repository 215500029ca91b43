//! Common utilities for integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Address nothing listens on, so a stray request fails fast instead of
/// reaching the real API
pub const UNREACHABLE_API_URL: &str = "http://127.0.0.1:9/api/v1";

/// Get the path to the `todoist` binary
#[allow(deprecated)] // cargo_bin() is deprecated but needed for fallback
pub fn todoist_binary() -> PathBuf {
    std::env::var("CARGO_BIN_EXE_todoist")
        .map(PathBuf::from)
        .unwrap_or_else(|_| assert_cmd::cargo::cargo_bin("todoist"))
}

/// Create a Command for `todoist` isolated from the user's environment
///
/// The config file lives in `config_dir`, no token is inherited and the
/// API URL points at a closed port.
pub fn todoist_command(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(todoist_binary());
    cmd.env("HOME", "/nonexistent")
        .env("USERPROFILE", "/nonexistent")
        .env("TODOIST_CLI_CONFIG_DIR", config_dir)
        .env("TODOIST_API_URL", UNREACHABLE_API_URL)
        .env_remove("TODOIST_API_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

pub fn setup_test_env() -> TempDir {
    TempDir::new().unwrap()
}
