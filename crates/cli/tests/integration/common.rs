//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// Read fixture content.
pub fn fixture_content(name: &str) -> String {
  std::fs::read_to_string(fixture_path(name)).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding `patches.toml`; patch
/// commands write their journal to `log.txt` next to it.
pub struct TestEnv {
  pub temp: TempDir,
  pub manifest_path: PathBuf,
}

impl TestEnv {
  /// Create from a fixture file.
  ///
  /// Copies the fixture content to a temporary `patches.toml`.
  pub fn from_fixture(name: &str) -> Self {
    let temp = TempDir::new().unwrap();
    let manifest_path = temp.path().join("patches.toml");
    std::fs::write(&manifest_path, fixture_content(name)).unwrap();
    Self { temp, manifest_path }
  }

  /// Create an environment with no manifest.
  pub fn empty() -> Self {
    let temp = TempDir::new().unwrap();
    let manifest_path = temp.path().join("patches.toml");
    Self { temp, manifest_path }
  }

  /// Lines of `relative_path`, trimmed; empty if the file does not exist.
  pub fn lines(&self, relative_path: &str) -> Vec<String> {
    match std::fs::read_to_string(self.temp.path().join(relative_path)) {
      Ok(content) => content.lines().map(|l| l.trim().to_string()).collect(),
      Err(_) => Vec::new(),
    }
  }

  /// The patch journal written by fixture commands.
  pub fn log(&self) -> Vec<String> {
    self.lines("log.txt")
  }

  /// Get a Command for the verpatch binary running inside the temp directory.
  pub fn verpatch_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("verpatch");
    cmd.current_dir(self.temp.path());
    cmd.env_remove("RUST_LOG");
    cmd
  }
}
