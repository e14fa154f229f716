//! Shell command patches.
//!
//! A [`CommandPatch`] runs one shell command to apply and, optionally, another
//! to revert. Commands inherit the caller's environment, with the patch's own
//! variables layered on top plus:
//! - `VERPATCH_VERSION`: the patch's version key
//! - `VERPATCH_DIRECTION`: `apply` or `revert`

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;
use tracing::{debug, info};

use crate::list::Direction;
use crate::patch::{BoxError, Patch};

pub const VERSION_ENV: &str = "VERPATCH_VERSION";
pub const DIRECTION_ENV: &str = "VERPATCH_DIRECTION";

/// Errors from running a command patch.
#[derive(Debug, Error)]
pub enum CommandError {
  /// The shell could not be started.
  #[error("failed to spawn {shell}: {source}")]
  Spawn {
    shell: String,
    #[source]
    source: io::Error,
  },

  /// The command exited unsuccessfully.
  #[error("command failed with exit code {code:?}: {cmd}{}", format_stderr(.stderr))]
  Failed {
    cmd: String,
    code: Option<i32>,
    stderr: String,
  },

  /// The patch declares no revert command.
  #[error("patch {version} has no revert command")]
  Irreversible { version: String },
}

fn format_stderr(stderr: &str) -> String {
  if stderr.is_empty() {
    String::new()
  } else {
    format!("\n{}", stderr)
  }
}

/// A patch backed by shell commands.
#[derive(Debug, Clone)]
pub struct CommandPatch {
  version: String,
  apply: String,
  revert: Option<String>,
  shell: Option<String>,
  workdir: Option<PathBuf>,
  env: BTreeMap<String, String>,
}

impl CommandPatch {
  pub fn new(version: impl Into<String>, apply: impl Into<String>) -> Self {
    Self {
      version: version.into(),
      apply: apply.into(),
      revert: None,
      shell: None,
      workdir: None,
      env: BTreeMap::new(),
    }
  }

  pub fn with_revert(mut self, revert: impl Into<String>) -> Self {
    self.revert = Some(revert.into());
    self
  }

  /// Run commands with `shell` instead of the platform default.
  pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
    self.shell = Some(shell.into());
    self
  }

  pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
    self.workdir = Some(workdir.into());
    self
  }

  pub fn with_env(mut self, env: BTreeMap<String, String>) -> Self {
    self.env = env;
    self
  }

  pub fn version(&self) -> &str {
    &self.version
  }

  pub fn is_reversible(&self) -> bool {
    self.revert.is_some()
  }

  /// Run the command for `direction`.
  ///
  /// # Returns
  ///
  /// The command's trimmed stdout.
  pub fn run(&self, direction: Direction) -> Result<String, CommandError> {
    let cmd = match direction {
      Direction::Apply => self.apply.as_str(),
      Direction::Revert => self.revert.as_deref().ok_or_else(|| CommandError::Irreversible {
        version: self.version.clone(),
      })?,
    };

    info!(version = %self.version, %direction, cmd = %cmd, "executing command");

    let (shell, shell_args) = get_shell(self.shell.as_deref());

    let mut command = Command::new(&shell);
    command
      .args(&shell_args)
      .arg(cmd)
      .envs(&self.env)
      .env(VERSION_ENV, &self.version)
      .env(DIRECTION_ENV, direction.as_str());

    if let Some(workdir) = &self.workdir {
      command.current_dir(workdir);
    }

    debug!(shell = %shell, workdir = ?self.workdir, "spawning process");

    let output = command.output().map_err(|source| CommandError::Spawn {
      shell: shell.clone(),
      source,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    if !stdout.is_empty() {
      debug!(stdout = %stdout, "command stdout");
    }
    if !stderr.is_empty() {
      debug!(stderr = %stderr, "command stderr");
    }

    if !output.status.success() {
      return Err(CommandError::Failed {
        cmd: cmd.to_string(),
        code: output.status.code(),
        stderr,
      });
    }

    Ok(stdout)
  }
}

impl Patch for CommandPatch {
  fn apply(&self) -> Result<(), BoxError> {
    self.run(Direction::Apply)?;
    Ok(())
  }

  fn revert(&self) -> Result<(), BoxError> {
    self.run(Direction::Revert)?;
    Ok(())
  }
}

/// Shell binary and the arguments that precede the command string.
fn get_shell(override_shell: Option<&str>) -> (String, Vec<String>) {
  if let Some(shell) = override_shell {
    let args = if shell.contains("powershell") || shell.contains("pwsh") {
      vec!["-NoProfile".to_string(), "-Command".to_string()]
    } else if shell.contains("cmd") {
      vec!["/C".to_string()]
    } else {
      vec!["-c".to_string()]
    };
    return (shell.to_string(), args);
  }

  #[cfg(unix)]
  {
    ("/bin/sh".to_string(), vec!["-c".to_string()])
  }

  #[cfg(windows)]
  {
    ("cmd.exe".to_string(), vec!["/C".to_string()])
  }
}
